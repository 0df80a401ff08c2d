//! Error reporting for the `montana` binary.

use montana_backend_audio::AudioError;
use montana_backend_texture::TextureError;
use montana_spec::BackendError;

/// Returns the stable code of the first backend error in the chain, if any.
pub fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(audio) = cause.downcast_ref::<AudioError>() {
            return Some(audio.code());
        }
        cause.downcast_ref::<TextureError>().map(BackendError::code)
    })
}

/// Formats the one-line error header: `error[AUDIO_001]` or plain `error`.
pub fn error_label(err: &anyhow::Error) -> String {
    match error_code(err) {
        Some(code) => format!("error[{}]", code),
        None => "error".to_string(),
    }
}
