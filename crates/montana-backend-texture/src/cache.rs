//! Memoized texture lookups.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use montana_spec::SpriteSpec;
use tracing::debug;

use crate::encode::{encode, TextureData};
use crate::synth::TextureSynthesizer;

/// Lazily populated, never invalidated texture cache.
///
/// Entries are keyed by the normalized request, so `alan:1` and `alan:4`
/// share one entry and static kinds keep a single entry regardless of frame.
/// The cache can be shared between threads; a request holds the lock while it
/// synthesizes so each key is generated at most once.
#[derive(Debug, Default)]
pub struct TextureCache {
    synthesizer: TextureSynthesizer,
    entries: Mutex<HashMap<SpriteSpec, Arc<TextureData>>>,
}

impl TextureCache {
    /// Creates an empty cache backed by `synthesizer`.
    pub fn new(synthesizer: TextureSynthesizer) -> Self {
        Self {
            synthesizer,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The synthesizer used on cache misses.
    pub fn synthesizer(&self) -> &TextureSynthesizer {
        &self.synthesizer
    }

    /// Returns the encoded texture for `spec`, synthesizing it on first use.
    pub fn get(&self, spec: &SpriteSpec) -> Arc<TextureData> {
        let key = spec.normalized();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(texture) = entries.get(&key) {
            debug!(sprite = %key, "texture cache hit");
            return Arc::clone(texture);
        }

        debug!(sprite = %key, "texture cache miss");
        let texture = Arc::new(encode(&self.synthesizer.synthesize(&key)));
        entries.insert(key, Arc::clone(&texture));
        texture
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
