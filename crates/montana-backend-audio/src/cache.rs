//! Memoized sound lookups.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use montana_spec::{SoundName, SoundSpec};
use tracing::debug;

use crate::clip::AudioClip;
use crate::error::AudioResult;
use crate::rng::create_sound_rng;
use crate::synth::WaveformSynthesizer;

type SoundKey = (SoundName, u32, u64);

/// Lazily populated, never invalidated cache of rendered sounds.
///
/// Each miss seeds a fresh generator from the bank's base seed and the sound
/// name, so a clip does not depend on which sounds were requested before it.
/// The lock is held while rendering; each key is rendered at most once.
#[derive(Debug)]
pub struct SoundBank {
    synthesizer: WaveformSynthesizer,
    seed: u32,
    entries: Mutex<HashMap<SoundKey, Arc<AudioClip>>>,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new(WaveformSynthesizer::default(), 0)
    }
}

impl SoundBank {
    /// Creates an empty bank.
    pub fn new(synthesizer: WaveformSynthesizer, seed: u32) -> Self {
        Self {
            synthesizer,
            seed,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The synthesizer used on misses.
    pub fn synthesizer(&self) -> &WaveformSynthesizer {
        &self.synthesizer
    }

    /// Base seed for the stochastic sounds.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns `name` at its default duration, rendering it on first use.
    pub fn get(&self, name: SoundName) -> AudioResult<Arc<AudioClip>> {
        self.get_spec(&self.synthesizer.spec(name))
    }

    /// Returns the clip for `spec`, rendering it on first use.
    pub fn get_spec(&self, spec: &SoundSpec) -> AudioResult<Arc<AudioClip>> {
        let key = spec.cache_key();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(clip) = entries.get(&key) {
            debug!(sound = %spec.name, "sound bank hit");
            return Ok(Arc::clone(clip));
        }

        debug!(sound = %spec.name, seed = self.seed, "sound bank miss");
        let mut rng = create_sound_rng(self.seed, spec.name.as_str());
        let clip = Arc::new(self.synthesizer.render(spec, &mut rng)?);
        entries.insert(key, Arc::clone(&clip));
        Ok(clip)
    }

    /// Number of cached clips.
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
