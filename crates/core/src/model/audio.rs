use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::model::AudioId;

/// A finalized, playable recording (a complete WAV file in memory).
///
/// Cloning shares the underlying buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioHandle {
    id: AudioId,
    wav: Arc<[u8]>,
    sample_rate: u32,
    duration: Duration,
}

impl AudioHandle {
    #[must_use]
    pub fn new(wav: Vec<u8>, sample_rate: u32, duration: Duration) -> Self {
        Self {
            id: AudioId::new_random(),
            wav: wav.into(),
            sample_rate,
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> AudioId {
        self.id
    }

    #[must_use]
    pub fn wav_bytes(&self) -> &[u8] {
        &self.wav
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

// The WAV payload can be large; keep it out of debug output and logs.
impl fmt::Debug for AudioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioHandle")
            .field("id", &self.id)
            .field("bytes", &self.wav.len())
            .field("sample_rate", &self.sample_rate)
            .field("duration", &self.duration)
            .finish()
    }
}
