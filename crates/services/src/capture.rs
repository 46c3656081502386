//! Audio capture device seam.
//!
//! A device is acquired with [`AudioCapture::acquire`] and handed back exactly once, through
//! [`AudioCapture::release`] to keep the recording or [`AudioCapture::abandon`] to throw it
//! away. [`ActiveCapture`] owns an acquired stream and abandons it when dropped, so leaving
//! the page mid-recording still gives the device back.

use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use voice_core::model::AudioHandle;

use crate::error::CaptureError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicPermission {
    #[default]
    Granted,
    Denied,
}

/// Mono 16-bit PCM collected between acquire and release.
#[derive(Debug)]
pub struct CaptureStream {
    sample_rate: u32,
    samples: Vec<i16>,
    started_at: Instant,
}

impl CaptureStream {
    #[must_use]
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples: Vec::new(),
            started_at: Instant::now(),
        }
    }

    /// Append a chunk of captured samples.
    pub fn push(&mut self, chunk: &[i16]) {
        self.samples.extend_from_slice(chunk);
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Encode everything pushed so far as a WAV file.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Encode` if the WAV writer fails.
    pub fn into_handle(self) -> Result<AudioHandle, CaptureError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::with_capacity(44 + self.samples.len() * 2));
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
            for sample in &self.samples {
                writer.write_sample(*sample)?;
            }
            writer.finalize()?;
        }

        let duration = Duration::from_secs_f64(
            self.samples.len() as f64 / f64::from(self.sample_rate.max(1)),
        );
        Ok(AudioHandle::new(cursor.into_inner(), self.sample_rate, duration))
    }
}

/// Platform audio input.
#[async_trait]
pub trait AudioCapture: Send + Sync {
    /// # Errors
    ///
    /// Returns `CaptureError::PermissionDenied` when the user refused microphone access and
    /// `CaptureError::DeviceUnavailable` when no input can be opened.
    async fn acquire(&self) -> Result<CaptureStream, CaptureError>;

    /// Give the device back and turn the stream into a playable recording.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Encode` if the recording cannot be finalized. The device is
    /// released either way.
    fn release(&self, stream: CaptureStream) -> Result<AudioHandle, CaptureError>;

    /// Give the device back without encoding anything.
    fn abandon(&self, stream: CaptureStream) {
        drop(stream);
    }
}

/// Longest recording the simulated microphone will synthesize.
pub const MAX_SIMULATED_RECORDING: Duration = Duration::from_secs(120);

/// Stand-in microphone. Records silence for as long as the stream is held, up to a limit.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedMicrophone {
    permission: MicPermission,
    sample_rate: u32,
    max_length: Duration,
}

impl SimulatedMicrophone {
    #[must_use]
    pub fn new(permission: MicPermission, sample_rate: u32) -> Self {
        Self {
            permission,
            sample_rate,
            max_length: MAX_SIMULATED_RECORDING,
        }
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: Duration) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Default for SimulatedMicrophone {
    fn default() -> Self {
        Self::new(MicPermission::Granted, 16_000)
    }
}

#[async_trait]
impl AudioCapture for SimulatedMicrophone {
    async fn acquire(&self) -> Result<CaptureStream, CaptureError> {
        match self.permission {
            MicPermission::Granted => Ok(CaptureStream::new(self.sample_rate)),
            MicPermission::Denied => Err(CaptureError::PermissionDenied),
        }
    }

    fn release(&self, mut stream: CaptureStream) -> Result<AudioHandle, CaptureError> {
        let held = stream.elapsed().min(self.max_length);
        let expected = (held.as_secs_f64() * f64::from(stream.sample_rate())) as usize;
        let missing = expected.saturating_sub(stream.sample_count());
        if missing > 0 {
            stream.push(&vec![0_i16; missing]);
        }
        stream.into_handle()
    }
}

/// An acquired stream that is released on drop unless finished first.
pub struct ActiveCapture {
    capture: Arc<dyn AudioCapture>,
    stream: Option<CaptureStream>,
}

impl ActiveCapture {
    /// Acquire the device.
    ///
    /// # Errors
    ///
    /// Propagates the device's acquisition error.
    pub async fn acquire(capture: Arc<dyn AudioCapture>) -> Result<Self, CaptureError> {
        let stream = capture.acquire().await?;
        debug!(sample_rate = stream.sample_rate(), "capture acquired");
        Ok(Self {
            capture,
            stream: Some(stream),
        })
    }

    /// Push interface for captured chunks.
    pub fn push(&mut self, chunk: &[i16]) {
        if let Some(stream) = self.stream.as_mut() {
            stream.push(chunk);
        }
    }

    /// Release the device and keep the recording.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError` if the recording cannot be finalized.
    pub fn finish(mut self) -> Result<AudioHandle, CaptureError> {
        let stream = self
            .stream
            .take()
            .ok_or_else(|| CaptureError::DeviceUnavailable("stream already released".into()))?;
        let handle = self.capture.release(stream)?;
        debug!(audio = ?handle, "capture finished");
        Ok(handle)
    }
}

impl Drop for ActiveCapture {
    fn drop(&mut self) {
        if let Some(stream) = self.stream.take() {
            self.capture.abandon(stream);
            debug!("capture released without keeping the recording");
        }
    }
}
