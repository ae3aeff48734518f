//! Audio output: a cpal stream fed from a sample queue.
//!
//! Callers push interleaved f32 samples with [`AudioOutput::enqueue`] and
//! return immediately; the device callback drains the queue on its own
//! thread and plays silence once it runs dry.

use anyhow::{bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

type SampleQueue = Arc<Mutex<VecDeque<f32>>>;

/// Format requested from the output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    pub sample_rate: u32,
    pub channels: u16,
    /// Frames per device callback
    pub buffer_frames: u32,
}

impl Default for AudioSpec {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            buffer_frames: 1024,
        }
    }
}

impl AudioSpec {
    fn stream_config(&self) -> cpal::StreamConfig {
        cpal::StreamConfig {
            channels: self.channels,
            sample_rate: cpal::SampleRate(self.sample_rate),
            buffer_size: cpal::BufferSize::Fixed(self.buffer_frames),
        }
    }
}

pub struct AudioOutput {
    // Playback stops when the stream is dropped
    _stream: Option<cpal::Stream>,
    queue: SampleQueue,
    sample_rate: u32,
    channels: u16,
}

impl AudioOutput {
    /// Opens the default output device and starts playback.
    ///
    /// The requested format is tried first. If the device rejects it, its
    /// default configuration is used as long as that is f32.
    pub fn open(spec: &AudioSpec) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no default audio output device")?;
        let name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let queue: SampleQueue = Arc::new(Mutex::new(VecDeque::new()));
        let requested = spec.stream_config();

        let (stream, config) = match build_stream(&device, &requested, Arc::clone(&queue)) {
            Ok(stream) => (stream, requested),
            Err(e) => {
                log::warn!("output device rejected {:?}: {}; trying its default config", spec, e);
                let supported = device
                    .default_output_config()
                    .context("querying default output config")?;
                if supported.sample_format() != cpal::SampleFormat::F32 {
                    bail!(
                        "default output format is {:?}, f32 required",
                        supported.sample_format()
                    );
                }
                let config = supported.config();
                let stream = build_stream(&device, &config, Arc::clone(&queue))
                    .context("building output stream")?;
                (stream, config)
            }
        };

        stream.play().context("starting output stream")?;

        log::info!(
            "🔊 audio output '{}' opened: {} Hz, {} channels",
            name,
            config.sample_rate.0,
            config.channels
        );

        Ok(Self {
            _stream: Some(stream),
            queue,
            sample_rate: config.sample_rate.0,
            channels: config.channels,
        })
    }

    /// Queue with no device behind it; samples accumulate until dropped.
    #[cfg(test)]
    pub fn detached(sample_rate: u32, channels: u16) -> Self {
        Self {
            _stream: None,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            sample_rate,
            channels,
        }
    }

    /// Actual sample rate of the open stream.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Actual channel count of the open stream.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Appends interleaved samples to the playback queue.
    pub fn enqueue(&self, samples: &[f32]) {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.extend(samples.iter().copied());
    }

    /// Samples still waiting to be played.
    pub fn queued(&self) -> usize {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Drop for AudioOutput {
    fn drop(&mut self) {
        log::debug!("closing audio output ({} samples unplayed)", self.queued());
    }
}

fn build_stream(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    queue: SampleQueue,
) -> Result<cpal::Stream, cpal::BuildStreamError> {
    device.build_output_stream(
        config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            let mut queue = queue.lock().unwrap_or_else(PoisonError::into_inner);
            drain_into(&mut queue, data);
        },
        |err| log::error!("audio stream error: {}", err),
        None,
    )
}

/// Moves queued samples into `out`, padding with silence.
fn drain_into(queue: &mut VecDeque<f32>, out: &mut [f32]) {
    for slot in out.iter_mut() {
        *slot = queue.pop_front().unwrap_or(0.0);
    }
}
