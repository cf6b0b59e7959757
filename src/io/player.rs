//! Resonance player: the audio-device half of the tone engine.
//!
//! The player owns the single output-device handle; the engine itself
//! lives inside the audio callback and is never shared. Control crosses
//! the thread boundary as Copy messages over a wait-free ring, state
//! comes back the same way as per-block snapshots, so neither side ever
//! blocks the other.
//!
//! When no output device can be acquired the player degrades to a silent
//! no-op: the condition is reported once and every operation keeps
//! working without sound.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};

use crate::chart::{Planet, PlanetPlacement};
use crate::synth::{EngineSnapshot, ToneCommand, ToneEngine};
use crate::MAX_BLOCK_SIZE;

const COMMAND_QUEUE_SIZE: usize = 64;
const SNAPSHOT_QUEUE_SIZE: usize = 128;
/// Rendered-sample tap for visualization; overflow drops samples.
const TAP_QUEUE_SIZE: usize = 8192;

/// Why the audio path is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No default output device on this host.
    NoOutputDevice,
    /// The device exists but the stream could not be configured, built,
    /// or started.
    Stream(String),
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "no default output device available"),
            AudioError::Stream(detail) => write!(f, "audio stream setup failed: {}", detail),
        }
    }
}

impl std::error::Error for AudioError {}

pub struct ResonancePlayer {
    stream: Option<cpal::Stream>,
    commands: Producer<ToneCommand>,
    snapshots: Consumer<EngineSnapshot>,
    sample_tap: Option<Consumer<f32>>,
    last_snapshot: EngineSnapshot,
    sample_rate: f32,
    available: bool,
}

impl ResonancePlayer {
    /// Acquire the default output device and start rendering. On failure
    /// the player comes up silent: the cause is logged once and all tone
    /// operations become no-ops.
    pub fn new() -> Self {
        match Self::build() {
            Ok(player) => player,
            Err(err) => {
                log::warn!("audio unavailable, tones disabled: {err}");
                Self::silent()
            }
        }
    }

    fn build() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device
            .default_output_config()
            .map_err(|err| AudioError::Stream(err.to_string()))?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (commands, mut command_rx) = RingBuffer::<ToneCommand>::new(COMMAND_QUEUE_SIZE);
        let (mut snapshot_tx, snapshots) = RingBuffer::<EngineSnapshot>::new(SNAPSHOT_QUEUE_SIZE);
        let (mut tap_tx, tap_rx) = RingBuffer::<f32>::new(TAP_QUEUE_SIZE);

        let mut engine = ToneEngine::new(sample_rate);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    while let Ok(command) = command_rx.pop() {
                        engine.apply(command);
                    }

                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames_to_render =
                            (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..frames_to_render];
                        engine.render_block(block);

                        // Copy to output (mono to all channels)
                        let out_off = frames_written * channels;
                        for (i, &sample) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = sample;
                            }
                            let _ = tap_tx.push(sample);
                        }

                        frames_written += frames_to_render;
                    }

                    let _ = snapshot_tx.push(engine.snapshot());
                },
                |err| log::warn!("audio stream error: {err}"),
                None,
            )
            .map_err(|err| AudioError::Stream(err.to_string()))?;

        stream
            .play()
            .map_err(|err| AudioError::Stream(err.to_string()))?;

        Ok(Self {
            stream: Some(stream),
            commands,
            snapshots,
            sample_tap: Some(tap_rx),
            last_snapshot: EngineSnapshot::default(),
            sample_rate,
            available: true,
        })
    }

    /// Device-less player: rings with abandoned far ends, so every send
    /// quietly goes nowhere.
    fn silent() -> Self {
        let (commands, _) = RingBuffer::new(1);
        let (_, snapshots) = RingBuffer::new(1);

        Self {
            stream: None,
            commands,
            snapshots,
            sample_tap: None,
            last_snapshot: EngineSnapshot::default(),
            sample_rate: 48_000.0,
            available: false,
        }
    }

    pub fn start_tone(&mut self, planet: Planet, frequency: f32) {
        self.send(ToneCommand::StartTone { planet, frequency });
    }

    pub fn stop_tone(&mut self, planet: Planet) {
        self.send(ToneCommand::StopTone { planet });
    }

    /// Toggle the staggered ensemble for these placements.
    pub fn play_harmony(&mut self, placements: &[PlanetPlacement]) {
        let mut frequencies: [f32; Planet::COUNT] =
            std::array::from_fn(|i| Planet::ALL[i].base_frequency());
        for placement in placements {
            frequencies[placement.planet.index()] = placement.frequency;
        }
        self.send(ToneCommand::ToggleHarmony { frequencies });
    }

    pub fn stop_all(&mut self) {
        self.send(ToneCommand::StopAll);
    }

    pub fn set_volume(&mut self, level: f32) {
        self.send(ToneCommand::SetVolume { level });
    }

    /// Latest engine view: is this planet's tone currently playing?
    pub fn is_active(&mut self, planet: Planet) -> bool {
        self.poll();
        self.last_snapshot.is_active(planet)
    }

    pub fn is_playing(&mut self) -> bool {
        self.poll();
        self.last_snapshot.playing
    }

    /// Latest per-block snapshot for display collaborators.
    pub fn snapshot(&mut self) -> EngineSnapshot {
        self.poll();
        self.last_snapshot
    }

    /// Hand the rendered-sample tap to a visualizer. Available once.
    pub fn take_sample_tap(&mut self) -> Option<Consumer<f32>> {
        self.sample_tap.take()
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Stop everything and release the device handle. Idempotent; the
    /// stream is dropped exactly once.
    pub fn dispose(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = self.commands.push(ToneCommand::Shutdown);
            drop(stream);
            log::debug!("audio device released");
        }
    }

    fn send(&mut self, command: ToneCommand) {
        if !self.available {
            return;
        }
        if self.commands.push(command).is_err() {
            log::debug!("command ring full, dropped {command:?}");
        }
    }

    fn poll(&mut self) {
        while let Ok(snapshot) = self.snapshots.pop() {
            self.last_snapshot = snapshot;
        }
    }
}

impl Default for ResonancePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ResonancePlayer {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Device-backed behavior is exercised by the cosmica binary and the
    // demo programs; tests cover the silent degradation path, which must
    // work anywhere (CI machines have no output device).

    #[test]
    fn silent_player_accepts_every_operation() {
        let mut player = ResonancePlayer::silent();
        assert!(!player.is_available());

        player.start_tone(Planet::Sun, 142.22);
        player.set_volume(0.8);
        player.stop_tone(Planet::Sun);
        player.stop_all();

        assert!(!player.is_active(Planet::Sun));
        assert!(!player.is_playing());
    }

    #[test]
    fn silent_player_dispose_is_idempotent() {
        let mut player = ResonancePlayer::silent();
        player.dispose();
        player.dispose();
        assert!(!player.is_available());
    }
}
