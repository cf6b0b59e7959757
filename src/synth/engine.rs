//! The tone resonance engine.
//!
//! All voice concurrency here is logical: every voice and every scheduled
//! ensemble start is a state machine keyed to the engine's frame clock,
//! which only advances inside [`ToneEngine::render_block`]. A "timer" is a
//! frame deadline in the pending registry, which makes cancellation exact
//! and leak-freedom checkable: after `stop_all` or `shutdown` the registry
//! and the live set are both empty, and nothing can fire later.
//!
//! Control operations mutate state immediately and never block; their
//! audible effect unfolds over subsequent rendered blocks.

use crate::chart::{Planet, PlanetPlacement};

use super::message::{EngineSnapshot, ToneCommand};
use super::voice::Voice;
use super::{DEFAULT_VOLUME, MASTER_GAIN, STAGGER_SECS};

/// One scheduled ensemble start waiting for its frame deadline.
struct PendingStart {
    planet: Planet,
    frequency: f32,
    due_frame: u64,
}

pub struct ToneEngine {
    sample_rate: f32,
    /// User volume 0..=1. Scales the target of future ramps only.
    volume: f32,
    /// Live voices, at most one per planet key.
    voices: Vec<Voice>,
    /// Outstanding stagger deadlines. Cleared wholesale by `stop_all`.
    pending: Vec<PendingStart>,
    /// Frames rendered since construction.
    frame_clock: u64,
}

impl ToneEngine {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            volume: DEFAULT_VOLUME,
            voices: Vec::with_capacity(Planet::COUNT),
            pending: Vec::with_capacity(Planet::COUNT),
            frame_clock: 0,
        }
    }

    /// Start (or restart) the voice for `planet`. An existing live voice
    /// for the same key is forced out synchronously first; two voices for
    /// one planet never coexist.
    pub fn start_tone(&mut self, planet: Planet, frequency: f32) {
        self.cancel_pending(planet);

        if let Some(index) = self.voices.iter().position(|v| v.planet() == planet) {
            let mut superseded = self.voices.remove(index);
            superseded.release();
            log::debug!("superseded live {planet} voice");
        }

        debug_assert!(
            !self.voices.iter().any(|v| v.planet() == planet),
            "duplicate voice for {planet}"
        );

        log::debug!("start {planet} at {frequency:.2} Hz");
        self.voices.push(Voice::start(
            planet,
            frequency,
            self.target_gain(),
            self.sample_rate,
        ));
    }

    /// Ramp the voice for `planet` down and retire it. Cancels any pending
    /// ensemble start for the same key. No-op for an idle planet.
    pub fn stop_tone(&mut self, planet: Planet) {
        self.cancel_pending(planet);
        if let Some(voice) = self.voices.iter_mut().find(|v| v.planet() == planet) {
            log::debug!("stop {planet}");
            voice.release();
        }
    }

    /// Ensemble toggle. If anything is playing or scheduled, this stops
    /// everything; otherwise each placement's start is scheduled one
    /// stagger interval after the previous, in the given order.
    pub fn play_harmony(&mut self, placements: &[PlanetPlacement]) {
        if self.is_playing() {
            self.stop_all();
            return;
        }
        self.schedule_ensemble(placements.iter().map(|p| (p.planet, p.frequency)));
    }

    /// Stop every live voice and cancel every pending start. Voices that
    /// never started never will.
    pub fn stop_all(&mut self) {
        log::debug!(
            "stop all ({} live, {} pending)",
            self.voices.len(),
            self.pending.len()
        );
        self.pending.clear();
        for voice in &mut self.voices {
            voice.release();
        }
    }

    /// Rescale the target used by future ramps. Live voices keep their
    /// current gain; forcing them to the new target would jump audibly.
    pub fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// True while `planet`'s voice is starting or sustaining.
    pub fn is_active(&self, planet: Planet) -> bool {
        self.voices
            .iter()
            .any(|v| v.planet() == planet && v.is_active())
    }

    /// True while any voice is active or any ensemble start is pending.
    /// Voices that are already ramping out do not count, so a fresh
    /// ensemble can begin while the previous one fades.
    pub fn is_playing(&self) -> bool {
        !self.pending.is_empty() || self.voices.iter().any(|v| v.is_active())
    }

    /// Target frequency of the live voice for `planet`, if one exists.
    pub fn voice_frequency(&self, planet: Planet) -> Option<f32> {
        self.voices
            .iter()
            .find(|v| v.planet() == planet)
            .map(|v| v.frequency())
    }

    /// Current gain of the live voice for `planet`, if one exists.
    pub fn gain_level(&self, planet: Planet) -> Option<f32> {
        self.voices
            .iter()
            .find(|v| v.planet() == planet)
            .map(|v| v.gain_level())
    }

    /// Mix all voices into the mono buffer, firing due ensemble starts
    /// sample-accurately and retiring voices whose stop ramp finished.
    pub fn render_block(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            self.fire_due_starts();

            let mut mix = 0.0;
            for voice in &mut self.voices {
                mix += voice.next_sample();
            }
            *sample = mix;

            self.frame_clock += 1;
        }

        self.retire_released();
    }

    /// Idempotent teardown: every voice is dropped and every pending
    /// start cancelled. The engine remains usable afterwards.
    pub fn shutdown(&mut self) {
        if self.has_live_resources() {
            log::debug!(
                "shutdown ({} live, {} pending)",
                self.voices.len(),
                self.pending.len()
            );
        }
        self.pending.clear();
        self.voices.clear();
    }

    /// Anything still live or scheduled? False after `shutdown`, and
    /// after `stop_all` once the stop ramps have rendered out.
    pub fn has_live_resources(&self) -> bool {
        !self.voices.is_empty() || !self.pending.is_empty()
    }

    pub fn frame_clock(&self) -> u64 {
        self.frame_clock
    }

    /// Apply one control message. The io layer feeds these from its ring
    /// in arrival order.
    pub fn apply(&mut self, command: ToneCommand) {
        match command {
            ToneCommand::StartTone { planet, frequency } => self.start_tone(planet, frequency),
            ToneCommand::StopTone { planet } => self.stop_tone(planet),
            ToneCommand::ToggleHarmony { frequencies } => {
                if self.is_playing() {
                    self.stop_all();
                } else {
                    let pairs: Vec<(Planet, f32)> = Planet::ALL
                        .iter()
                        .map(|&p| (p, frequencies[p.index()]))
                        .collect();
                    self.schedule_ensemble(pairs.into_iter());
                }
            }
            ToneCommand::StopAll => self.stop_all(),
            ToneCommand::SetVolume { level } => self.set_volume(level),
            ToneCommand::Shutdown => self.shutdown(),
        }
    }

    /// Published after each block for read-only collaborators.
    pub fn snapshot(&self) -> EngineSnapshot {
        let mut snapshot = EngineSnapshot {
            playing: self.is_playing(),
            ..EngineSnapshot::default()
        };
        for voice in &self.voices {
            let index = voice.planet().index();
            snapshot.active[index] = voice.is_active();
            snapshot.gain[index] = voice.gain_level();
        }
        snapshot
    }

    fn target_gain(&self) -> f32 {
        self.volume * MASTER_GAIN
    }

    fn schedule_ensemble(&mut self, pairs: impl Iterator<Item = (Planet, f32)>) {
        let stagger_frames = (STAGGER_SECS * self.sample_rate) as u64;
        for (slot, (planet, frequency)) in pairs.enumerate() {
            self.pending.push(PendingStart {
                planet,
                frequency,
                due_frame: self.frame_clock + slot as u64 * stagger_frames,
            });
        }
        log::debug!("ensemble scheduled ({} starts)", self.pending.len());
    }

    fn cancel_pending(&mut self, planet: Planet) {
        self.pending.retain(|p| p.planet != planet);
    }

    fn fire_due_starts(&mut self) {
        while let Some(index) = self
            .pending
            .iter()
            .position(|p| p.due_frame <= self.frame_clock)
        {
            let due = self.pending.remove(index);
            self.start_tone(due.planet, due.frequency);
        }
    }

    fn retire_released(&mut self) {
        self.voices.retain(|v| !v.is_released());
    }
}
