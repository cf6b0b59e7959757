use crate::chart::Planet;
use crate::dsp::{oscillator::SineOsc, ramp::GainRamp};
use crate::GAIN_FLOOR;

use super::RAMP_SECS;

/// Lifecycle of a live voice.
///
/// There is no `Idle` variant: an idle planet simply has no voice in the
/// engine's live set. A voice is created in `Starting` and leaves the set
/// when it reaches `Released`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    /// Gain ramping up from the floor toward the target.
    Starting,
    /// Holding the target gain until stopped.
    Sustaining,
    /// Gain ramping back down to the floor.
    Stopping,
    /// Ramp-down complete; the engine retires this voice.
    Released,
}

/// One live oscillator tied to a single planet key. Owned exclusively by
/// the engine; nothing outside the synth module constructs or holds one.
pub struct Voice {
    planet: Planet,
    frequency: f32,
    state: VoiceState,
    osc: SineOsc,
    ramp: GainRamp,
    sample_rate: f32,
}

impl Voice {
    /// Begin a new voice in `Starting`, ramping from silence to
    /// `target_gain` over the ramp window.
    pub(super) fn start(planet: Planet, frequency: f32, target_gain: f32, sample_rate: f32) -> Self {
        Self {
            planet,
            frequency,
            state: VoiceState::Starting,
            osc: SineOsc::new(),
            ramp: GainRamp::new(GAIN_FLOOR, target_gain, RAMP_SECS, sample_rate),
            sample_rate,
        }
    }

    /// Transition into `Stopping` from wherever the voice currently is.
    /// The ramp restarts from the current level, so a stop issued mid-start
    /// stays click-free. No-op if already stopping or released.
    pub(super) fn release(&mut self) {
        if matches!(self.state, VoiceState::Stopping | VoiceState::Released) {
            return;
        }
        self.ramp.retarget(GAIN_FLOOR, RAMP_SECS, self.sample_rate);
        self.state = VoiceState::Stopping;
    }

    /// Advance one sample: step the gain ramp, run the state machine, and
    /// return the oscillator output scaled by the current gain.
    pub(super) fn next_sample(&mut self) -> f32 {
        let gain = self.ramp.next_sample();

        match self.state {
            VoiceState::Starting if self.ramp.done() => {
                self.state = VoiceState::Sustaining;
            }
            VoiceState::Stopping if self.ramp.done() => {
                self.state = VoiceState::Released;
            }
            _ => {}
        }

        if self.state == VoiceState::Released {
            return 0.0;
        }

        self.osc.next_sample(self.frequency, self.sample_rate) * gain
    }

    pub fn planet(&self) -> Planet {
        self.planet
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    /// Current gain level (floor..=target).
    pub fn gain_level(&self) -> f32 {
        self.ramp.level()
    }

    /// Audible and not on the way out.
    pub fn is_active(&self) -> bool {
        matches!(self.state, VoiceState::Starting | VoiceState::Sustaining)
    }

    pub fn is_released(&self) -> bool {
        self.state == VoiceState::Released
    }
}
