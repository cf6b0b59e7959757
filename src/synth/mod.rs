// Purpose: voice lifecycle management for the tone resonance engine
// This layer sits above the dsp primitives and owns every live voice.

pub mod engine;
pub mod message;
pub mod voice;

pub use engine::ToneEngine;
pub use message::{EngineSnapshot, ToneCommand};
pub use voice::VoiceState;

/// Gain ramp window for voice starts and stops, in seconds.
pub const RAMP_SECS: f32 = 0.1;

/// Delay between successive ensemble voice starts, in seconds.
pub const STAGGER_SECS: f32 = 0.5;

/// Scale applied to the user volume (0..=1) before it becomes a ramp
/// target; full volume sustains at 0.1 gain so five voices mix without
/// clipping.
pub const MASTER_GAIN: f32 = 0.1;

/// Volume a fresh engine starts with.
pub const DEFAULT_VOLUME: f32 = 0.3;
