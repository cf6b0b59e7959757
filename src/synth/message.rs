#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::chart::Planet;

/// Control messages crossing into the engine. Applied strictly in the
/// order issued.
#[derive(Debug, Copy, Clone)]
pub enum ToneCommand {
    StartTone { planet: Planet, frequency: f32 },
    StopTone { planet: Planet },
    /// Start the staggered ensemble, or stop everything if it is already
    /// playing. Frequencies are indexed by [`Planet::index`].
    ToggleHarmony { frequencies: [f32; Planet::COUNT] },
    StopAll,
    SetVolume { level: f32 },
    Shutdown,
}

/// Read-only view of engine state, published after every rendered block.
/// Collaborators poll this to highlight playing tones; they cannot mutate
/// engine state through it.
#[derive(Debug, Copy, Clone, Default)]
pub struct EngineSnapshot {
    /// Per-planet "currently audible" flags, indexed by [`Planet::index`].
    pub active: [bool; Planet::COUNT],
    /// Per-planet gain levels, 0 when no voice is live.
    pub gain: [f32; Planet::COUNT],
    /// True while any voice is live or any ensemble start is pending.
    pub playing: bool,
}

impl EngineSnapshot {
    pub fn is_active(&self, planet: Planet) -> bool {
        self.active[planet.index()]
    }
}

pub trait CommandReceiver {
    fn pop(&mut self) -> Option<ToneCommand>;
}

#[cfg(feature = "rtrb")]
impl CommandReceiver for Consumer<ToneCommand> {
    fn pop(&mut self) -> Option<ToneCommand> {
        Consumer::pop(self).ok()
    }
}
