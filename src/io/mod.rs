// Purpose - audio device ownership and the control/state boundary

#[cfg(feature = "rtrb")]
pub mod player;

#[cfg(feature = "rtrb")]
pub use player::{AudioError, ResonancePlayer};
