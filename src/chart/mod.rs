// Purpose: deterministic signature generation
// Leaf module: no audio dependencies, no I/O in the derivation path.

pub mod catalog;
pub mod daily;
pub mod date;
pub mod error;
pub mod generate;
pub mod input;
pub mod signature;

pub use catalog::{Element, Planet, Zodiac, ARCHETYPE_TRIPLES};
pub use daily::{daily_attunement, DailyAttunement};
pub use date::CivilDate;
pub use error::ChartError;
pub use generate::{generate, generate_at};
pub use input::BirthInput;
pub use signature::{PlanetPlacement, Signature};
