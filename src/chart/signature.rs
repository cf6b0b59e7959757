use super::catalog::{Element, Planet, Zodiac};
use super::input::BirthInput;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One charted body: where it sits and what it sounds like.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPlacement {
    pub planet: Planet,
    pub sign: Zodiac,
    /// House 1..=12.
    pub house: u8,
    /// Degree within the sign, 1..=30.
    pub degree: u8,
    /// Resonance frequency in Hz, always positive and audible.
    pub frequency: f32,
}

/// The derived chart for one birth input. Built once per generation cycle
/// and never mutated afterwards.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    /// The submitted input, echoed unchanged.
    pub birth: BirthInput,
    pub dominant_element: Element,
    pub sun_sign: Zodiac,
    pub moon_sign: Zodiac,
    pub rising_sign: Zodiac,
    /// Placements in the fixed catalog order (Sun first).
    pub planets: Vec<PlanetPlacement>,
    /// One whole triple from the archetype catalog.
    pub archetypes: [&'static str; 3],
}

impl Signature {
    /// Placement lookup by planet identity.
    pub fn placement(&self, planet: Planet) -> Option<&PlanetPlacement> {
        self.planets.iter().find(|p| p.planet == planet)
    }
}
