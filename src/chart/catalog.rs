//! Fixed symbol catalogs the signature derivation selects from.
//!
//! Catalog order is load-bearing: every field in a signature is an index
//! into one of these tables, so reordering entries changes every chart
//! ever generated. Append only.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four classical elements.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// The twelve zodiac signs, in ecliptic order starting at Aries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Zodiac {
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Aries,
        Zodiac::Taurus,
        Zodiac::Gemini,
        Zodiac::Cancer,
        Zodiac::Leo,
        Zodiac::Virgo,
        Zodiac::Libra,
        Zodiac::Scorpio,
        Zodiac::Sagittarius,
        Zodiac::Capricorn,
        Zodiac::Aquarius,
        Zodiac::Pisces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// The five charted bodies, in the fixed order they appear in a signature
/// and in the harmony ensemble. This order is part of the contract, not
/// derived from the input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
}

impl Planet {
    pub const COUNT: usize = 5;

    pub const ALL: [Planet; Planet::COUNT] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
        }
    }

    /// Position in [`Planet::ALL`], also the ensemble stagger slot.
    pub fn index(self) -> usize {
        match self {
            Planet::Sun => 0,
            Planet::Moon => 1,
            Planet::Mercury => 2,
            Planet::Venus => 3,
            Planet::Mars => 4,
        }
    }

    /// Base resonance frequency in Hz before the per-name perturbation.
    pub fn base_frequency(self) -> f32 {
        match self {
            Planet::Sun => 126.22,
            Planet::Moon => 210.42,
            Planet::Mercury => 141.27,
            Planet::Venus => 221.23,
            Planet::Mars => 144.72,
        }
    }

    /// Width in whole Hz of the name-digest perturbation band. Chosen so
    /// `base_frequency + span - 1` stays below 300 Hz for every planet.
    pub(crate) fn frequency_span(self) -> u64 {
        match self {
            Planet::Sun => 60,
            Planet::Moon => 48,
            Planet::Mercury => 72,
            Planet::Venus => 54,
            Planet::Mars => 66,
        }
    }

    /// Per-planet digest offset. Values are distinct modulo 12 and modulo
    /// 30 so no two planets can share sign, house, and degree for the
    /// same input.
    pub(crate) fn digest_offset(self) -> i64 {
        match self {
            Planet::Sun => 3,
            Planet::Moon => 7,
            Planet::Mercury => 11,
            Planet::Venus => 16,
            Planet::Mars => 21,
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Archetype triples are selected whole, never assembled label by label,
/// so each reading stays thematically coherent.
pub const ARCHETYPE_TRIPLES: [[&str; 3]; 4] = [
    ["Depth Diver", "Creative Fire", "Mystic Healer"],
    ["Star Weaver", "Quiet Architect", "Dawn Keeper"],
    ["Storm Caller", "Bright Wanderer", "Root Tender"],
    ["Moon Listener", "Ember Guide", "Tide Walker"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_order_is_fixed() {
        let names: Vec<&str> = Planet::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Sun", "Moon", "Mercury", "Venus", "Mars"]);
        for (i, planet) in Planet::ALL.iter().enumerate() {
            assert_eq!(planet.index(), i);
        }
    }

    #[test]
    fn frequency_bands_stay_audible() {
        for planet in Planet::ALL {
            let low = planet.base_frequency();
            let high = planet.base_frequency() + (planet.frequency_span() - 1) as f32;
            assert!(low >= 100.0, "{planet} band starts below 100 Hz");
            assert!(high < 300.0, "{planet} band tops out above 300 Hz");
        }
    }

    #[test]
    fn digest_offsets_do_not_collide() {
        for (i, a) in Planet::ALL.iter().enumerate() {
            for b in &Planet::ALL[i + 1..] {
                assert_ne!(a.digest_offset() % 12, b.digest_offset() % 12);
                assert_ne!(a.digest_offset() % 30, b.digest_offset() % 30);
            }
        }
    }

    #[test]
    fn catalogs_have_expected_sizes() {
        assert_eq!(Element::ALL.len(), 4);
        assert_eq!(Zodiac::ALL.len(), 12);
        assert_eq!(ARCHETYPE_TRIPLES.len(), 4);
    }
}
