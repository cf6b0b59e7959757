//! Daily attunement: a chart-free reading derived from the calendar day.
//!
//! Same idiom as signature derivation (catalog index by modulus over a
//! linear day representation) but keyed on the day-of-year alone, so every
//! visitor shares the same reading for a given date.

use super::catalog::Planet;
use super::date::CivilDate;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Bodies eligible to dominate a day. Wider than the charted set: the
/// outer planets take part here even though they carry no voice.
const DAILY_PLANETS: [&str; 7] = [
    "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

const ENERGIES: [&str; 6] = [
    "Harmony",
    "Transformation",
    "Manifestation",
    "Introspection",
    "Action",
    "Creativity",
];

const MOON_PHASES: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAttunement {
    pub date: CivilDate,
    pub dominant_planet: &'static str,
    /// Base frequency for the day in Hz.
    pub frequency: f32,
    pub energy: &'static str,
    pub moon_phase: &'static str,
    /// Harmonic reference tone in whole Hz.
    pub harmonic_tone: u16,
    pub guidance: &'static str,
}

/// Reading for the given calendar date. Pure: two calls with the same date
/// agree, today and forever.
pub fn daily_attunement(date: CivilDate) -> DailyAttunement {
    let day = date.day_of_year();
    let energy = ENERGIES[(day.rem_euclid(ENERGIES.len() as i64)) as usize];

    DailyAttunement {
        date,
        dominant_planet: DAILY_PLANETS[(day.rem_euclid(DAILY_PLANETS.len() as i64)) as usize],
        frequency: Planet::Sun.base_frequency() + day.rem_euclid(100) as f32,
        energy,
        moon_phase: MOON_PHASES[((day / 4).rem_euclid(MOON_PHASES.len() as i64)) as usize],
        harmonic_tone: 432 + day.rem_euclid(64) as u16,
        guidance: guidance_for(energy),
    }
}

fn guidance_for(energy: &str) -> &'static str {
    match energy {
        "Harmony" => "Focus on balance and peaceful relationships today.",
        "Transformation" => "Embrace change and release what no longer serves.",
        "Manifestation" => "Set clear intentions and take concrete steps toward your goals.",
        "Introspection" => "Turn inward for wisdom. Practice mindfulness and self-reflection.",
        "Action" => "Channel your energy into productive activities. Take decisive action.",
        "Creativity" => "Express yourself through art, music, or creative projects today.",
        _ => "Align with the day's flow.",
    }
}
