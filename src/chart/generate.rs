//! Signature derivation.
//!
//! The derivation is a designed pseudo-random function of the input, not an
//! astronomical calculation. The contract is reproducibility: identical
//! name and birth date always produce a byte-identical signature, and the
//! digest scheme below is deliberately simple so that stays true across
//! releases. Changing any constant here changes every chart ever generated.
//!
//! Two digests feed every field:
//!
//!   name digest   order-sensitive weighted character sum, so "Ada" and
//!                 "Daa" diverge even though they share letters
//!   date digest   the birth date's linear day number (days since epoch)
//!
//! Each categorical field applies a modulus over its catalog to the digest
//! sum plus a field-specific offset; each planet additionally mixes in its
//! own offset so the five bodies spread across signs and houses instead of
//! stacking on one.

use super::catalog::{Element, Planet, Zodiac, ARCHETYPE_TRIPLES};
use super::date::CivilDate;
use super::error::ChartError;
use super::input::BirthInput;
use super::signature::{PlanetPlacement, Signature};

// Field offsets. Distinct per field so sun, moon, rising, and element do
// not coincide for inputs whose digests happen to collide.
const SUN_OFFSET: i64 = 0;
const MOON_OFFSET: i64 = 4;
const RISING_OFFSET: i64 = 8;
const ELEMENT_OFFSET: i64 = 2;
const HOUSE_OFFSET: i64 = 3;
const DEGREE_OFFSET: i64 = 7;

/// Derive the signature for `input`, rejecting invalid or future-dated
/// submissions against the system clock.
pub fn generate(input: &BirthInput) -> Result<Signature, ChartError> {
    generate_at(input, CivilDate::today())
}

/// Derivation against an explicit "today". Pure and total over its
/// arguments; everything downstream of validation depends only on the
/// name and birth date.
pub fn generate_at(input: &BirthInput, today: CivilDate) -> Result<Signature, ChartError> {
    let birth_date = input.validate(today)?;

    let name = name_digest(&input.name);
    let date = birth_date.day_number();

    let planets = Planet::ALL
        .iter()
        .map(|&planet| place_planet(planet, name, date))
        .collect();

    Ok(Signature {
        birth: input.clone(),
        dominant_element: Element::from_index(pick(name, date, ELEMENT_OFFSET, 4)),
        sun_sign: Zodiac::from_index(pick(name, date, SUN_OFFSET, 12)),
        moon_sign: Zodiac::from_index(pick(name, date, MOON_OFFSET, 12)),
        rising_sign: Zodiac::from_index(pick(name, date, RISING_OFFSET, 12)),
        planets,
        archetypes: ARCHETYPE_TRIPLES[(name % ARCHETYPE_TRIPLES.len() as u64) as usize],
    })
}

/// Order-sensitive weighted character sum: position `i` (zero-based)
/// contributes `(i + 1) * codepoint`.
pub(crate) fn name_digest(name: &str) -> u64 {
    name.chars()
        .enumerate()
        .fold(0u64, |digest, (position, ch)| {
            digest.wrapping_add((position as u64 + 1).wrapping_mul(ch as u64))
        })
}

/// Catalog index for one field: euclidean remainder keeps pre-epoch birth
/// dates (negative day numbers) in range.
fn pick(name: u64, date: i64, offset: i64, modulus: i64) -> usize {
    let combined = (name as i128) + (date as i128) + (offset as i128);
    combined.rem_euclid(modulus as i128) as usize
}

fn place_planet(planet: Planet, name: u64, date: i64) -> PlanetPlacement {
    let offset = planet.digest_offset();
    let perturbation = (name % planet.frequency_span()) as f32;

    PlanetPlacement {
        planet,
        sign: Zodiac::from_index(pick(name, date, offset, 12)),
        house: pick(name, date, offset + HOUSE_OFFSET, 12) as u8 + 1,
        degree: pick(name, date, offset + DEGREE_OFFSET, 30) as u8 + 1,
        frequency: planet.base_frequency() + perturbation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, y: i32, m: u8, d: u8) -> BirthInput {
        BirthInput::new(name, CivilDate::from_ymd(y, m, d).unwrap())
    }

    fn fixed_today() -> CivilDate {
        CivilDate::from_ymd(2026, 8, 4).unwrap()
    }

    #[test]
    fn identical_input_yields_identical_signature() {
        let ada = input("Ada", 2000, 1, 1);

        let first = generate_at(&ada, fixed_today()).unwrap();
        let second = generate_at(&ada, fixed_today()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.planets[0].frequency.to_bits(),
            second.planets[0].frequency.to_bits()
        );
    }

    #[test]
    fn derived_fields_stay_in_their_catalogs() {
        let names = ["Ada", "Grace", "Katherine Johnson", "黒澤", "Łukasz"];
        let dates = [(1950, 3, 14), (1969, 7, 20), (1988, 2, 29), (2001, 9, 9)];

        for name in names {
            for &(y, m, d) in &dates {
                let sig = generate_at(&input(name, y, m, d), fixed_today()).unwrap();

                assert_eq!(sig.planets.len(), Planet::COUNT);
                for placement in &sig.planets {
                    assert!((1..=12).contains(&placement.house), "{placement:?}");
                    assert!((1..=30).contains(&placement.degree), "{placement:?}");
                    assert!(placement.frequency > 0.0);
                    assert!(
                        (100.0..300.0).contains(&placement.frequency),
                        "{} out of band",
                        placement.frequency
                    );
                }
                assert!(ARCHETYPE_TRIPLES.contains(&sig.archetypes));
            }
        }
    }

    #[test]
    fn planets_keep_catalog_order() {
        let sig = generate_at(&input("Ada", 2000, 1, 1), fixed_today()).unwrap();
        let order: Vec<Planet> = sig.planets.iter().map(|p| p.planet).collect();
        assert_eq!(order, Planet::ALL);
    }

    #[test]
    fn shifting_the_date_by_one_day_moves_the_chart() {
        let names = ["Ada", "Grace", "Edsger", "Barbara", "Tony", "Niklaus"];
        let mut changed = 0;
        let mut total = 0;

        for name in names {
            for day in 1..=10 {
                let before = generate_at(&input(name, 1980, 6, day), fixed_today()).unwrap();
                let after = generate_at(&input(name, 1980, 6, day + 1), fixed_today()).unwrap();
                total += 1;
                if before.sun_sign != after.sun_sign
                    || before.moon_sign != after.moon_sign
                    || before.rising_sign != after.rising_sign
                    || before.dominant_element != after.dominant_element
                    || before.planets != after.planets
                {
                    changed += 1;
                }
            }
        }

        // Statistical bound from the digest width, not a hard guarantee.
        assert!(
            changed * 10 >= total * 9,
            "only {changed}/{total} charts moved"
        );
    }

    #[test]
    fn name_digest_is_order_sensitive() {
        assert_ne!(name_digest("Ada"), name_digest("Daa"));
        assert_ne!(name_digest("Ada"), name_digest("ada"));
        assert_eq!(name_digest(""), 0);
    }

    #[test]
    fn rejects_empty_name() {
        let mut bad = input("", 2000, 1, 1);
        assert_eq!(
            generate_at(&bad, fixed_today()),
            Err(ChartError::EmptyName)
        );

        bad.name = "   ".to_string();
        assert_eq!(
            generate_at(&bad, fixed_today()),
            Err(ChartError::EmptyName)
        );
    }

    #[test]
    fn rejects_missing_date() {
        let bad = BirthInput {
            name: "Ada".to_string(),
            birth_date: None,
            birth_time: None,
            birth_location: String::new(),
        };
        assert_eq!(
            generate_at(&bad, fixed_today()),
            Err(ChartError::MissingBirthDate)
        );
    }

    #[test]
    fn rejects_future_date() {
        let today = fixed_today();
        let tomorrow = CivilDate::from_day_number(today.day_number() + 1);

        let result = generate_at(&BirthInput::new("Ada", tomorrow), today);
        assert_eq!(
            result,
            Err(ChartError::FutureBirthDate {
                date: tomorrow,
                today
            })
        );

        // Born today is fine.
        assert!(generate_at(&BirthInput::new("Ada", today), today).is_ok());
    }

    #[test]
    fn location_and_time_do_not_affect_derivation() {
        let plain = input("Ada", 2000, 1, 1);
        let mut detailed = plain.clone();
        detailed.birth_time = Some("04:30".to_string());
        detailed.birth_location = "London, UK".to_string();

        let a = generate_at(&plain, fixed_today()).unwrap();
        let b = generate_at(&detailed, fixed_today()).unwrap();

        assert_eq!(a.planets, b.planets);
        assert_eq!(a.sun_sign, b.sun_sign);
        // The echoed input carries the extra fields through unchanged.
        assert_eq!(b.birth.birth_location, "London, UK");
    }

    #[test]
    fn pre_epoch_birth_dates_derive_cleanly() {
        let sig = generate_at(&input("Ada", 1931, 5, 27), fixed_today()).unwrap();
        for placement in &sig.planets {
            assert!((1..=12).contains(&placement.house));
            assert!((1..=30).contains(&placement.degree));
        }
    }
}
