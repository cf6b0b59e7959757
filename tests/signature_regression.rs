//! Cross-process determinism regression.
//!
//! The pinned values below are part of the derivation contract: if any of
//! them changes, every chart ever generated has silently moved. Update
//! them only alongside a deliberate, breaking change to the scheme.

use cosmic_resonance::chart::{generate_at, BirthInput, CivilDate, Element, Planet, Zodiac};

fn pinned_today() -> CivilDate {
    CivilDate::from_ymd(2026, 8, 4).unwrap()
}

fn ada() -> BirthInput {
    BirthInput::new("Ada", CivilDate::from_ymd(2000, 1, 1).unwrap())
}

#[test]
fn ada_chart_is_pinned() {
    let signature = generate_at(&ada(), pinned_today()).unwrap();

    assert_eq!(signature.sun_sign, Zodiac::Virgo);
    assert_eq!(signature.moon_sign, Zodiac::Capricorn);
    assert_eq!(signature.rising_sign, Zodiac::Taurus);
    assert_eq!(signature.dominant_element, Element::Water);
    assert_eq!(
        signature.archetypes,
        ["Depth Diver", "Creative Fire", "Mystic Healer"]
    );

    let expected = [
        (Planet::Sun, Zodiac::Sagittarius, 12, 4, 142.22),
        (Planet::Moon, Zodiac::Aries, 4, 8, 238.42),
        (Planet::Mercury, Zodiac::Leo, 8, 12, 193.27),
        (Planet::Venus, Zodiac::Capricorn, 1, 17, 237.23),
        (Planet::Mars, Zodiac::Gemini, 6, 22, 172.72),
    ];

    assert_eq!(signature.planets.len(), expected.len());
    for (placement, &(planet, sign, house, degree, frequency)) in
        signature.planets.iter().zip(&expected)
    {
        assert_eq!(placement.planet, planet);
        assert_eq!(placement.sign, sign, "{planet} sign");
        assert_eq!(placement.house, house, "{planet} house");
        assert_eq!(placement.degree, degree, "{planet} degree");
        assert!(
            (placement.frequency - frequency).abs() < 1e-3,
            "{planet} frequency: expected {frequency}, got {}",
            placement.frequency
        );
    }
}

#[test]
fn repeated_generation_is_structurally_equal() {
    let first = generate_at(&ada(), pinned_today()).unwrap();
    let second = generate_at(&ada(), pinned_today()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.planets[0].frequency.to_bits(),
        second.planets[0].frequency.to_bits()
    );
}
