//! Print the full signature for a name and birth date.
//!
//! Run with: cargo run --example chart_dump -- "Ada" 2000-01-01

use cosmic_resonance::chart::{generate, BirthInput, CivilDate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Ada".to_string());
    let date_text = args.next().unwrap_or_else(|| "2000-01-01".to_string());

    let input = BirthInput {
        name,
        birth_date: Some(CivilDate::parse(&date_text)?),
        birth_time: None,
        birth_location: String::new(),
    };
    let signature = generate(&input)?;

    println!("{} (born {})", signature.birth.name, date_text);
    println!(
        "Sun {} | Moon {} | Rising {} | Element {}",
        signature.sun_sign.name(),
        signature.moon_sign.name(),
        signature.rising_sign.name(),
        signature.dominant_element.name()
    );
    println!("Archetypes: {}", signature.archetypes.join(" / "));
    for placement in &signature.planets {
        println!(
            "  {:8} {:11} house {:2} degree {:2}  {:7.2} Hz",
            placement.planet.name(),
            placement.sign.name(),
            placement.house,
            placement.degree,
            placement.frequency
        );
    }

    Ok(())
}
