//! Generate a signature and play its staggered harmony for a few seconds.
//!
//! Run with: cargo run --example harmony

use std::thread;
use std::time::Duration;

use cosmic_resonance::chart::{generate, BirthInput, CivilDate};
use cosmic_resonance::io::ResonancePlayer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = BirthInput {
        name: "Ada".to_string(),
        birth_date: CivilDate::from_ymd(2000, 1, 1),
        birth_time: None,
        birth_location: "London, UK".to_string(),
    };
    let signature = generate(&input)?;

    println!("Resonant tones for {}:", signature.birth.name);
    for placement in &signature.planets {
        println!(
            "  {:8} {:11} house {:2}  {:6.2} Hz",
            placement.planet.name(),
            placement.sign.name(),
            placement.house,
            placement.frequency
        );
    }

    let mut player = ResonancePlayer::new();
    if !player.is_available() {
        println!("No audio device available; chart printed only.");
        return Ok(());
    }

    println!("Playing harmony (staggered entrance)...");
    player.play_harmony(&signature.planets);
    thread::sleep(Duration::from_secs(6));

    player.dispose();
    Ok(())
}
