//! Cosmica - application state and event loop

use std::io::{self, Write as _};
use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use rtrb::Consumer;

use cosmic_resonance::chart::{
    daily_attunement, BirthInput, CivilDate, DailyAttunement, Planet, Signature,
};
use cosmic_resonance::io::ResonancePlayer;
use cosmic_resonance::synth::{EngineSnapshot, DEFAULT_VOLUME};

use crate::ui;
use crate::ui::spectrum::CymaticScope;

/// Samples per spectrum analysis window.
const SCOPE_WINDOW: usize = 1024;

const VOLUME_STEP: f32 = 0.1;

/// Prompt for the four form fields on stdin, before the TUI takes over.
pub fn read_birth_input() -> EyreResult<BirthInput> {
    fn prompt(label: &str) -> EyreResult<String> {
        print!("{label}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    println!("Enter your celestial coordinates");
    let name = prompt("Name")?;
    let date_text = prompt("Birth date (YYYY-MM-DD)")?;
    let birth_time = prompt("Birth time (optional, HH:MM)")?;
    let birth_location = prompt("Birth location")?;

    // An empty date is passed through as missing; the generator decides.
    let birth_date = if date_text.is_empty() {
        None
    } else {
        Some(CivilDate::parse(&date_text)?)
    };

    Ok(BirthInput {
        name,
        birth_date,
        birth_time: (!birth_time.is_empty()).then_some(birth_time),
        birth_location,
    })
}

/// Main application: owns the signature, the player, and the scope.
pub struct Cosmica {
    signature: Signature,
    daily: DailyAttunement,
    player: ResonancePlayer,
    scope: CymaticScope,
    sample_tap: Option<Consumer<f32>>,
    tap_buffer: Vec<f32>,
    snapshot: EngineSnapshot,
    volume: f32,
    should_quit: bool,
}

impl Cosmica {
    pub fn new(signature: Signature) -> Self {
        let mut player = ResonancePlayer::new();
        let sample_tap = player.take_sample_tap();
        let scope = CymaticScope::new(SCOPE_WINDOW, player.sample_rate());

        Self {
            signature,
            daily: daily_attunement(CivilDate::today()),
            player,
            scope,
            sample_tap,
            tap_buffer: vec![0.0; SCOPE_WINDOW],
            snapshot: EngineSnapshot::default(),
            volume: DEFAULT_VOLUME,
            should_quit: false,
        }
    }

    /// Run the TUI until quit, then release the audio device.
    pub fn run(mut self) -> EyreResult<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        self.player.dispose();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.snapshot = self.player.snapshot();
            self.poll_samples();

            let view = ui::View {
                signature: &self.signature,
                daily: &self.daily,
                snapshot: self.snapshot,
                volume: self.volume,
                audio_available: self.player.is_available(),
                spectrum: self.scope.data(),
            };
            terminal.draw(|frame| ui::render(frame, &view))?;

            // Non-blocking input, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_samples(&mut self) {
        let Some(tap) = self.sample_tap.as_mut() else {
            return;
        };

        let mut new_samples = Vec::new();
        while let Ok(sample) = tap.pop() {
            new_samples.push(sample);
        }

        if !new_samples.is_empty() {
            // Keep the most recent analysis window
            self.tap_buffer.extend(new_samples);
            let excess = self.tap_buffer.len().saturating_sub(SCOPE_WINDOW);
            if excess > 0 {
                self.tap_buffer.drain(0..excess);
            }
            self.scope.update(&self.tap_buffer);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                self.player.play_harmony(&self.signature.planets);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.player.stop_all();
            }
            KeyCode::Char(digit @ '1'..='5') => {
                let index = digit as usize - '1' as usize;
                self.toggle_planet(Planet::ALL[index]);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.adjust_volume(VOLUME_STEP);
            }
            KeyCode::Char('-') => {
                self.adjust_volume(-VOLUME_STEP);
            }
            _ => {}
        }
    }

    fn toggle_planet(&mut self, planet: Planet) {
        if self.snapshot.is_active(planet) {
            self.player.stop_tone(planet);
        } else if let Some(placement) = self.signature.placement(planet) {
            self.player.start_tone(planet, placement.frequency);
        }
    }

    fn adjust_volume(&mut self, delta: f32) {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.player.set_volume(self.volume);
    }
}
