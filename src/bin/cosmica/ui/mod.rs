//! TUI rendering for cosmica
//!
//! Everything here is a read-only view over the signature and the latest
//! engine snapshot; state changes only happen through the player's
//! documented operations in the app layer.

pub mod spectrum;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{BarChart, Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use cosmic_resonance::chart::{DailyAttunement, Signature};
use cosmic_resonance::synth::EngineSnapshot;

/// Everything one frame needs, borrowed from the app.
pub struct View<'a> {
    pub signature: &'a Signature,
    pub daily: &'a DailyAttunement,
    pub snapshot: EngineSnapshot,
    pub volume: f32,
    pub audio_available: bool,
    pub spectrum: Vec<(&'a str, u64)>,
}

pub fn render(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Header
            Constraint::Min(9),     // Stellar map
            Constraint::Length(3),  // Volume
            Constraint::Length(10), // Cymatic field
            Constraint::Length(1),  // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    render_chart(frame, chunks[1], view);
    render_volume(frame, chunks[2], view);
    render_spectrum(frame, chunks[3], view);
    render_help(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, view: &View) {
    let sig = view.signature;
    let daily: &DailyAttunement = view.daily;

    let born = sig
        .birth
        .birth_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let place = if sig.birth.birth_location.is_empty() {
        String::new()
    } else {
        format!(" in {}", sig.birth.birth_location)
    };

    let mut lines = vec![
        Line::from(format!("{} | born {}{}", sig.birth.name, born, place)),
        Line::from(format!(
            "Sun {} | Moon {} | Rising {} | Element {}",
            sig.sun_sign.name(),
            sig.moon_sign.name(),
            sig.rising_sign.name(),
            sig.dominant_element.name()
        )),
        Line::from(format!(
            "Archetypes: {} / {} / {}",
            sig.archetypes[0], sig.archetypes[1], sig.archetypes[2]
        )),
        Line::from(format!(
            "Today: {} under {}, {}, {:.2} Hz (harmonic {})",
            daily.energy,
            daily.dominant_planet,
            daily.moon_phase,
            daily.frequency,
            daily.harmonic_tone
        )),
    ];

    if !view.audio_available {
        lines.push(Line::styled(
            "audio unavailable - running silent",
            Style::default().fg(Color::Red),
        ));
    }

    let header = Paragraph::new(lines).block(
        Block::default()
            .title(" Cosmic Resonance ")
            .borders(Borders::ALL),
    );
    frame.render_widget(header, area);
}

fn render_chart(frame: &mut Frame, area: Rect, view: &View) {
    let active_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<Row> = view
        .signature
        .planets
        .iter()
        .enumerate()
        .map(|(i, placement)| {
            let index = placement.planet.index();
            let active = view.snapshot.active[index];
            let status = if active {
                "playing"
            } else if view.snapshot.gain[index] > 0.0 {
                "fading"
            } else {
                ""
            };

            let row = Row::new(vec![
                Cell::from(format!("[{}]", i + 1)),
                Cell::from(placement.planet.name()),
                Cell::from(placement.sign.name()),
                Cell::from(format!("{}", placement.house)),
                Cell::from(format!("{}°", placement.degree)),
                Cell::from(format!("{:.2} Hz", placement.frequency)),
                Cell::from(status),
            ]);
            if active {
                row.style(active_style)
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec![
            "", "Planet", "Sign", "House", "Degree", "Frequency", "Status",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(" Stellar Map ")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

fn render_volume(frame: &mut Frame, area: Rect, view: &View) {
    let gauge = Gauge::default()
        .block(Block::default().title(" Volume ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(view.volume as f64)
        .label(format!("{:.0}%", view.volume * 100.0));
    frame.render_widget(gauge, area);
}

fn render_spectrum(frame: &mut Frame, area: Rect, view: &View) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Cymatic Field ")
                .borders(Borders::ALL),
        )
        .bar_style(Style::default().fg(Color::Magenta))
        .bar_width(3)
        .bar_gap(1)
        .data(&view.spectrum);
    frame.render_widget(chart, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(" [Space] Harmony  [1-5] Toggle Tone  [S] Stop All  [+/-] Volume  [Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
