//! cosmica - terminal resonance console
//!
//! Run with: cargo run

mod app;
mod ui;

use color_eyre::eyre::WrapErr;
use flexi_logger::{FileSpec, Logger};

use app::Cosmica;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // The TUI owns the terminal, so diagnostics go to a file.
    let _logger = Logger::try_with_env_or_str("info")
        .wrap_err("invalid log specification")?
        .log_to_file(FileSpec::default().basename("cosmica").suppress_timestamp())
        .start()
        .wrap_err("failed to start file logging")?;

    let input = app::read_birth_input()?;
    let signature = cosmic_resonance::chart::generate(&input)?;

    Cosmica::new(signature).run()
}
