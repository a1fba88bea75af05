//! CSS Easing Editor (Kommandozeile).
//!
//! Liest `cubic-bezier()`- und `linear()`-Timing-Funktionen, bearbeitet
//! Mehrpunkt-Kurven und exportiert sie als CSS.

use anyhow::Result;
use clap::Parser;
use css_easing_editor::{cli, Args, EditorOptions};

fn main() -> Result<()> {
    // Logger initialisieren (Ausgabe auf stderr)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "CSS Easing Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = args.config.clone().unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let output = cli::run(&args, &options)?;
    println!("{output}");
    Ok(())
}
