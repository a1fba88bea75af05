//! Geteilte Typen der Host-Schicht.
//!
//! Enthält die Laufzeit-Konfiguration, die zwischen Kommandozeile und
//! Engine-Aufrufen geteilt wird.

pub mod options;

pub use options::EditorOptions;
pub use options::{CONFIG_FILE_NAME, SAMPLES_PER_SEGMENT_MAX};
