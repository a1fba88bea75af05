//! CSS Easing Editor Library.
//! Host-Schicht (Optionen, Kommandozeile) über der Kurven-Engine,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod cli;
pub mod shared;

pub use cli::{run, Args, Command};
pub use easing_curve_engine as engine;
pub use shared::EditorOptions;
