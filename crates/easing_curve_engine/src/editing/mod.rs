//! Bearbeitungs-Operationen auf Mehrpunkt-Kurven.
//!
//! Jede Operation nimmt eine kanonische Kurve und liefert eine neue
//! kanonische Kurve (oder `None`, wenn die Bearbeitung abgelehnt wird).
//! Die Eingabe wird nie verändert.
//!
//! Aufgeteilt in:
//! - `points`: Einfügen, Entfernen, Verschieben von Punkten
//! - `handles`: Handles setzen, Verknüpfung und Spiegellänge
//! - `convert`: kubisch ↔ Mehrpunkt

pub mod convert;
pub mod handles;
pub mod points;

pub use convert::{cubic_to_poly, poly_to_cubic};
pub use handles::{move_handle, set_linked, set_mirror_length};
pub use points::{find_point_index, insert_point, insert_point_near, move_point, remove_point};

#[cfg(test)]
mod tests;
