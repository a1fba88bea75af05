//! Zentrale Konfiguration für den CSS Easing Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die Defaults stammen aus den Konstanten der Engine.

use easing_curve_engine::{
    LinearExportOptions, TimingVariant, HIT_TEST_THRESHOLD, LINEAR_SAMPLES_PER_SEGMENT,
    ROUND_DEFAULT,
};
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "css_easing_editor.toml";

// ── Abtastung ───────────────────────────────────────────────────────

/// Obergrenze für `samples_per_segment`.
pub const SAMPLES_PER_SEGMENT_MAX: usize = 500;

/// Standard-Name der Custom Property im exportierten CSS.
pub const CUSTOM_PROPERTY_NAME: &str = "ease-custom";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `css_easing_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Abtastung ───────────────────────────────────────────────
    /// Schritte für `sample`, wenn `--steps` fehlt
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,

    // ── linear()-Export ─────────────────────────────────────────
    /// Douglas-Peucker-Toleranz, `[0, 0.05]`
    #[serde(default)]
    pub simplify: f64,
    /// Nachkommastellen für y, `[0, 5]`
    #[serde(default = "default_round")]
    pub round: u32,

    // ── CSS-Ausgabe ─────────────────────────────────────────────
    /// Name der Custom Property (ohne `--`)
    #[serde(default = "default_custom_property_name")]
    pub custom_property_name: String,
    /// `animation` oder `transition`
    #[serde(default)]
    pub variant: TimingVariant,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Maximaler Klick-Abstand zur Kurve beim Einfügen (normalisiert)
    #[serde(default = "default_hit_threshold")]
    pub hit_threshold: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: LINEAR_SAMPLES_PER_SEGMENT,
            simplify: 0.0,
            round: ROUND_DEFAULT,
            custom_property_name: CUSTOM_PROPERTY_NAME.to_string(),
            variant: TimingVariant::default(),
            hit_threshold: HIT_TEST_THRESHOLD,
        }
    }
}

fn default_samples_per_segment() -> usize {
    LINEAR_SAMPLES_PER_SEGMENT
}

fn default_round() -> u32 {
    ROUND_DEFAULT
}

fn default_custom_property_name() -> String {
    CUSTOM_PROPERTY_NAME.to_string()
}

fn default_hit_threshold() -> f64 {
    HIT_TEST_THRESHOLD
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("css_easing_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Klemmt alle Werte auf ihren gültigen Bereich.
    pub fn sanitized(self) -> Self {
        let export = self.export_options();
        let hit_threshold = if self.hit_threshold.is_finite() && self.hit_threshold > 0.0 {
            self.hit_threshold
        } else {
            log::warn!(
                "Ungueltiger hit_threshold {}, verwende {}",
                self.hit_threshold,
                HIT_TEST_THRESHOLD
            );
            HIT_TEST_THRESHOLD
        };
        let custom_property_name = if self.custom_property_name.trim().is_empty() {
            CUSTOM_PROPERTY_NAME.to_string()
        } else {
            self.custom_property_name
        };

        Self {
            samples_per_segment: self.samples_per_segment.clamp(1, SAMPLES_PER_SEGMENT_MAX),
            simplify: export.simplify,
            round: export.round,
            custom_property_name,
            variant: self.variant,
            hit_threshold,
        }
    }

    /// Export-Parameter für `linear()`.
    ///
    /// `simplify` wird auf `[0, 0.05]`, `round` auf `[0, 5]` geklemmt.
    pub fn export_options(&self) -> LinearExportOptions {
        LinearExportOptions {
            simplify: self.simplify,
            round: self.round,
        }
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.samples_per_segment, 20);
        assert_eq!(opts.round, 5);
        assert_eq!(opts.simplify, 0.0);
        assert_eq!(opts.custom_property_name, "ease-custom");
        assert_eq!(opts.variant, TimingVariant::Animation);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let opts: EditorOptions = toml::from_str("round = 2\nvariant = \"transition\"\n").unwrap();
        assert_eq!(opts.round, 2);
        assert_eq!(opts.variant, TimingVariant::Transition);
        assert_eq!(opts.samples_per_segment, 20);
        assert_eq!(opts.custom_property_name, "ease-custom");
    }

    #[test]
    fn test_sanitized_clamps_ranges() {
        let opts = EditorOptions {
            samples_per_segment: 0,
            simplify: 1.0,
            round: 12,
            custom_property_name: "   ".to_string(),
            variant: TimingVariant::Transition,
            hit_threshold: -1.0,
        }
        .sanitized();
        assert_eq!(opts.samples_per_segment, 1);
        assert_eq!(opts.simplify, 0.05);
        assert_eq!(opts.round, 5);
        assert_eq!(opts.custom_property_name, "ease-custom");
        assert_eq!(opts.hit_threshold, HIT_TEST_THRESHOLD);
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = EditorOptions {
            round: 3,
            simplify: 0.01,
            ..Default::default()
        };
        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }
}
