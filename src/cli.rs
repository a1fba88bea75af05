//! Kommandozeile: Argumente und Ausführung der Unterbefehle.
//!
//! `run` liefert die Ausgabe als String, damit Tests ohne Prozess-Start
//! auskommen; `main` schreibt sie nur noch nach stdout.

use crate::shared::EditorOptions;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use easing_curve_engine::{
    cubic_to_poly, encode_cubic, encode_linear, insert_point_near, parse_timing_function,
    poly_to_cubic, EasingCurve, PointIdGenerator, PolyCurve, TimingVariant, PRESETS,
};
use glam::DVec2;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "css-easing-editor")]
#[command(version, about = "CSS-Easing-Kurven lesen, bearbeiten und exportieren", long_about = None)]
pub struct Args {
    /// Optionen-Datei (Standard: css_easing_editor.toml neben der Binary)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Ausgabe als JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Timing-Funktion lesen und in beiden CSS-Formen ausgeben
    Parse {
        /// z.B. "ease-in", "cubic-bezier(0.25, 0.1, 0.25, 1)" oder "linear(0, 0.5 50%, 1)"
        css: String,
    },
    /// Timing-Funktion als linear()-Regel exportieren
    Export {
        css: String,
        /// Douglas-Peucker-Toleranz (überschreibt Optionen)
        #[arg(long)]
        simplify: Option<f64>,
        /// Nachkommastellen für y (überschreibt Optionen)
        #[arg(long)]
        round: Option<u32>,
        /// Name der Custom Property
        #[arg(long)]
        name: Option<String>,
        /// animation oder transition
        #[arg(long)]
        variant: Option<TimingVariant>,
    },
    /// Easing-Werte an gleichmäßig verteilten x-Positionen ausgeben
    Sample {
        css: String,
        /// Anzahl Intervalle (Standard: samples_per_segment aus den Optionen)
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Punkt per Klickposition in die Kurve einfügen
    Insert {
        css: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Preset-Katalog auflisten
    Presets,
}

#[derive(Serialize)]
struct Sample {
    x: f64,
    y: f64,
}

/// Führt den Unterbefehl aus und liefert die Ausgabe.
pub fn run(args: &Args, options: &EditorOptions) -> Result<String> {
    let mut ids = PointIdGenerator::new();
    match &args.command {
        Command::Parse { css } => {
            let curve = decode(css, &mut ids)?;
            if args.json {
                return Ok(serde_json::to_string_pretty(&curve)?);
            }
            let (cubic, poly) = match &curve {
                EasingCurve::Cubic(cubic) => (*cubic, cubic_to_poly(cubic, &mut ids)),
                EasingCurve::Poly(poly) => (poly_to_cubic(poly), poly.clone()),
            };
            let name = &options.custom_property_name;
            let mut out = String::new();
            writeln!(out, "Typ:          {}", curve_kind(&curve))?;
            writeln!(out, "Punkte:       {}", poly.len())?;
            writeln!(
                out,
                "cubic-bezier: {}",
                encode_cubic(&cubic, name, options.variant).timing_function
            )?;
            write!(
                out,
                "linear:       {}",
                encode_linear(&poly, name, options.variant, options.export_options())
                    .timing_function
            )?;
            Ok(out)
        }
        Command::Export {
            css,
            simplify,
            round,
            name,
            variant,
        } => {
            let poly = to_poly(decode(css, &mut ids)?, &mut ids);
            let options = EditorOptions {
                simplify: simplify.unwrap_or(options.simplify),
                round: round.unwrap_or(options.round),
                custom_property_name: name
                    .clone()
                    .unwrap_or_else(|| options.custom_property_name.clone()),
                variant: variant.unwrap_or(options.variant),
                ..options.clone()
            }
            .sanitized();
            let output = encode_linear(
                &poly,
                &options.custom_property_name,
                options.variant,
                options.export_options(),
            );
            if args.json {
                return Ok(serde_json::to_string_pretty(&output)?);
            }
            Ok(output.code)
        }
        Command::Sample { css, steps } => {
            let curve = decode(css, &mut ids)?;
            let steps = steps.unwrap_or(options.samples_per_segment).max(1);
            let samples: Vec<Sample> = (0..=steps)
                .map(|i| {
                    let x = i as f64 / steps as f64;
                    Sample {
                        x,
                        y: curve.value_at(x),
                    }
                })
                .collect();
            if args.json {
                return Ok(serde_json::to_string_pretty(&samples)?);
            }
            let lines: Vec<String> = samples
                .iter()
                .map(|s| format!("{:.4}\t{:.5}", s.x, s.y))
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Insert { css, x, y } => {
            let poly = to_poly(decode(css, &mut ids)?, &mut ids);
            let position = DVec2::new(*x, *y);
            let Some((result, id)) =
                insert_point_near(&poly, position, options.hit_threshold, &mut ids)
            else {
                bail!(
                    "Punkt bei ({x}, {y}) kann nicht eingefügt werden \
                     (zu weit von der Kurve, zu nah an einem Nachbarn oder Maximum erreicht)"
                );
            };
            log::info!("Punkt {:?} eingefügt, {} Punkte", id, result.len());
            if args.json {
                return Ok(serde_json::to_string_pretty(&result)?);
            }
            Ok(encode_linear(
                &result,
                &options.custom_property_name,
                options.variant,
                options.export_options(),
            )
            .timing_function)
        }
        Command::Presets => {
            if args.json {
                return Ok(serde_json::to_string_pretty(PRESETS)?);
            }
            let lines: Vec<String> = PRESETS
                .iter()
                .map(|p| format!("{:<18} {:?}\t{}", p.name, p.category, p.css))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

fn decode(css: &str, ids: &mut PointIdGenerator) -> Result<EasingCurve> {
    parse_timing_function(css, ids).with_context(|| format!("Timing-Funktion nicht lesbar: {css}"))
}

fn to_poly(curve: EasingCurve, ids: &mut PointIdGenerator) -> PolyCurve {
    match curve {
        EasingCurve::Cubic(cubic) => cubic_to_poly(&cubic, ids),
        EasingCurve::Poly(poly) => poly,
    }
}

fn curve_kind(curve: &EasingCurve) -> &'static str {
    match curve {
        EasingCurve::Cubic(_) => "cubic-bezier",
        EasingCurve::Poly(_) => "linear",
    }
}
