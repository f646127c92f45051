//! polynumeral CLI: numeral encodings and layouts as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use polynumeral::compose::render_number;
use polynumeral::config::RenderConfig;
use polynumeral::error::PolyResult;
use polynumeral::geometry::{Point, Size};
use polynumeral::glyph::catalog;
use polynumeral::glyph::{GlyphSequence, NumeralSystem};
use polynumeral::grid::{Cell, GridMapper};
use polynumeral::mode::{ModeSet, NumeralMode, all_modes};
use polynumeral::number::Number;
use polynumeral::quantity::{StackingConstraints, count_from_f64, optimal_stacking_layout};

#[derive(Parser)]
#[command(name = "polynumeral", version, about = "Multi-notation numeral layout")]
struct Cli {
    /// Render configuration (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a number in the enabled modes around an anchor.
    Render {
        /// The number, 0 to 9999.
        #[arg(allow_negative_numbers = true)]
        number: f64,

        /// Enabled modes (comma-separated, e.g. "binary,cistercian"). Defaults to all.
        #[arg(long, value_delimiter = ',')]
        modes: Vec<NumeralMode>,

        #[arg(long, default_value = "512")]
        anchor_x: f64,

        #[arg(long, default_value = "400")]
        anchor_y: f64,

        /// Viewport width.
        #[arg(long, default_value = "1024")]
        width: f64,

        /// Viewport height.
        #[arg(long, default_value = "768")]
        height: f64,
    },

    /// Show a number in every notation.
    Encode {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },

    /// Icon grid for a bare count.
    Layout {
        #[arg(allow_negative_numbers = true)]
        count: f64,

        /// Viewport width.
        #[arg(long, default_value = "1024")]
        width: f64,
    },

    /// Map between grid cells and pixels.
    Grid {
        #[arg(long)]
        rows: usize,

        #[arg(long)]
        cols: usize,

        #[arg(long)]
        width: f64,

        #[arg(long)]
        height: f64,

        /// Gutter between cells. Defaults to the configured padding.
        #[arg(long)]
        padding: Option<f64>,

        /// Cell as "ROW,COL": print its pixel center.
        #[arg(long, value_parser = parse_pair, conflicts_with = "point", required_unless_present = "point")]
        cell: Option<(f64, f64)>,

        /// Point as "X,Y": print the cell containing it.
        #[arg(long, value_parser = parse_pair)]
        point: Option<(f64, f64)>,
    },

    /// List every symbol in the catalog.
    Legend,
}

#[derive(Serialize)]
struct Encoding<'a> {
    system: NumeralSystem,
    names: Vec<String>,
    text: String,
    font: String,
    symbols: &'a GlyphSequence,
}

fn parse_pair(s: &str) -> std::result::Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated numbers, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{v}': {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

/// Validate a number given on the command line.
fn parse_number(value: f64) -> PolyResult<Number> {
    Ok(Number::from_f64(value)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    match cli.command {
        Commands::Render {
            number,
            modes,
            anchor_x,
            anchor_y,
            width,
            height,
        } => {
            let number = parse_number(number)?;
            let modes: ModeSet = if modes.is_empty() {
                all_modes()
            } else {
                modes.into_iter().collect()
            };
            let plan = render_number(
                number,
                &modes,
                Point::new(anchor_x, anchor_y),
                Size::new(width, height),
                &config,
            );
            if let Some(unresolved) = &plan.unresolved {
                eprintln!("{:?}", miette::Report::new(unresolved.clone()));
            }
            print_json(&plan)?;
        }

        Commands::Encode { number } => {
            let number = parse_number(number)?;
            let sequences: Vec<GlyphSequence> = [
                NumeralSystem::Cistercian,
                NumeralSystem::Kaktovik,
                NumeralSystem::Binary,
                NumeralSystem::PlaceValue,
            ]
            .into_iter()
            .map(|system| system.encode(number))
            .collect();
            let encodings: Vec<Encoding<'_>> = sequences
                .iter()
                .map(|seq| Encoding {
                    system: seq.system(),
                    names: seq.symbols().iter().map(|&s| catalog::symbol_name(s)).collect(),
                    text: seq.render(false),
                    font: seq.render(true),
                    symbols: seq,
                })
                .collect();
            print_json(&encodings)?;
        }

        Commands::Layout { count, width } => {
            let constraints = StackingConstraints {
                viewport_width: width,
                icon_width: config.metrics.object_icon.width,
                width_fraction: config.quantity.width_fraction,
            };
            print_json(&optimal_stacking_layout(count_from_f64(count), &constraints))?;
        }

        Commands::Grid {
            rows,
            cols,
            width,
            height,
            padding,
            cell,
            point,
        } => {
            let grid = match padding {
                Some(padding) => GridMapper::new(rows, cols, width, height, padding)?,
                None => config.grid(rows, cols, width, height)?,
            };
            match (cell, point) {
                (Some((row, col)), _) => {
                    let cell = Cell::from_f64(row, col)?;
                    print_json(&grid.position_of(cell)?)?;
                }
                (None, Some((x, y))) => print_json(&grid.grid_cell(x, y)?)?,
                (None, None) => print_json(&grid)?,
            }
        }

        Commands::Legend => {
            print_json(&catalog::all_glyphs())?;
        }
    }

    Ok(())
}
