//! Command-line interface.

use crate::commands;
use crate::config::AppConfig;
use crate::error::AppResult;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gateink", version, about = "Boolean expression → logic gate schematic and truth table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw the gate schematic of an expression as SVG.
    Render {
        /// Expression in SOP (`AB+A'C`) or POS (`(A+B)(A'+C)`) form.
        expression: String,
        /// Output SVG file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pointer position `X,Y`; the wire under it is highlighted.
        #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
        hover: Option<String>,
        /// JSON file with `layout` and `theme` overrides.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the truth table of an expression.
    Table {
        expression: String,
        /// Emit JSON instead of a text grid.
        #[arg(long)]
        json: bool,
    },
    /// Print the parsed structure as JSON.
    Parse { expression: String },
    /// Print every wire path of the laid-out circuit as JSON.
    Wires {
        expression: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Run a command, writing its result to `out`.
pub fn execute(command: &Command, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Command::Render {
            expression,
            output,
            hover,
            config,
        } => {
            let config = AppConfig::load(config.as_deref())?;
            let hover = hover.as_deref().map(commands::parse_point).transpose()?;
            let rendered = commands::render(expression, hover, &config)?;
            match output {
                Some(path) => {
                    rendered.surface.save(path)?;
                    log::info!(
                        "Wrote {} ({} wires, {}x{})",
                        path.display(),
                        rendered.drawing.wire_paths.len(),
                        rendered.drawing.canvas_width,
                        rendered.drawing.canvas_height
                    );
                    if let Some(label) = &rendered.hovered {
                        writeln!(out, "Hovered: {label}")?;
                    }
                }
                None => out.write_all(rendered.svg().as_bytes())?,
            }
        }
        Command::Table { expression, json } => {
            commands::table(expression, *json, out)?;
        }
        Command::Parse { expression } => {
            writeln!(out, "{}", commands::parse(expression)?)?;
        }
        Command::Wires { expression, config } => {
            let config = AppConfig::load(config.as_deref())?;
            writeln!(out, "{}", commands::wires(expression, &config)?)?;
        }
    }
    Ok(())
}

/// Run the parsed command line against stdout.
pub fn run(cli: Cli) -> AppResult<()> {
    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    execute(&cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}
