//! Command implementations. Each returns its output so callers choose where it goes.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use gateink_core::{
    EMPTY_EXPRESSION_MESSAGE, ExpressionSession, HoverState, ParsedExpression, parse_expression,
    truth_table_rows,
};
use gateink_render::{
    CircuitDrawing, CircuitGeometry, RecordingSurface, SvgSurface, draw_circuit,
};
use kurbo::Point;
use serde::{Serialize, Serializer};
use std::io::Write;

/// Parse a pointer position written as `X,Y`.
pub fn parse_point(text: &str) -> AppResult<Point> {
    let invalid = || AppError::HoverPoint(text.to_string());
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(invalid());
    }
    Ok(Point::new(x, y))
}

/// A rendered schematic.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub surface: SvgSurface,
    pub drawing: CircuitDrawing,
    /// Label of the wire under the hover point, if any.
    pub hovered: Option<String>,
}

impl RenderOutput {
    /// The SVG document.
    pub fn svg(&self) -> String {
        self.surface.finish()
    }
}

/// Parse, lay out and draw an expression as SVG.
///
/// With a hover point, the first pass only collects wire paths; the point is
/// hit-tested against them and the circuit is drawn again with the hover
/// applied, the same two-step flow an interactive host runs per pointer move.
pub fn render(expression: &str, hover: Option<Point>, config: &AppConfig) -> AppResult<RenderOutput> {
    let mut session = ExpressionSession::new();
    session.set_expression(expression);
    if !session.visualize(None) {
        let message = session.error().unwrap_or(EMPTY_EXPRESSION_MESSAGE);
        return Err(AppError::Expression(message.to_string()));
    }
    let Some(parsed) = session.parsed().cloned() else {
        return Err(AppError::Expression(EMPTY_EXPRESSION_MESSAGE.to_string()));
    };

    let geometry = CircuitGeometry::compute(&parsed, &config.layout);
    let mut svg = SvgSurface::new(geometry.canvas_width, geometry.canvas_height);
    let mut drawing = draw_circuit(
        &mut svg,
        &parsed,
        session.expression(),
        HoverState::none(),
        &config.layout,
        &config.theme,
    );

    if let Some(point) = hover {
        if session.pointer_moved(point, &drawing.wire_paths) {
            log::info!(
                "Hovering {:?} at ({}, {})",
                session.hovered().map(|w| w.label.as_str()),
                point.x,
                point.y
            );
            drawing = draw_circuit(
                &mut svg,
                &parsed,
                session.expression(),
                HoverState::new(session.hovered()),
                &config.layout,
                &config.theme,
            );
        } else {
            log::info!("No wire within reach of ({}, {})", point.x, point.y);
        }
    }

    Ok(RenderOutput {
        surface: svg,
        drawing,
        hovered: session.hovered().map(|w| w.label.clone()),
    })
}

/// Truth table as an aligned text grid with minterm and maxterm summaries.
///
/// Rows are streamed from the expression, never held in memory together.
pub fn write_table(parsed: &ParsedExpression, out: &mut dyn Write) -> AppResult<()> {
    let header: Vec<String> = parsed.variables.iter().map(char::to_string).collect();
    writeln!(out, "{} | Y", header.join(" "))?;
    writeln!(out, "{}+--", "-".repeat(parsed.variables.len() * 2))?;
    for row in truth_table_rows(parsed) {
        let bits: Vec<String> = row.bits().map(|b| b.to_string()).collect();
        writeln!(out, "{} | {}", bits.join(" "), u8::from(row.output))?;
    }
    write_indices(out, "minterms", parsed, true)?;
    write_indices(out, "maxterms", parsed, false)
}

/// One summary line listing the row indices with the given output.
fn write_indices(
    out: &mut dyn Write,
    name: &str,
    parsed: &ParsedExpression,
    output: bool,
) -> AppResult<()> {
    write!(out, "{name}: ")?;
    let mut written = 0usize;
    for (index, _) in truth_table_rows(parsed)
        .enumerate()
        .filter(|(_, row)| row.output == output)
    {
        if written > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{index}")?;
        written += 1;
    }
    if written == 0 {
        write!(out, "none")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Serializes as the `rows` array of a truth table, one row at a time.
struct StreamedRows<'a>(&'a ParsedExpression);

impl Serialize for StreamedRows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(truth_table_rows(self.0))
    }
}

/// Same JSON shape as `TruthTable`.
#[derive(Serialize)]
struct TableReport<'a> {
    variables: &'a [char],
    rows: StreamedRows<'a>,
}

/// Truth table for an expression, as text or JSON, written to `out`.
pub fn table(expression: &str, json: bool, out: &mut dyn Write) -> AppResult<()> {
    let parsed = parse_expression(expression)?;
    log::debug!("{} rows for {}", truth_table_rows(&parsed).len(), parsed);
    if json {
        let report = TableReport {
            variables: &parsed.variables,
            rows: StreamedRows(&parsed),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    } else {
        write_table(&parsed, out)
    }
}

#[derive(Serialize)]
struct ParseReport<'a> {
    canonical: String,
    #[serde(flatten)]
    parsed: &'a ParsedExpression,
}

/// Parsed structure as JSON, with the canonical rewrite of the input.
pub fn parse(expression: &str) -> AppResult<String> {
    let parsed = parse_expression(expression)?;
    let report = ParseReport {
        canonical: parsed.to_string(),
        parsed: &parsed,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Every wire of the laid-out circuit as JSON, drawn headless.
pub fn wires(expression: &str, config: &AppConfig) -> AppResult<String> {
    let parsed = parse_expression(expression)?;
    let mut surface = RecordingSurface::new(0.0, 0.0);
    let drawing = draw_circuit(
        &mut surface,
        &parsed,
        expression.trim(),
        HoverState::none(),
        &config.layout,
        &config.theme,
    );
    Ok(serde_json::to_string_pretty(&drawing)?)
}
