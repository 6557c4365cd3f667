//! Caller-side expression state.
//!
//! The renderer keeps nothing between draws. A host (CLI, GUI shell) keeps the
//! expression text, the last good parse, the hovered wire and the error
//! message here, and passes them into each redraw.

use crate::expression::ParsedExpression;
use crate::parser::parse_expression;
use crate::truth_table::{TruthTable, generate_truth_table};
use crate::wire::{WirePath, find_nearest_path};
use kurbo::Point;

/// Message shown when visualizing a blank expression.
pub const EMPTY_EXPRESSION_MESSAGE: &str = "Enter a boolean expression";

/// Expression text, parse result, hover and error for one host view.
#[derive(Debug, Clone, Default)]
pub struct ExpressionSession {
    expression: String,
    parsed: Option<ParsedExpression>,
    hovered: Option<WirePath>,
    error: Option<String>,
}

impl ExpressionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn parsed(&self) -> Option<&ParsedExpression> {
        self.parsed.as_ref()
    }

    pub fn hovered(&self) -> Option<&WirePath> {
        self.hovered.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Update the text being edited. Clears any previous error.
    pub fn set_expression(&mut self, value: impl Into<String>) {
        self.expression = value.into();
        self.error = None;
    }

    /// Parse `text` (or the current expression) and make it the displayed circuit.
    ///
    /// Returns `false` and records an error message when the text is blank or
    /// does not parse; the previously displayed circuit is left untouched.
    pub fn visualize(&mut self, text: Option<&str>) -> bool {
        let text = text.map(str::to_owned).unwrap_or_else(|| self.expression.clone());
        if text.trim().is_empty() {
            self.error = Some(EMPTY_EXPRESSION_MESSAGE.to_string());
            return false;
        }

        match parse_expression(&text) {
            Ok(parsed) => {
                log::debug!("Visualizing {:?}", text);
                self.expression = text;
                self.parsed = Some(parsed);
                self.hovered = None;
                self.error = None;
                true
            }
            Err(e) => {
                log::warn!("Failed to parse {:?}: {}", text, e);
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Clear text, circuit, hover and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_hovered(&mut self, wire: Option<WirePath>) {
        self.hovered = wire;
    }

    /// Hit-test a pointer position against the last drawn wires.
    ///
    /// Returns `true` when the hovered signal changed and the host should redraw.
    pub fn pointer_moved(&mut self, point: Point, paths: &[WirePath]) -> bool {
        let next = find_nearest_path(point, paths);
        let changed = self.hovered.as_ref().map(|w| w.label.as_str())
            != next.map(|w| w.label.as_str());
        self.hovered = next.cloned();
        changed
    }

    /// Truth table of the displayed circuit.
    pub fn truth_table(&self) -> Option<TruthTable> {
        self.parsed.as_ref().map(generate_truth_table)
    }
}
