//! Exhaustive truth-table enumeration.

use crate::evaluator::{Assignment, evaluate};
use crate::expression::ParsedExpression;
use serde::{Deserialize, Serialize};

/// One row: an assignment and the expression's value under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTableRow {
    pub values: Assignment,
    pub output: bool,
}

impl TruthTableRow {
    /// Values in variable order, as `0`/`1`.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.values().map(|&v| u8::from(v))
    }
}

/// Truth table over all `2^n` assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub variables: Vec<char>,
    pub rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Row indices where the output is true.
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.output)
            .map(|(i, _)| i)
            .collect()
    }

    /// Row indices where the output is false.
    pub fn maxterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.output)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows of a truth table, produced one at a time.
///
/// Yields assignments in binary-counting order. The first variable (in sorted
/// order) is the most significant bit, so it varies slowest.
#[derive(Debug, Clone)]
pub struct TruthTableRows<'a> {
    parsed: &'a ParsedExpression,
    next: usize,
    end: usize,
}

impl TruthTableRows<'_> {
    fn row(&self, index: usize) -> TruthTableRow {
        let n = self.parsed.variables.len();
        let values: Assignment = self
            .parsed
            .variables
            .iter()
            .enumerate()
            .map(|(idx, &v)| (v, (index >> (n - 1 - idx)) & 1 == 1))
            .collect();
        let output = evaluate(self.parsed, &values);
        TruthTableRow { values, output }
    }
}

impl Iterator for TruthTableRows<'_> {
    type Item = TruthTableRow;

    fn next(&mut self) -> Option<TruthTableRow> {
        if self.next >= self.end {
            return None;
        }
        let row = self.row(self.next);
        self.next += 1;
        Some(row)
    }

    fn nth(&mut self, n: usize) -> Option<TruthTableRow> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TruthTableRows<'_> {}

/// Iterate the rows of the truth table without materializing it.
pub fn truth_table_rows(parsed: &ParsedExpression) -> TruthTableRows<'_> {
    TruthTableRows {
        parsed,
        next: 0,
        end: 1usize << parsed.variables.len(),
    }
}

/// Enumerate every assignment in binary-counting order.
pub fn generate_truth_table(parsed: &ParsedExpression) -> TruthTable {
    TruthTable {
        variables: parsed.variables.clone(),
        rows: truth_table_rows(parsed).collect(),
    }
}
