//! Boolean evaluation of parsed expressions.

use crate::expression::{ExpressionForm, ParsedExpression, Term};
use std::collections::BTreeMap;

/// Variable values for one evaluation, ordered by variable name.
pub type Assignment = BTreeMap<char, bool>;

/// Evaluate an expression under an assignment.
///
/// Variables missing from the assignment read as `false`.
pub fn evaluate(parsed: &ParsedExpression, values: &Assignment) -> bool {
    let clause_value = |term: &Term, any: bool| {
        let mut lits = term.iter().map(|lit| {
            let value = values.get(&lit.variable).copied().unwrap_or(false);
            lit.apply(value)
        });
        if any { lits.any(|v| v) } else { lits.all(|v| v) }
    };

    match parsed.form {
        // AND of ORs
        ExpressionForm::ProductOfSums => parsed.terms.iter().all(|t| clause_value(t, true)),
        // OR of ANDs
        ExpressionForm::SumOfProducts => parsed.terms.iter().any(|t| clause_value(t, false)),
    }
}
