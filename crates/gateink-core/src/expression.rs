//! Parsed boolean expression model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical form of a two-level boolean expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpressionForm {
    /// OR of AND-terms.
    #[default]
    SumOfProducts,
    /// AND of OR-terms.
    ProductOfSums,
}

impl ExpressionForm {
    /// Short name shown in titles ("SOP" / "POS").
    pub fn abbreviation(self) -> &'static str {
        match self {
            ExpressionForm::SumOfProducts => "SOP",
            ExpressionForm::ProductOfSums => "POS",
        }
    }

    /// Gate implementing a single term of this form.
    pub fn term_gate(self) -> GateKind {
        match self {
            ExpressionForm::SumOfProducts => GateKind::And,
            ExpressionForm::ProductOfSums => GateKind::Or,
        }
    }

    /// Gate combining all term outputs.
    pub fn combining_gate(self) -> GateKind {
        match self {
            ExpressionForm::SumOfProducts => GateKind::Or,
            ExpressionForm::ProductOfSums => GateKind::And,
        }
    }
}

/// Two-input-or-more gate kinds used by the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateKind {
    And,
    Or,
}

impl GateKind {
    /// Label drawn inside the gate body.
    pub fn label(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
        }
    }
}

/// A variable or its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// Single uppercase letter `A`..=`Z`.
    pub variable: char,
    /// Whether the variable is complemented.
    pub negated: bool,
}

impl Literal {
    pub fn new(variable: char, negated: bool) -> Self {
        Self {
            variable: variable.to_ascii_uppercase(),
            negated,
        }
    }

    /// Plain (non-negated) literal.
    pub fn positive(variable: char) -> Self {
        Self::new(variable, false)
    }

    /// Complemented literal.
    pub fn negative(variable: char) -> Self {
        Self::new(variable, true)
    }

    /// Signal key shared by every wire carrying this literal: `"A"` or `"A'"`.
    pub fn key(&self) -> String {
        signal_key(self.variable, self.negated)
    }

    /// Value of this literal for a given variable value.
    pub fn apply(&self, value: bool) -> bool {
        value != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Signal key for a variable and polarity (`"A"` / `"A'"`).
pub fn signal_key(variable: char, negated: bool) -> String {
    if negated {
        format!("{variable}'")
    } else {
        variable.to_string()
    }
}

/// An ordered clause of literals (a product or a sum depending on the form).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Literal> {
        self.literals.iter()
    }
}

impl From<Vec<Literal>> for Term {
    fn from(literals: Vec<Literal>) -> Self {
        Self::new(literals)
    }
}

impl<'a> IntoIterator for &'a Term {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

/// Result of parsing an expression.
///
/// `variables` is sorted and duplicate-free, and contains every variable
/// referenced by any literal in `terms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpression {
    pub form: ExpressionForm,
    pub variables: Vec<char>,
    pub terms: Vec<Term>,
}

impl ParsedExpression {
    /// Build an expression, deriving the variable set from the terms.
    pub fn new(form: ExpressionForm, terms: Vec<Term>) -> Self {
        let mut variables: Vec<char> = terms
            .iter()
            .flat_map(|t| t.iter().map(|l| l.variable))
            .collect();
        variables.sort_unstable();
        variables.dedup();
        Self {
            form,
            variables,
            terms,
        }
    }

    pub fn is_pos(&self) -> bool {
        self.form == ExpressionForm::ProductOfSums
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Total number of literals over all terms.
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(Term::len).sum()
    }

    /// Position of a variable in the sorted variable list.
    pub fn variable_index(&self, variable: char) -> Option<usize> {
        self.variables.binary_search(&variable).ok()
    }
}

impl fmt::Display for ParsedExpression {
    /// Canonical text: `AB+A'C` or `(A+B)(A'+C)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            ExpressionForm::SumOfProducts => {
                for (i, term) in self.terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    for lit in term {
                        write!(f, "{lit}")?;
                    }
                }
            }
            ExpressionForm::ProductOfSums => {
                for term in &self.terms {
                    write!(f, "(")?;
                    for (i, lit) in term.iter().enumerate() {
                        if i > 0 {
                            write!(f, "+")?;
                        }
                        write!(f, "{lit}")?;
                    }
                    write!(f, ")")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_key() {
        assert_eq!(Literal::positive('a').key(), "A");
        assert_eq!(Literal::negative('B').key(), "B'");
    }

    #[test]
    fn test_literal_apply() {
        assert!(Literal::positive('A').apply(true));
        assert!(!Literal::positive('A').apply(false));
        assert!(Literal::negative('A').apply(false));
        assert!(!Literal::negative('A').apply(true));
    }

    #[test]
    fn test_variables_derived_sorted_and_unique() {
        let expr = ParsedExpression::new(
            ExpressionForm::SumOfProducts,
            vec![
                Term::new(vec![Literal::positive('C'), Literal::positive('A')]),
                Term::new(vec![Literal::negative('A'), Literal::positive('B')]),
            ],
        );
        assert_eq!(expr.variables, vec!['A', 'B', 'C']);
        assert_eq!(expr.literal_count(), 4);
        assert_eq!(expr.variable_index('B'), Some(1));
        assert_eq!(expr.variable_index('Z'), None);
    }

    #[test]
    fn test_gate_kinds_are_opposite() {
        let sop = ExpressionForm::SumOfProducts;
        let pos = ExpressionForm::ProductOfSums;
        assert_eq!(sop.term_gate(), GateKind::And);
        assert_eq!(sop.combining_gate(), GateKind::Or);
        assert_eq!(pos.term_gate(), GateKind::Or);
        assert_eq!(pos.combining_gate(), GateKind::And);
    }

    #[test]
    fn test_display_canonical() {
        let sop = ParsedExpression::new(
            ExpressionForm::SumOfProducts,
            vec![
                Term::new(vec![Literal::positive('A'), Literal::positive('B')]),
                Term::new(vec![Literal::negative('A'), Literal::positive('C')]),
            ],
        );
        assert_eq!(sop.to_string(), "AB+A'C");

        let pos = ParsedExpression::new(
            ExpressionForm::ProductOfSums,
            vec![
                Term::new(vec![Literal::positive('A'), Literal::positive('B')]),
                Term::new(vec![Literal::negative('A'), Literal::positive('C')]),
            ],
        );
        assert_eq!(pos.to_string(), "(A+B)(A'+C)");
    }
}
