//! Boolean expression parser.
//!
//! Accepts the informal notation people type for two-level logic:
//! juxtaposition for AND, `+` for OR, and a trailing `'` for NOT.
//! `AB+A'C` is read as a sum of products, `(A+B)(A'+C)` as a product of sums.

use crate::expression::{ExpressionForm, Literal, ParsedExpression, Term};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expression is empty")]
    Empty,
    #[error("No variables found in expression: {0}")]
    NoVariables(String),
    #[error("No terms found in expression: {0}")]
    NoTerms(String),
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"[A-Za-z]"));
static ADJACENT_GROUPS: LazyLock<Regex> = LazyLock::new(|| pattern(r"\)\s*\("));
static GROUP: LazyLock<Regex> = LazyLock::new(|| pattern(r"\([^)]+\)"));
static TERM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"[+\s]+"));

fn pattern(source: &'static str) -> Regex {
    Regex::new(source).expect("built-in pattern is valid")
}

/// Whether the text reads as a product of sums.
///
/// Requires parenthesized groups together with an explicit AND operator
/// (`·` or `*`) or two groups side by side.
pub fn is_product_of_sums(text: &str) -> bool {
    text.contains('(')
        && (text.contains('·')
            || text.contains('*')
            || text.contains(")(")
            || ADJACENT_GROUPS.is_match(text))
}

/// Parse an expression in SOP or POS notation.
pub fn parse_expression(text: &str) -> ParseResult<ParsedExpression> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let form = if is_product_of_sums(text) {
        ExpressionForm::ProductOfSums
    } else {
        ExpressionForm::SumOfProducts
    };

    let mut variables: Vec<char> = VARIABLE
        .find_iter(text)
        .filter_map(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    variables.sort_unstable();
    variables.dedup();
    if variables.is_empty() {
        return Err(ParseError::NoVariables(text.to_string()));
    }

    let clauses: Vec<&str> = match form {
        ExpressionForm::ProductOfSums => GROUP
            .find_iter(text)
            .map(|m| m.as_str().trim_start_matches('(').trim_end_matches(')'))
            .collect(),
        ExpressionForm::SumOfProducts => vec![text],
    };

    let terms: Vec<Term> = match form {
        // Inside a clause the tokens are OR-ed, so the whole clause is one term.
        ExpressionForm::ProductOfSums => clauses
            .into_iter()
            .map(|clause| {
                TERM_SEPARATOR
                    .split(clause)
                    .filter(|token| !token.is_empty())
                    .filter_map(clause_literal)
                    .collect::<Vec<_>>()
            })
            .map(Term::new)
            .collect(),
        // At top level the tokens are OR-ed, so each token is one term.
        ExpressionForm::SumOfProducts => TERM_SEPARATOR
            .split(text)
            .filter(|token| !token.trim().is_empty())
            .map(|token| Term::new(scan_literals(token)))
            .collect(),
    };

    let terms: Vec<Term> = terms.into_iter().filter(|t| !t.is_empty()).collect();
    if terms.is_empty() {
        return Err(ParseError::NoTerms(text.to_string()));
    }

    log::debug!(
        "Parsed {:?} as {} with {} variables and {} terms",
        text,
        form.abbreviation(),
        variables.len(),
        terms.len()
    );

    Ok(ParsedExpression {
        form,
        variables,
        terms,
    })
}

/// One literal per OR-ed token: its first letter, negated if the token has a `'`.
fn clause_literal(token: &str) -> Option<Literal> {
    let variable = token.chars().find(char::is_ascii_alphabetic)?;
    Some(Literal::new(variable, token.contains('\'')))
}

/// Read letters from a token; a letter directly followed by `'` is negated.
fn scan_literals(token: &str) -> Vec<Literal> {
    let mut literals = Vec::new();
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let negated = chars.peek() == Some(&'\'');
        if negated {
            chars.next();
        }
        literals.push(Literal::new(c, negated));
    }
    literals
}
