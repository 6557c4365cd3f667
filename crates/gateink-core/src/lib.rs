//! GateInk Core Library
//!
//! Platform-agnostic core of GateInk: the parsed boolean expression model,
//! parsing, evaluation, truth tables, wire colors, and the wire paths used
//! for pointer hit-testing and hover highlighting.

pub mod evaluator;
pub mod expression;
pub mod palette;
pub mod parser;
pub mod session;
pub mod truth_table;
pub mod wire;

pub use evaluator::{Assignment, evaluate};
pub use expression::{ExpressionForm, GateKind, Literal, ParsedExpression, Term, signal_key};
pub use palette::{SerializableColor, Theme, color_for};
pub use parser::{ParseError, ParseResult, is_product_of_sums, parse_expression};
pub use session::{EMPTY_EXPRESSION_MESSAGE, ExpressionSession};
pub use truth_table::{
    TruthTable, TruthTableRow, TruthTableRows, generate_truth_table, truth_table_rows,
};
pub use wire::{
    Emphasis, HOVER_THRESHOLD, HoverState, WirePath, find_nearest_path, point_to_polyline_dist,
    point_to_segment_dist,
};
