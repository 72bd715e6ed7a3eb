//! Parse arithmetic expressions in the two free variables `x` and `y` into
//! reusable functions.
//!
//! An expression string is parsed once and the resulting [`ParsedFunction`]
//! can be evaluated any number of times at different `(x, y)` pairs without
//! re-parsing:
//!
//! ```
//! let f = xyfunc::parse("sin(x)^2 + cos(x)^2 + y").unwrap();
//! assert!((f.evaluate(0.7, 1.0) - 2.0).abs() < 1e-12);
//! ```
//!
//! The pipeline is: whitespace stripping, unary-minus normalization
//! ([`normalize`]), lexing ([`lexer`]) against an immutable longest-match
//! symbol registry ([`token`]), a shunting-yard transformation to postfix
//! order ([`parser`]), and construction of an owned evaluator tree
//! ([`evaluator`]). All validation happens during parsing; evaluation never
//! fails and follows IEEE 754 for degenerate math.

pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod token;

pub use error::ParseError;
pub use evaluator::{EvalNode, ParsedFunction};
pub use token::{MathFunction, Operator, Token, Variable};

/// Parses an expression in `x` and `y` into a ready-to-evaluate function.
///
/// The whole pipeline runs as one atomic operation: on failure one of the
/// [`ParseError`] kinds is returned and no partial object exists.
pub fn parse(expression: &str) -> Result<ParsedFunction, ParseError> {
    parser::parse_expression(expression)
}

/// Parses `expression` and evaluates it once at `(x, y)`. Prefer [`parse`]
/// plus repeated [`ParsedFunction::evaluate`] when the same expression is
/// evaluated more than once.
pub fn evaluate_expression(expression: &str, x: f64, y: f64) -> Result<f64, ParseError> {
    Ok(parse(expression)?.evaluate(x, y))
}
