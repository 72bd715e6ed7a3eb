use thiserror::Error;

/// Everything that can go wrong while turning an expression string into a
/// [`crate::ParsedFunction`]. Evaluation itself never fails: numeric edge
/// cases (division by zero, log of a negative, ...) follow IEEE 754 and
/// produce infinities or NaN instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("mismatched parenthesis in the expression")]
    MismatchedParenthesis,

    #[error("unrecognized symbol in the expression")]
    UnrecognizedSymbol,

    #[error("too many operators for the available operands")]
    TooManyOperators,

    #[error("incorrect number of arguments to a function")]
    IncorrectNumberOfArguments,
}
