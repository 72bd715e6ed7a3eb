use log::trace;

use crate::error::ParseError;
use crate::token::{self, Token};

/// Lexes one token off the front of `input` (whitespace already stripped),
/// returning the token and the number of bytes it consumed.
///
/// A leading digit starts a numeric literal: the maximal run of digits and
/// decimal points is taken and parsed as `f64`, so a second decimal point in
/// the same run is rejected. Everything else is resolved through the symbol
/// registry, longest symbol first.
pub(crate) fn extract_token(input: &str) -> Result<(Token, usize), ParseError> {
    debug_assert!(!input.is_empty(), "lexer called on empty input");

    if input.starts_with(|c: char| c.is_ascii_digit()) {
        let len = input
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(input.len());
        let literal = &input[..len];
        let value: f64 = literal
            .parse()
            .map_err(|_| ParseError::UnrecognizedSymbol)?;

        trace!("matched literal: {literal}");
        return Ok((Token::Number(value), len));
    }

    match token::find_symbol(input) {
        Some((token, len)) => {
            trace!("matched symbol: {}", &input[..len]);
            Ok((token, len))
        }
        None => Err(ParseError::UnrecognizedSymbol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{MathFunction, Operator, Variable};

    #[test]
    fn test_integer_literal() {
        assert_eq!(extract_token("42+1"), Ok((Token::Number(42.0), 2)));
    }

    #[test]
    fn test_decimal_literal() {
        assert_eq!(extract_token("3.25*x"), Ok((Token::Number(3.25), 4)));
        assert_eq!(extract_token("2."), Ok((Token::Number(2.0), 2)));
    }

    #[test]
    fn test_two_decimal_points_rejected() {
        assert_eq!(extract_token("1.2.3"), Err(ParseError::UnrecognizedSymbol));
    }

    #[test]
    fn test_symbols_and_variables() {
        assert_eq!(
            extract_token("x*y"),
            Ok((Token::Variable(Variable::X), 1))
        );
        assert_eq!(
            extract_token("+3"),
            Ok((Token::Operator(Operator::Add), 1))
        );
        assert_eq!(
            extract_token(",5)"),
            Ok((Token::Operator(Operator::Comma), 1))
        );
    }

    #[test]
    fn test_function_names_use_longest_match() {
        assert_eq!(
            extract_token("sinh(x)"),
            Ok((Token::Function(MathFunction::Sinh), 4))
        );
        assert_eq!(
            extract_token("sin(x)"),
            Ok((Token::Function(MathFunction::Sin), 3))
        );
        assert_eq!(
            extract_token("atanh(0.5)"),
            Ok((Token::Function(MathFunction::Atanh), 5))
        );
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(extract_token("q+1"), Err(ParseError::UnrecognizedSymbol));
        assert_eq!(extract_token("#"), Err(ParseError::UnrecognizedSymbol));
    }

    #[test]
    fn test_full_scan_of_an_expression() {
        let mut rest = "min(x,2)^2";
        let mut tokens = Vec::new();
        while !rest.is_empty() {
            let (token, len) = extract_token(rest).unwrap();
            tokens.push(token);
            rest = &rest[len..];
        }
        assert_eq!(
            tokens,
            vec![
                Token::Function(MathFunction::Min),
                Token::Operator(Operator::OpenParen),
                Token::Variable(Variable::X),
                Token::Operator(Operator::Comma),
                Token::Number(2.0),
                Token::Operator(Operator::CloseParen),
                Token::Operator(Operator::Power),
                Token::Number(2.0),
            ]
        );
    }
}
