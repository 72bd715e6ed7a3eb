use log::debug;

use crate::error::ParseError;
use crate::evaluator::ParsedFunction;
use crate::lexer::extract_token;
use crate::normalize::format_minus_signs;
use crate::token::{Operator, Token};

/// Runs the whole pipeline: whitespace stripping, unary-minus normalization,
/// lexing, infix-to-postfix transformation and evaluator-tree construction.
/// On success the returned [`ParsedFunction`] needs no further validation.
pub fn parse_expression(expression: &str) -> Result<ParsedFunction, ParseError> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = format_minus_signs(&stripped)?;
    let postfix = to_postfix(&normalized)?;
    ParsedFunction::from_postfix(postfix)
}

/// Shunting-yard transformation of a normalized, whitespace-free expression
/// into postfix (reverse Polish) token order.
///
/// Commas are bookkeeping only: every function pushes `arity - 1` expected
/// commas and every comma consumed pays one back, so a non-zero balance at
/// the end means some function was called with the wrong argument count.
pub(crate) fn to_postfix(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut ops: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::new();
    let mut expected_commas: i64 = 0;

    let mut rest = input;
    while !rest.is_empty() {
        let (token, len) = extract_token(rest)?;
        rest = &rest[len..];

        match token {
            Token::Number(_) | Token::Variable(_) => output.push(token),
            Token::Function(function) => {
                expected_commas += function.arity() as i64 - 1;
                ops.push(token);
            }
            Token::Operator(Operator::Comma) => expected_commas -= 1,
            Token::Operator(Operator::OpenParen) => ops.push(token),
            Token::Operator(Operator::CloseParen) => {
                loop {
                    match ops.pop() {
                        None => return Err(ParseError::MismatchedParenthesis),
                        Some(Token::Operator(Operator::OpenParen)) => break,
                        Some(stacked) => output.push(stacked),
                    }
                }
                // A function directly under the matched `(` owns the
                // argument group that just closed.
                if matches!(ops.last(), Some(Token::Function(_))) {
                    if let Some(function) = ops.pop() {
                        output.push(function);
                    }
                }
            }
            Token::Operator(incoming) => {
                while let Some(&Token::Operator(stacked)) = ops.last() {
                    if stacked == Operator::OpenParen
                        || stacked.precedence() < incoming.precedence()
                        || (stacked.precedence() == incoming.precedence()
                            && !incoming.left_associative())
                    {
                        break;
                    }
                    if let Some(popped) = ops.pop() {
                        output.push(popped);
                    }
                }
                ops.push(token);
            }
        }
    }

    while let Some(stacked) = ops.pop() {
        if matches!(stacked, Token::Operator(Operator::OpenParen)) {
            return Err(ParseError::MismatchedParenthesis);
        }
        output.push(stacked);
    }

    if expected_commas != 0 {
        return Err(ParseError::IncorrectNumberOfArguments);
    }

    debug!("postfix stream: {output:?}");
    Ok(output)
}
