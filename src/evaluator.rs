use log::debug;

use crate::error::ParseError;
use crate::token::{MathFunction, Operator, Token, Variable};

/// One node of the evaluator tree. Every parent owns its children outright;
/// the tree is immutable once built, so evaluation is a pure function of the
/// tree and the supplied `(x, y)` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalNode {
    Number(f64),
    Variable(Variable),
    BinaryOperation {
        left: Box<EvalNode>,
        operator: Operator,
        right: Box<EvalNode>,
    },
    FunctionCall {
        function: MathFunction,
        args: Vec<EvalNode>,
    },
}

impl EvalNode {
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            EvalNode::Number(n) => *n,
            EvalNode::Variable(Variable::X) => x,
            EvalNode::Variable(Variable::Y) => y,
            EvalNode::BinaryOperation {
                left,
                operator,
                right,
            } => operator.apply(left.eval(x, y), right.eval(x, y)),
            EvalNode::FunctionCall { function, args } => {
                let values: Vec<f64> = args.iter().map(|arg| arg.eval(x, y)).collect();
                function.apply(&values)
            }
        }
    }
}

/// An expression parsed into a ready-to-evaluate tree. Immutable, and safe
/// to evaluate concurrently from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFunction {
    root: EvalNode,
}

impl ParsedFunction {
    /// Assembles the evaluator tree from a postfix token stream against a
    /// working stack of already-built nodes. All arity and operand-count
    /// validation happens here, so [`ParsedFunction::evaluate`] never fails.
    pub(crate) fn from_postfix(tokens: Vec<Token>) -> Result<Self, ParseError> {
        let mut stack: Vec<EvalNode> = Vec::new();

        for token in tokens {
            let node = match token {
                Token::Number(n) => EvalNode::Number(n),
                Token::Variable(v) => EvalNode::Variable(v),
                Token::Function(function) => {
                    let arity = function.arity();
                    if stack.len() < arity {
                        return Err(ParseError::IncorrectNumberOfArguments);
                    }
                    // split_off keeps the arguments in arrival order.
                    let args = stack.split_off(stack.len() - arity);
                    EvalNode::FunctionCall { function, args }
                }
                Token::Operator(operator) if operator.is_binary() => {
                    // Stack order reverses arrival order: the first pop is
                    // the right-hand operand.
                    let right = stack.pop().ok_or(ParseError::TooManyOperators)?;
                    let left = stack.pop().ok_or(ParseError::TooManyOperators)?;
                    EvalNode::BinaryOperation {
                        left: Box::new(left),
                        operator,
                        right: Box::new(right),
                    }
                }
                // Structural operators never survive the postfix
                // transformation; a stream carrying one is incoherent.
                Token::Operator(_) => return Err(ParseError::UnrecognizedSymbol),
            };
            stack.push(node);
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(root), true) => {
                debug!("built evaluator tree: {root:?}");
                Ok(ParsedFunction { root })
            }
            _ => Err(ParseError::UnrecognizedSymbol),
        }
    }

    /// Evaluates the expression at `(x, y)`. Always returns a value:
    /// degenerate math yields IEEE infinities or NaN.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.root.eval(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Token {
        Token::Number(n)
    }

    #[test]
    fn test_single_operand_stream() {
        let f = ParsedFunction::from_postfix(vec![num(7.0)]).unwrap();
        assert_eq!(f.evaluate(0.0, 0.0), 7.0);
    }

    #[test]
    fn test_operand_order_of_binary_operators() {
        // 6 3 / is 6/3: the node popped second is the left operand.
        let f = ParsedFunction::from_postfix(vec![
            num(6.0),
            num(3.0),
            Token::Operator(Operator::Divide),
        ])
        .unwrap();
        assert_eq!(f.evaluate(0.0, 0.0), 2.0);

        let f = ParsedFunction::from_postfix(vec![
            num(2.0),
            num(5.0),
            Token::Operator(Operator::Subtract),
        ])
        .unwrap();
        assert_eq!(f.evaluate(0.0, 0.0), -3.0);
    }

    #[test]
    fn test_function_arguments_keep_arrival_order() {
        // 0 1 0.25 smoothstep is smoothstep(0, 1, 0.25).
        let f = ParsedFunction::from_postfix(vec![
            num(0.0),
            num(1.0),
            num(0.25),
            Token::Function(MathFunction::Smoothstep),
        ])
        .unwrap();
        assert_eq!(f.evaluate(0.0, 0.0), 0.15625);
    }

    #[test]
    fn test_variables_resolve_to_the_supplied_pair() {
        let f = ParsedFunction::from_postfix(vec![
            Token::Variable(Variable::X),
            Token::Variable(Variable::Y),
            Token::Operator(Operator::Multiply),
        ])
        .unwrap();
        assert_eq!(f.evaluate(3.0, 4.0), 12.0);
        assert_eq!(f.evaluate(-1.0, 0.5), -0.5);
    }

    #[test]
    fn test_operator_with_missing_operands() {
        assert_eq!(
            ParsedFunction::from_postfix(vec![num(1.0), Token::Operator(Operator::Add)]),
            Err(ParseError::TooManyOperators)
        );
    }

    #[test]
    fn test_function_with_missing_arguments() {
        assert_eq!(
            ParsedFunction::from_postfix(vec![num(1.0), Token::Function(MathFunction::Max)]),
            Err(ParseError::IncorrectNumberOfArguments)
        );
    }

    #[test]
    fn test_leftover_nodes_are_rejected() {
        assert_eq!(
            ParsedFunction::from_postfix(vec![num(1.0), num(2.0)]),
            Err(ParseError::UnrecognizedSymbol)
        );
    }

    #[test]
    fn test_empty_stream_is_rejected() {
        assert_eq!(
            ParsedFunction::from_postfix(Vec::new()),
            Err(ParseError::UnrecognizedSymbol)
        );
    }

    #[test]
    fn test_structural_operator_in_stream_is_rejected() {
        assert_eq!(
            ParsedFunction::from_postfix(vec![
                num(1.0),
                num(2.0),
                Token::Operator(Operator::Comma)
            ]),
            Err(ParseError::UnrecognizedSymbol)
        );
    }

    #[test]
    fn test_concurrent_evaluation_of_a_shared_function() {
        let f = ParsedFunction::from_postfix(vec![
            Token::Variable(Variable::X),
            Token::Variable(Variable::Y),
            Token::Operator(Operator::Add),
        ])
        .unwrap();

        std::thread::scope(|scope| {
            let shared = &f;
            for worker in 0..4 {
                scope.spawn(move || {
                    for i in 0..1000 {
                        let v = f64::from(worker * 1000 + i);
                        assert_eq!(shared.evaluate(v, 1.0), v + 1.0);
                    }
                });
            }
        });
    }
}
