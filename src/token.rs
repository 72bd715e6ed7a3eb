use lazy_static::lazy_static;

/// One of the two free variables an expression may mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
}

/// Operator symbols, including the structural ones (`(`, `)`, `,`) that are
/// consumed during the infix-to-postfix transformation and never reach the
/// evaluator tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    OpenParen,
    CloseParen,
    Comma,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Binding strength; structural tokens get 0 and are handled explicitly
    /// before precedence is ever consulted.
    pub fn precedence(&self) -> u32 {
        match self {
            Operator::Add | Operator::Subtract => 2,
            Operator::Multiply | Operator::Divide => 3,
            Operator::Power => 4,
            Operator::OpenParen | Operator::CloseParen | Operator::Comma => 0,
        }
    }

    /// Every arithmetic operator groups left-to-right except power.
    pub fn left_associative(&self) -> bool {
        !matches!(self, Operator::Power)
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operator::Add
                | Operator::Subtract
                | Operator::Multiply
                | Operator::Divide
                | Operator::Power
        )
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => left.powf(right),
            Operator::OpenParen | Operator::CloseParen | Operator::Comma => {
                unreachable!("structural operators never appear in an evaluator tree")
            }
        }
    }
}

/// The closed catalog of named functions an expression may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Sinh,
    Cosh,
    Tanh,
    Sech,
    Csch,
    Coth,
    Asin,
    Acos,
    Atan,
    Asinh,
    Acosh,
    Atanh,
    Ln,
    Log,
    Abs,
    Exp,
    Sign,
    Floor,
    Ceil,
    Trunc,
    Fract,
    Max,
    Min,
    Step,
    Clamp,
    Mix,
    Smoothstep,
}

impl MathFunction {
    /// Number of arguments the function requires, fixed per name.
    pub fn arity(&self) -> usize {
        match self {
            MathFunction::Max | MathFunction::Min | MathFunction::Step => 2,
            MathFunction::Clamp | MathFunction::Mix | MathFunction::Smoothstep => 3,
            _ => 1,
        }
    }

    /// Applies the function to already-evaluated arguments. Callers must
    /// supply exactly [`MathFunction::arity`] values; the tree builder
    /// guarantees this before a function node is ever constructed.
    pub fn apply(&self, args: &[f64]) -> f64 {
        match self {
            MathFunction::Sin => args[0].sin(),
            MathFunction::Cos => args[0].cos(),
            MathFunction::Tan => args[0].tan(),
            MathFunction::Sec => 1.0 / args[0].cos(),
            MathFunction::Csc => 1.0 / args[0].sin(),
            MathFunction::Cot => 1.0 / args[0].tan(),

            MathFunction::Sinh => args[0].sinh(),
            MathFunction::Cosh => args[0].cosh(),
            MathFunction::Tanh => args[0].tanh(),
            MathFunction::Sech => 1.0 / args[0].cosh(),
            MathFunction::Csch => 1.0 / args[0].sinh(),
            MathFunction::Coth => 1.0 / args[0].tanh(),

            MathFunction::Asin => args[0].asin(),
            MathFunction::Acos => args[0].acos(),
            MathFunction::Atan => args[0].atan(),

            MathFunction::Asinh => args[0].asinh(),
            MathFunction::Acosh => args[0].acosh(),
            MathFunction::Atanh => args[0].atanh(),

            MathFunction::Ln => args[0].ln(),
            MathFunction::Log => args[0].log10(),
            MathFunction::Abs => args[0].abs(),
            MathFunction::Exp => args[0].exp(),
            MathFunction::Sign => {
                let v = args[0];
                if v > 0.0 {
                    1.0
                } else if v < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            MathFunction::Floor => args[0].floor(),
            MathFunction::Ceil => args[0].ceil(),
            MathFunction::Trunc => args[0].trunc(),
            MathFunction::Fract => args[0].fract(),

            MathFunction::Max => args[0].max(args[1]),
            MathFunction::Min => args[0].min(args[1]),
            MathFunction::Step => {
                let (edge, v) = (args[0], args[1]);
                if v < edge {
                    0.0
                } else {
                    1.0
                }
            }

            // max/min chain instead of f64::clamp: inverted bounds must
            // degrade numerically, not panic.
            MathFunction::Clamp => args[0].max(args[1]).min(args[2]),
            MathFunction::Mix => {
                let (a, b, t) = (args[0], args[1], args[2]);
                a + (b - a) * t
            }
            MathFunction::Smoothstep => {
                let (e0, e1, v) = (args[0], args[1], args[2]);
                let t = ((v - e0) / (e1 - e0)).clamp(0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }
        }
    }
}

/// A single lexed unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Variable(Variable),
    Operator(Operator),
    Function(MathFunction),
}

lazy_static! {
    /// Every surface symbol the lexer can resolve, sorted longest symbol
    /// first (ties alphabetical) so that a prefix probe matches `asinh`
    /// before `asin` and `sinh` before `sin`. Built once, never mutated.
    static ref TOKEN_REGISTRY: Vec<(&'static str, Token)> = {
        use MathFunction::*;

        let mut table: Vec<(&'static str, Token)> = vec![
            ("(", Token::Operator(Operator::OpenParen)),
            (")", Token::Operator(Operator::CloseParen)),
            (",", Token::Operator(Operator::Comma)),
            ("+", Token::Operator(Operator::Add)),
            ("-", Token::Operator(Operator::Subtract)),
            ("*", Token::Operator(Operator::Multiply)),
            ("/", Token::Operator(Operator::Divide)),
            ("^", Token::Operator(Operator::Power)),
            ("x", Token::Variable(Variable::X)),
            ("y", Token::Variable(Variable::Y)),
            ("sin", Token::Function(Sin)),
            ("cos", Token::Function(Cos)),
            ("tan", Token::Function(Tan)),
            ("sec", Token::Function(Sec)),
            ("csc", Token::Function(Csc)),
            ("cot", Token::Function(Cot)),
            ("sinh", Token::Function(Sinh)),
            ("cosh", Token::Function(Cosh)),
            ("tanh", Token::Function(Tanh)),
            ("sech", Token::Function(Sech)),
            ("csch", Token::Function(Csch)),
            ("coth", Token::Function(Coth)),
            ("asin", Token::Function(Asin)),
            ("acos", Token::Function(Acos)),
            ("atan", Token::Function(Atan)),
            ("asinh", Token::Function(Asinh)),
            ("acosh", Token::Function(Acosh)),
            ("atanh", Token::Function(Atanh)),
            ("ln", Token::Function(Ln)),
            ("log", Token::Function(Log)),
            ("abs", Token::Function(Abs)),
            ("exp", Token::Function(Exp)),
            ("sign", Token::Function(Sign)),
            ("floor", Token::Function(Floor)),
            ("ceil", Token::Function(Ceil)),
            ("trunc", Token::Function(Trunc)),
            ("fract", Token::Function(Fract)),
            ("max", Token::Function(Max)),
            ("min", Token::Function(Min)),
            ("step", Token::Function(Step)),
            ("clamp", Token::Function(Clamp)),
            ("mix", Token::Function(Mix)),
            ("smoothstep", Token::Function(Smoothstep)),
        ];

        table.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then(a.cmp(b)));
        table
    };
}

/// Longest-match probe of the symbol registry against the front of `input`.
/// Returns the matched token and how many bytes of input it consumed.
pub(crate) fn find_symbol(input: &str) -> Option<(Token, usize)> {
    TOKEN_REGISTRY
        .iter()
        .find(|(symbol, _)| input.starts_with(symbol))
        .map(|(symbol, token)| (*token, symbol.len()))
}
