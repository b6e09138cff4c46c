pub use lexers::{tokenize, BlankTokenizer};

pub use classify::{is_number, is_operator, precedence, BinOp};
pub use parser::{shunting_yard, ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{eval_tokens, evaluate_postfix, EvalErr, Value};

mod classify;
mod parser;

mod rpnprint;
mod rpneval;

/// Failure of either stage when going from infix straight to a value.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

pub fn eval_infix(infix: &str) -> Result<Value, Error> {
    Ok(ShuntingParser::parse_str(infix)?.eval()?)
}
