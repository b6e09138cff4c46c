use std::num::ParseIntError;

use lexers::BlankTokenizer;
use log::{debug, trace};

use crate::classify::BinOp;
use crate::parser::RPNExpr;

pub type Value = i64;

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum EvalErr {
    #[error("too few operands for '{0}'")]
    InsufficientOperands(BinOp),
    #[error("division by zero")]
    DivisionByZero,
    #[error("too few operators: expected a single result, found {0} values")]
    InsufficientOperators(usize),
    #[error("bad number '{token}': {source}")]
    BadNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("overflow evaluating {lhs} {op} {rhs}")]
    Overflow { op: BinOp, lhs: Value, rhs: Value },
}

fn apply(op: BinOp, lhs: Value, rhs: Value) -> Result<Value, EvalErr> {
    let result = match op {
        BinOp::Add => lhs.checked_add(rhs),
        BinOp::Sub => lhs.checked_sub(rhs),
        BinOp::Mul => lhs.checked_mul(rhs),
        BinOp::Div if rhs == 0 => return Err(EvalErr::DivisionByZero),
        BinOp::Div => lhs.checked_div(rhs), // truncates toward zero
    };
    result.ok_or(EvalErr::Overflow { op, lhs, rhs })
}

/// Reduce postfix tokens to a single value.
/// Anything that isn't an operator has to parse as an integer literal.
pub fn eval_tokens<T: AsRef<str>>(tokens: impl IntoIterator<Item = T>) -> Result<Value, EvalErr> {
    let mut operands: Vec<Value> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match BinOp::from_token(token) {
            Some(op) => {
                if operands.len() < 2 {
                    return Err(EvalErr::InsufficientOperands(op));
                }
                // most recent value is the right hand side
                let cut = operands.len() - 2;
                let (l, r) = (operands[cut], operands[cut + 1]);
                operands.truncate(cut);
                let value = apply(op, l, r)?;
                trace!("{} {} {} = {}", l, op, r, value);
                operands.push(value);
            }
            None => match token.parse::<Value>() {
                Ok(value) => operands.push(value),
                Err(source) => {
                    return Err(EvalErr::BadNumber { token: token.to_string(), source })
                }
            },
        }
    }
    match operands.as_slice() {
        [result] => {
            debug!("result: {}", result);
            Ok(*result)
        }
        _ => Err(EvalErr::InsufficientOperators(operands.len())),
    }
}

/// Evaluate a blank-delimited postfix expression.
pub fn evaluate_postfix(postfix: &str) -> Result<Value, EvalErr> {
    eval_tokens(BlankTokenizer::from_str(postfix))
}

impl RPNExpr {
    pub fn eval(&self) -> Result<Value, EvalErr> {
        eval_tokens(self.iter())
    }
}
