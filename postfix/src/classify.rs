use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_token(token: &str) -> Option<BinOp> {
        match token {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Higher binds tighter. All operators associate left.
    pub fn precedence(self) -> usize {
        match self {
            BinOp::Add | BinOp::Sub => 0,
            BinOp::Mul | BinOp::Div => 1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unsigned decimal literal; the empty token has no digits so it isn't one.
pub fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

pub fn is_operator(token: &str) -> bool {
    BinOp::from_token(token).is_some()
}

/// Operator precedence, anything that isn't an operator (parens included) is 0.
pub fn precedence(token: &str) -> usize {
    BinOp::from_token(token).map_or(0, BinOp::precedence)
}

///////////////////////////////////////////////////////////////////////////////
