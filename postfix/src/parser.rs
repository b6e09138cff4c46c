use std::fmt;
use std::ops::Deref;

use lexers::BlankTokenizer;
use log::{debug, trace};

use crate::classify::{is_number, is_operator, precedence};

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("mismatched parentheses: ')' has no matching '('")]
    MissingOParen,
    #[error("mismatched parentheses: '(' is never closed")]
    MissingCParen,
    #[error("empty expression")]
    EmptyExpression,
}

impl ParseError {
    pub fn is_mismatched_parens(&self) -> bool {
        matches!(self, ParseError::MissingOParen | ParseError::MissingCParen)
    }
}

/// Postfix tokens in emission order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RPNExpr(pub Vec<String>);

impl Deref for RPNExpr {
    type Target = [String];
    fn deref(&self) -> &[String] {
        &self.0
    }
}

// tokens separated by a single space
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut BlankTokenizer::from_str(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = String>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack: Vec<String> = Vec::new();

        while let Some(token) = lex.next() {
            trace!("token {:?}, stack {:?}, out {:?}", token, stack, out);
            if is_number(&token) {
                out.push(token);
            } else if is_operator(&token) {
                // equal precedence pops too: operators associate left
                while let Some(top) = stack.pop() {
                    if is_operator(&top) && precedence(&top) >= precedence(&token) {
                        out.push(top);
                    } else {
                        stack.push(top);
                        break;
                    }
                }
                stack.push(token);
            } else if token == "(" {
                stack.push(token);
            } else if token == ")" {
                loop {
                    match stack.pop() {
                        None => return Err(ParseError::MissingOParen),
                        Some(top) if top == "(" => break, // peel matching OParen
                        Some(top) => out.push(top),
                    }
                }
            } else {
                debug!("dropping unrecognized token {:?}", token);
            }
        }
        while let Some(top) = stack.pop() {
            if top == "(" {
                return Err(ParseError::MissingCParen);
            }
            out.push(top);
        }
        if out.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}

/// Infix expression to its postfix rendering, tokens joined by one space.
pub fn shunting_yard(infix: &str) -> Result<String, ParseError> {
    ShuntingParser::parse_str(infix).map(|rpn| rpn.to_string())
}
