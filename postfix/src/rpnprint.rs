use crate::classify::BinOp;
use crate::parser::RPNExpr;

// leaves never need grouping
const ATOM: usize = 99;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a str),
    Node(BinOp, Box<AST<'a>>, Box<AST<'a>>),
}

impl RPNExpr {
    fn build_ast(&self) -> Option<AST> {
        let mut nodes = Vec::new();
        for token in self.iter() {
            match BinOp::from_token(token) {
                Some(op) => {
                    let rhs = nodes.pop()?;
                    let lhs = nodes.pop()?;
                    nodes.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                None => nodes.push(AST::Leaf(token)),
            }
        }
        let root = nodes.pop()?;
        if nodes.is_empty() { Some(root) } else { None }
    }

    /// Infix form with only the parens precedence requires. Parens are
    /// standalone tokens so the result parses back to the same postfix.
    /// None if the tokens don't reduce to a single expression.
    pub fn to_infix(&self) -> Option<String> {
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(token) => (token.to_string(), ATOM),
                AST::Node(op, lhs, rhs) => {
                    let prec = op.precedence();
                    let (lhs, lprec) = printer(lhs);
                    let (rhs, rprec) = printer(rhs);
                    let lh = if prec > lprec { format!("( {} )", lhs) } else { lhs };
                    // NOTE: '1 - ( 2 - 3 )' and '1 + ( 2 + 3 )' keep the parens,
                    // left associativity regroups anything on the right
                    let rh = if prec >= rprec { format!("( {} )", rhs) } else { rhs };
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }

        self.build_ast().map(|ast| printer(&ast).0)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::parser::{RPNExpr, ShuntingParser};

    fn rpn(postfix: &str) -> RPNExpr {
        RPNExpr(lexers::tokenize(postfix))
    }

    #[test]
    fn minimal_parens() {
        let tests = vec![
            ("1 2 3 * +", "1 + 2 * 3"),
            ("1 2 + 3 *", "( 1 + 2 ) * 3"),
            ("8 4 - 2 -", "8 - 4 - 2"),
            ("8 4 2 - -", "8 - ( 4 - 2 )"),
            ("1 2 3 + +", "1 + ( 2 + 3 )"),
            ("6 3 / 2 *", "6 / 3 * 2"),
            ("6 3 2 * /", "6 / ( 3 * 2 )"),
            ("1 2 * 3 4 * +", "1 * 2 + 3 * 4"),
            ("1 2 - 3 4 - *", "( 1 - 2 ) * ( 3 - 4 )"),
            ("42", "42"),
        ];
        for (postfix, infix) in tests.iter() {
            assert_eq!(rpn(postfix).to_infix().as_deref(), Some(*infix));
        }
    }

    #[test]
    fn reparses_to_same_postfix() {
        for infix in ["( ( 1 + 2 ) * ( 3 - ( 4 / 5 ) ) )", "7 - ( 2 - 3 ) - 1", "2 * ( 3 * 4 )"].iter() {
            let expr = ShuntingParser::parse_str(infix).unwrap();
            let printed = expr.to_infix().unwrap();
            assert_eq!(ShuntingParser::parse_str(&printed).unwrap(), expr);
        }
    }

    #[test]
    fn malformed() {
        assert_eq!(rpn("1 +").to_infix(), None);
        assert_eq!(rpn("1 2").to_infix(), None);
        assert_eq!(rpn("").to_infix(), None);
    }
}
