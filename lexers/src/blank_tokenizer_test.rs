use crate::blank_tokenizer::{tokenize, BlankTokenizer};

#[test]
fn collapses_blanks() {
    assert_eq!(tokenize("  12   + 3 "), vec!["12", "+", "3"]);
    assert_eq!(tokenize("( 1 + 2 ) * 3"), vec!["(", "1", "+", "2", ")", "*", "3"]);
    assert_eq!(tokenize("7\t2\n/\r\n"), vec!["7", "2", "/"]);
}

#[test]
fn empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t \n ").is_empty());
}

#[test]
fn no_splitting_without_blanks() {
    assert_eq!(tokenize("12+3"), vec!["12+3"]);
    assert_eq!(tokenize("(1 + 2)"), vec!["(1", "+", "2)"]);
}

#[test]
fn lazy_iteration() {
    let mut lx = BlankTokenizer::from_str("8 - 4 - 2");
    let expect = ["8", "-", "4", "-", "2"];
    for exp_token in expect.iter() {
        let token = lx.next().unwrap();
        assert_eq!(*exp_token, token);
    }
    assert_eq!(lx.next(), None);
    assert_eq!(lx.next(), None);
}

#[test]
fn from_any_char_iterator() {
    let chars = vec!['4', '2', ' ', '*', ' ', '1', '0'];
    let tokens = BlankTokenizer::new(chars.into_iter()).collect::<Vec<_>>();
    assert_eq!(tokens, vec!["42", "*", "10"]);
}
