use crate::scanner::{Scanner, BLANKS};

// Splits input on runs of blanks, the blanks themselves are dropped.
// Nothing else is a separator: "12+3" comes out as a single token.
pub struct BlankTokenizer<I: Iterator<Item = char>>(Scanner<I>);

impl<I: Iterator<Item = char>> BlankTokenizer<I> {
    pub fn new(source: I) -> BlankTokenizer<I> {
        BlankTokenizer(Scanner::new(source))
    }
}

impl<'a> BlankTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        BlankTokenizer::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Iterator for BlankTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        self.0.skip_all(BLANKS);
        self.0.ignore();
        if self.0.until_any(BLANKS) {
            Some(self.0.extract_string())
        } else {
            None
        }
    }
}

/// Blank-delimited tokens of `expression`, in source order.
pub fn tokenize(expression: &str) -> Vec<String> {
    BlankTokenizer::from_str(expression).collect()
}
