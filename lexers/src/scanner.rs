use std::iter::Peekable;

/// Chars the tokenizer splits on.
pub static BLANKS: &[char] = &[' ', '\t', '\n', '\r'];

/// Reads chars one at a time, remembering everything consumed since the
/// last `ignore`/`extract_string` as the current lexeme.
pub struct Scanner<I: Iterator<Item = char>> {
    src: Peekable<I>,
    lexeme: String,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let next = self.src.next()?;
        self.lexeme.push(next);
        Some(next)
    }
}

impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source.peekable(), lexeme: String::new()}
    }

    pub fn peek(&mut self) -> Option<char> {
        self.src.peek().copied()
    }

    // chars consumed so far for the current lexeme
    pub fn view(&self) -> &str {
        &self.lexeme
    }

    pub fn ignore(&mut self) {
        self.lexeme.clear();
    }

    pub fn extract_string(&mut self) -> String {
        std::mem::take(&mut self.lexeme)
    }

    // Advance the scanner only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        match self.peek() {
            Some(next) if any.contains(&next) => self.next(),
            _ => None,
        }
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[char]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }

    // Consume until a char in the 'any' set or EOF, return if the scanner advanced
    pub fn until_any(&mut self, any: &[char]) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if any.contains(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}
