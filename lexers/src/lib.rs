mod scanner;
mod blank_tokenizer;

pub use scanner::{Scanner, BLANKS};
pub use blank_tokenizer::{tokenize, BlankTokenizer};

#[cfg(test)]
mod blank_tokenizer_test;
