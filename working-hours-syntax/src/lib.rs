#![doc = include_str!("../README.md")]

pub mod error;
pub mod lexicon;
pub mod range;
pub mod tokenizer;

mod parser;

#[cfg(test)]
mod tests;

pub use chrono::Weekday;
pub use error::{Error, Result};
pub use parser::parse;
pub use range::{DaysRange, HoursRange, Range, RangePair};
pub use tokenizer::{normalize, Token, TokenKind, Tokenizer};
