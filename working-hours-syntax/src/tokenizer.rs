use std::fmt;
use std::iter::FusedIterator;

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

use crate::error::{Error, Result};
use crate::lexicon;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&build_pattern()).expect("invalid token pattern"));

/// Build a pattern with one named group per kind of token, in order of
/// priority.
fn build_pattern() -> String {
    let alternatives = |names: &[&str]| {
        names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|")
    };

    format!(
        r"(?i)(?P<hour>\d{{1,2}}[:.\-]\d{{2}}|\d{{1,2}})|(?P<weekday>{})|(?P<weekday_range>{})|(?P<range_mark>-|до|,)|(?P<word>\w+)",
        alternatives(lexicon::weekday_names()),
        alternatives(lexicon::weekday_range_phrases()),
    )
}

/// Prepare raw text for the tokenizer: lowercase it and turn long dashes into
/// hyphens.
///
/// ```
/// use working_hours_syntax::normalize;
///
/// assert_eq!(normalize("Пн – Сб"), "пн - сб");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['–', '—'], "-")
}

// TokenKind

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TokenKind {
    /// `19:00`, `19.00`, `19-00` or `19`
    Hour,
    /// `пн` or `суббота`
    Weekday,
    /// `будни`
    WeekdayRange,
    /// Delimiter of weekdays or hours: `-`, `до` or `,`
    RangeMark,
    /// Any other sequence of alphanumeric characters
    Word,
}

impl TokenKind {
    /// All kinds in order of priority.
    pub const ALL: [Self; 5] = [
        Self::Hour,
        Self::Weekday,
        Self::WeekdayRange,
        Self::RangeMark,
        Self::Word,
    ];

    /// Name of the capture group matching this kind of token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Weekday => "weekday",
            Self::WeekdayRange => "weekday_range",
            Self::RangeMark => "range_mark",
            Self::Word => "word",
        }
    }

    /// Check if this token can be part of a block of working hours.
    pub fn is_daytime(self) -> bool {
        matches!(self, Self::Hour | Self::Weekday | Self::WeekdayRange)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Token

/// Minimal element of parsed text.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Token {
    value: String,
    kind: TokenKind,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self { value: value.into(), kind }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

// Tokenizer

/// Lazily split normalized text into tokens.
///
/// Text that doesn't match any kind of token, such as punctuation or
/// whitespaces, is skipped.
///
/// ```
/// use working_hours_syntax::{normalize, TokenKind, Tokenizer};
///
/// let text = normalize("Сб.: 10.00-18.00");
/// let kinds: Vec<_> = Tokenizer::new(&text).map(|tok| tok.unwrap().kind()).collect();
///
/// assert_eq!(
///     kinds,
///     [TokenKind::Weekday, TokenKind::Hour, TokenKind::RangeMark, TokenKind::Hour],
/// );
/// ```
#[derive(Debug)]
pub struct Tokenizer<'t> {
    matches: CaptureMatches<'static, 't>,
}

impl<'t> Tokenizer<'t> {
    /// Tokenize some text, which is expected to be [`normalize`]d.
    pub fn new(text: &'t str) -> Self {
        Self { matches: TOKEN_PATTERN.captures_iter(text) }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.matches.next()?;

        let token = TokenKind::ALL.into_iter().find_map(|kind| {
            let group = captures.name(kind.as_str())?;
            (!group.is_empty()).then(|| Token::new(group.as_str(), kind))
        });

        Some(token.ok_or_else(|| Error::EmptyMatch {
            position: captures.get(0).map(|m| m.start()).unwrap_or_default(),
        }))
    }
}

impl FusedIterator for Tokenizer<'_> {}
