use std::fmt::Display;

pub use working_hours_syntax::error::Error as ParserError;

/// A time format string that chrono can't use to render times.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidTimeFormat(pub String);

impl Display for InvalidTimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid time format `{}`", self.0)
    }
}

impl std::error::Error for InvalidTimeFormat {}
