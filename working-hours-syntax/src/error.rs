use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// The token pattern matched some text without any of its named groups
    /// being set, this can only happen if the pattern is broken.
    EmptyMatch { position: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatch { position } => {
                write!(f, "token pattern matched without any group at byte {position}")
            }
        }
    }
}

impl std::error::Error for Error {}
