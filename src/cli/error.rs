use ltree::InvalidPathError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    InvalidPath(InvalidPathError),
    Other(String),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::InvalidPath(error) => write!(formatter, "{}", error),
            Self::Other(message) => write!(formatter, "{}", message),
        }
    }
}

impl From<InvalidPathError> for ApplicationError {
    fn from(error: InvalidPathError) -> Self {
        Self::InvalidPath(error)
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}
