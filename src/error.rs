use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidPathError {
    input: Option<String>,
}

impl InvalidPathError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
        }
    }

    pub fn absent() -> Self {
        Self { input: None }
    }

    /// Returns the rejected input, or `None` if no input was given at all.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl Error for InvalidPathError {}

impl Display for InvalidPathError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if let Some(input) = &self.input {
            write!(formatter, "invalid ltree path: \"{}\"", input)
        } else {
            write!(formatter, "invalid ltree path: none")
        }
    }
}
