//! Conversions between paths and database columns.
//!
//! Adapters never translate validation failures: a stored value that is not a
//! valid path comes back as the same [`InvalidPathError`] that
//! [`LtreePath::of`] returns.

use crate::{error::InvalidPathError, path::LtreePath};

pub const LTREE_TYPE: &str = "ltree";

pub trait ColumnAdapter {
    type Column;

    fn to_column(&self, path: Option<&LtreePath>) -> Option<Self::Column>;
    fn from_column(
        &self,
        column: Option<&Self::Column>,
    ) -> Result<Option<LtreePath>, InvalidPathError>;
}

/// A database cell as a driver hands it over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColumnValue {
    Object { type_name: String, value: String },
    Text(String),
}

impl ColumnValue {
    pub fn object(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Object {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Object { value, .. } => value,
            Self::Text(value) => value,
        }
    }
}

/// Writes `ltree` typed objects and reads either typed objects or text.
#[derive(Clone, Copy, Debug, Default)]
pub struct LtreeColumnAdapter {}

impl LtreeColumnAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl ColumnAdapter for LtreeColumnAdapter {
    type Column = ColumnValue;

    fn to_column(&self, path: Option<&LtreePath>) -> Option<ColumnValue> {
        path.map(|path| ColumnValue::object(LTREE_TYPE, path.as_str()))
    }

    fn from_column(
        &self,
        column: Option<&ColumnValue>,
    ) -> Result<Option<LtreePath>, InvalidPathError> {
        column
            .map(|column| LtreePath::of(column.value()))
            .transpose()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TextColumnAdapter {}

impl TextColumnAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl ColumnAdapter for TextColumnAdapter {
    type Column = String;

    fn to_column(&self, path: Option<&LtreePath>) -> Option<String> {
        path.map(|path| path.as_str().into())
    }

    fn from_column(&self, column: Option<&String>) -> Result<Option<LtreePath>, InvalidPathError> {
        column.map(String::as_str).map(LtreePath::of).transpose()
    }
}
