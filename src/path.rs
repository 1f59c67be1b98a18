use crate::{
    error::InvalidPathError,
    grammar::{SEPARATOR, is_valid_label, is_valid_path},
};
use bincode::{
    Decode, Encode,
    de::Decoder,
    enc::Encoder,
    error::{DecodeError, EncodeError},
};
use itertools::Itertools;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A validated label tree path like `electronics.phone_and_accessories`.
///
/// The stored string always matches `label(.label)*` where each label is one
/// or more ASCII letters, digits or underscores. Equality, hashing and
/// ordering are those of the canonical string.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct LtreePath {
    value: String,
}

impl LtreePath {
    pub fn of(value: &str) -> Result<Self, InvalidPathError> {
        Self::try_from(value.to_owned())
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, InvalidPathError> {
        value.ok_or_else(InvalidPathError::absent).and_then(Self::of)
    }

    /// Joins labels with the separator. Fails for no labels at all.
    pub fn from_labels<'a>(
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, InvalidPathError> {
        let labels = labels.into_iter().collect::<Vec<_>>();

        if let Some(label) = labels.iter().copied().find(|label| !is_valid_label(label)) {
            return Err(InvalidPathError::new(label));
        }

        Self::of(&labels.iter().join(SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.value.split(SEPARATOR)
    }

    pub fn level(&self) -> usize {
        self.value.matches(SEPARATOR).count() + 1
    }

    pub fn is_root(&self) -> bool {
        !self.value.contains(SEPARATOR)
    }

    pub fn has_parent(&self) -> bool {
        self.value.contains(SEPARATOR)
    }

    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.value.len() < other.value.len()
            && other.value.starts_with(&self.value)
            && other.value[self.value.len()..].starts_with(SEPARATOR)
    }

    pub fn is_descendant_of(&self, other: &Self) -> bool {
        other.value.len() < self.value.len() && other.is_ancestor_of(self)
    }

    pub fn append(&self, label: &str) -> Result<Self, InvalidPathError> {
        if !is_valid_label(label) {
            return Err(InvalidPathError::new(label));
        }

        Ok(Self {
            value: format!("{}{}{}", self.value, SEPARATOR, label),
        })
    }

    pub fn parent(&self) -> Option<Self> {
        self.value
            .rfind(SEPARATOR)
            .map(|index| Self {
                value: self.value[..index].into(),
            })
    }

    pub fn root(&self) -> Self {
        match self.value.split_once(SEPARATOR) {
            Some((root, _)) => Self { value: root.into() },
            None => self.clone(),
        }
    }

    /// Returns the longest path that is a strict ancestor of both paths.
    pub fn common_ancestor(&self, other: &Self) -> Option<Self> {
        let count = self
            .labels()
            .zip(other.labels())
            .take_while(|(left, right)| left == right)
            .count()
            .min(self.level().min(other.level()) - 1);

        (count > 0).then(|| Self {
            value: self.labels().take(count).join(SEPARATOR),
        })
    }
}

impl TryFrom<String> for LtreePath {
    type Error = InvalidPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_path(&value) {
            Ok(Self { value })
        } else {
            Err(InvalidPathError::new(value))
        }
    }
}

impl TryFrom<&str> for LtreePath {
    type Error = InvalidPathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl FromStr for LtreePath {
    type Err = InvalidPathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::of(value)
    }
}

impl From<LtreePath> for String {
    fn from(path: LtreePath) -> Self {
        path.value
    }
}

impl AsRef<str> for LtreePath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Display for LtreePath {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.value)
    }
}

impl Encode for LtreePath {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.value.encode(encoder)
    }
}

impl<Context> Decode<Context> for LtreePath {
    fn decode<D: Decoder<Context = Context>>(decoder: &mut D) -> Result<Self, DecodeError> {
        Self::try_from(String::decode(decoder)?)
            .map_err(|error| DecodeError::OtherString(error.to_string()))
    }
}

bincode::impl_borrow_decode!(LtreePath);
