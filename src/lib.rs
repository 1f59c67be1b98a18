//! Validated hierarchical label tree paths modeled after PostgreSQL `ltree`.
//!
//! ```
//! use ltree::LtreePath;
//!
//! let parent = LtreePath::of("electronics.phone_and_accessories").unwrap();
//! let child = parent.append("smartphones").unwrap();
//!
//! assert!(parent.is_ancestor_of(&child));
//! assert_eq!(child.parent(), Some(parent));
//! ```

pub mod column;
mod error;
mod grammar;
mod path;

pub use error::InvalidPathError;
pub use grammar::SEPARATOR;
pub use path::LtreePath;
