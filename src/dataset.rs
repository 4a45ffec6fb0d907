//! The list of values a demonstration tree is built from.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::recursive::Tree;

/// The values inserted when nothing else is asked for. Inserted in this
/// order they form a perfectly balanced tree of height 2.
pub const DEFAULT_VALUES: [i64; 7] = [20, 10, 30, 5, 15, 25, 35];

/// Errors produced while parsing a [`Dataset`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// A token between separators wasn't an integer.
    #[error("invalid value `{token}`: {source}")]
    InvalidValue {
        /// The offending token.
        token: String,
        /// Why it couldn't be parsed.
        source: ParseIntError,
    },
}

/// An ordered list of values to insert into a [`Tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset(Vec<i64>);

impl Default for Dataset {
    fn default() -> Self {
        Self(DEFAULT_VALUES.to_vec())
    }
}

impl From<Vec<i64>> for Dataset {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl Dataset {
    /// The values in insertion order.
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Inserts every value, in order, into a fresh tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::dataset::Dataset;
    ///
    /// let tree = Dataset::default().build();
    ///
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn build(&self) -> Tree<i64> {
        let mut tree = Tree::new();
        for &value in &self.0 {
            if tree.search(&value) {
                debug!(value, "duplicate value, inserting to the right");
            }
            trace!(value, "insert");
            tree = tree.insert(value);
        }
        tree
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl FromStr for Dataset {
    type Err = DatasetError;

    /// Parses integers separated by commas and/or whitespace. An empty
    /// string is an empty dataset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|source| DatasetError::InvalidValue {
                        token: token.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
