//! Runs every query once against a tree and renders the results as the
//! lines printed by the `textbook-bst` binary.
//!
//! # Examples
//!
//! ```
//! use textbook_bst::dataset::Dataset;
//! use textbook_bst::report::{Queries, Report};
//!
//! let report = Report::new(&Dataset::default().build(), &Queries::default());
//! let rendered = report.to_string();
//!
//! assert!(rendered.starts_with("Inorder Traversal: 5 10 15 20 25 30 35\n"));
//! assert!(rendered.contains("Lowest Common Ancestor of 5 and 15: 10\n"));
//! ```

use std::fmt;

use tracing::debug;

use crate::recursive::Tree;
use crate::traversal::Order;

/// The questions asked of the tree besides traversals and aggregates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queries {
    /// Value to look up.
    pub search: i64,
    /// Pair of values to find the lowest common ancestor of.
    pub lca: (i64, i64),
    /// Value whose depth is reported.
    pub depth: i64,
}

impl Default for Queries {
    fn default() -> Self {
        Self {
            search: 25,
            lca: (5, 15),
            depth: 15,
        }
    }
}

/// The answers for one tree and one set of [`Queries`].
#[derive(Clone, Debug)]
pub struct Report {
    traversals: Vec<(Order, Vec<i64>)>,
    queries: Queries,
    lca: Option<i64>,
    found: bool,
    min: Option<i64>,
    max: Option<i64>,
    height: isize,
    depth: Option<usize>,
    len: usize,
    /// `None` if the values don't add up to something that fits in an `i64`.
    sum: Option<i64>,
}

impl Report {
    /// Answers `queries` against `tree`.
    pub fn new(tree: &Tree<i64>, queries: &Queries) -> Self {
        let traversals: Vec<(Order, Vec<i64>)> = Order::ALL
            .iter()
            .map(|&order| (order, tree.ordered(order).into_iter().copied().collect()))
            .collect();

        let (a, b) = queries.lca;
        let lca = tree.lca(&a, &b).map(|node| *node.value());
        debug!(a, b, ?lca, "lowest common ancestor");

        let found = tree.search(&queries.search);
        debug!(key = queries.search, found, "search");

        let depth = tree.depth(&queries.depth);
        debug!(key = queries.depth, ?depth, "depth");

        let sum = tree.iter().try_fold(0i64, |acc, &value| acc.checked_add(value));
        debug!(?sum, "sum");

        Self {
            traversals,
            queries: queries.clone(),
            lca,
            found,
            min: tree.min().copied(),
            max: tree.max().copied(),
            height: tree.height(),
            depth,
            len: tree.len(),
            sum,
        }
    }
}

/// Displays the wrapped value or `none`.
struct OrNone<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrNone<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (order, values) in &self.traversals {
            write!(f, "{} Traversal:", order)?;
            for value in values {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }

        let (a, b) = self.queries.lca;
        writeln!(
            f,
            "Lowest Common Ancestor of {} and {}: {}",
            a,
            b,
            OrNone(self.lca)
        )?;

        let presence = if self.found { "is" } else { "is not" };
        writeln!(f, "{} {} present in BST.", self.queries.search, presence)?;

        writeln!(f, "Minimum value in BST: {}", OrNone(self.min))?;
        writeln!(f, "Maximum value in BST: {}", OrNone(self.max))?;
        writeln!(f, "Height of BST: {}", self.height)?;
        writeln!(
            f,
            "Depth of node {}: {}",
            self.queries.depth,
            OrNone(self.depth)
        )?;
        writeln!(f, "Total number of nodes in BST: {}", self.len)?;
        match self.sum {
            Some(sum) => writeln!(f, "Sum of all nodes in BST: {}", sum),
            None => writeln!(f, "Sum of all nodes in BST: overflow"),
        }
    }
}
