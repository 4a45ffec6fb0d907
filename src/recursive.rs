//! A plain, unbalanced BST built out of `Box`ed subtrees. Every operation
//! is written the way it would be on a whiteboard: descend left when the
//! value is smaller, otherwise descend right. Nothing is ever rebalanced so
//! inserting sorted input degrades the tree into a linked list.
//!
//! Equal values are not merged. They are sent to the right subtree, so a
//! value that is inserted twice shows up twice in every traversal.
//!
//! # Examples
//!
//! ```
//! use textbook_bst::recursive::Tree;
//!
//! let tree: Tree<i64> = [20, 10, 30, 5, 15, 25, 35].into_iter().collect();
//!
//! assert!(tree.search(&25));
//! assert!(!tree.search(&99));
//!
//! assert_eq!(tree.min(), Some(&5));
//! assert_eq!(tree.max(), Some(&35));
//! assert_eq!(tree.height(), 2);
//!
//! let lca = tree.lca(&5, &15).map(|node| *node.value());
//! assert_eq!(lca, Some(10));
//! ```

use std::cmp;
use std::iter::Sum;
use std::mem;

use crate::traversal::{Iter, Order};

/// A single element of a [`Tree`]. A `Node` owns both of its subtrees.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one. Every value in it is
    /// strictly less than [`Node::value`].
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.root()
    }

    /// The root of the right subtree, if there is one. Every value in it is
    /// greater than or equal to [`Node::value`].
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.root()
    }
}

/// A Binary Search Tree. Values can be inserted and queried but never
/// removed.
#[derive(Clone, Debug)]
pub enum Tree<T> {
    /// A marker for the empty slot at the bottom of a subtree.
    Leaf,
    /// A [`Node`] holding a value and two subtrees.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unhook subtrees onto a heap stack so a degenerate tree doesn't
        // recurse once per level while dropping.
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut tree) = pending.pop() {
            tree.detach_children(&mut pending);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Inserts `value` and returns the (possibly new) root of the tree.
    ///
    /// Values smaller than a node go to its left, everything else, including
    /// equal values, goes to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::recursive::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(2);
    ///
    /// assert_eq!(tree.inorder(), vec![&1, &2, &2]);
    /// ```
    pub fn insert(mut self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match &mut self {
            Self::Leaf => Self::Node(Node::new(value)),
            Self::Node(n) => {
                let child = if value < n.value {
                    &mut n.left
                } else {
                    &mut n.right
                };
                **child = mem::take(&mut **child).insert(value);
                self
            }
        }
    }

    /// Returns whether `key` is stored anywhere in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::recursive::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &T) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => match key.cmp(&n.value) {
                cmp::Ordering::Less => n.left.search(key),
                cmp::Ordering::Equal => true,
                cmp::Ordering::Greater => n.right.search(key),
            },
        }
    }

    /// The smallest value in the tree, or `None` if it is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree, or `None` if it is empty. If the
    /// largest value was inserted more than once this is the copy inserted
    /// last.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// The number of edges on the longest path from the root to a leaf.
    /// A single node has height `0` and an empty tree has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::recursive::Tree;
    ///
    /// let tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// let tree = tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// let tree = tree.insert(2).insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        match self {
            Self::Leaf => -1,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    /// Finds the lowest common ancestor of `a` and `b`: the first node on
    /// the way down from the root whose value isn't strictly smaller or
    /// strictly larger than both of them.
    ///
    /// The answer is only meaningful when both values are in the tree. If
    /// either is missing the returned node is whichever one splits them, or
    /// `None` if the descent runs off the bottom of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::recursive::Tree;
    ///
    /// let tree: Tree<i64> = [20, 10, 30, 5, 15].into_iter().collect();
    ///
    /// assert_eq!(tree.lca(&5, &15).map(|n| *n.value()), Some(10));
    /// assert_eq!(tree.lca(&5, &30).map(|n| *n.value()), Some(20));
    /// assert!(Tree::<i64>::new().lca(&5, &15).is_none());
    /// ```
    pub fn lca(&self, a: &T, b: &T) -> Option<&Node<T>>
    where
        T: cmp::Ord,
    {
        let mut node = self.root()?;
        loop {
            node = if *a < node.value && *b < node.value {
                node.left()?
            } else if *a > node.value && *b > node.value {
                node.right()?
            } else {
                return Some(node);
            };
        }
    }

    /// The number of edges between the root and the shallowest node holding
    /// `key`, or `None` if `key` isn't in the tree.
    pub fn depth(&self, key: &T) -> Option<usize>
    where
        T: cmp::Ord,
    {
        let mut node = self.root()?;
        let mut depth = 0;
        loop {
            node = match key.cmp(&node.value) {
                cmp::Ordering::Less => node.left()?,
                cmp::Ordering::Equal => return Some(depth),
                cmp::Ordering::Greater => node.right()?,
            };
            depth += 1;
        }
    }

    /// The number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// The sum of every value in the tree.
    ///
    /// ## Panics
    ///
    /// Overflows the same way `Iterator::sum` does for `T`, so with debug
    /// assertions on this panics when the total doesn't fit. Fold over
    /// [`Tree::iter`] with a checked add if that can happen.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::recursive::Tree;
    ///
    /// let tree: Tree<i64> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.sum(), 6);
    /// ```
    pub fn sum<'a>(&'a self) -> T
    where
        T: Sum<&'a T>,
    {
        self.iter().sum()
    }

    /// Recursively walks the tree in the given [`Order`], handing each
    /// value to `visit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::recursive::Tree;
    /// use textbook_bst::traversal::Order;
    ///
    /// let tree: Tree<i64> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut line = String::new();
    /// tree.traverse(Order::Postorder, &mut |v| line.push_str(&format!("{} ", v)));
    /// assert_eq!(line, "1 3 2 ");
    /// ```
    pub fn traverse<'a, F>(&'a self, order: Order, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        if let Self::Node(n) = self {
            if order == Order::Preorder {
                visit(&n.value);
            }
            n.left.traverse(order, visit);
            if order == Order::Inorder {
                visit(&n.value);
            }
            n.right.traverse(order, visit);
            if order == Order::Postorder {
                visit(&n.value);
            }
        }
    }

    /// Collects the values visited by [`Tree::traverse`] in the given order.
    pub fn ordered(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::new();
        self.traverse(order, &mut |v| values.push(v));
        values
    }

    /// Values in left, root, right order. This is always sorted.
    pub fn inorder(&self) -> Vec<&T> {
        self.ordered(Order::Inorder)
    }

    /// Values in root, left, right order.
    pub fn preorder(&self) -> Vec<&T> {
        self.ordered(Order::Preorder)
    }

    /// Values in left, right, root order.
    pub fn postorder(&self) -> Vec<&T> {
        self.ordered(Order::Postorder)
    }

    /// Lazily iterates over the values in sorted order without recursing.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook_bst::recursive::Tree;
    ///
    /// let tree: Tree<i64> = [2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Moves this node's non-empty subtrees into `pending`, leaving leaves
    /// in their place.
    fn detach_children(&mut self, pending: &mut Vec<Tree<T>>) {
        if let Self::Node(n) = self {
            for child in [&mut n.left, &mut n.right] {
                if !child.is_empty() {
                    pending.push(mem::take(&mut **child));
                }
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: cmp::Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            *self = mem::take(self).insert(value);
        }
    }
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}
