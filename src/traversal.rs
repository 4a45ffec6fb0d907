//! Traversal orders and a non-recursive in-order iterator.

use std::fmt;

use crate::recursive::Node;

/// The order in which [`Tree::traverse`](crate::recursive::Tree::traverse)
/// visits a node relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields sorted values.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

impl Order {
    /// Every order, in the order they're usually listed.
    pub const ALL: [Order; 3] = [Order::Inorder, Order::Preorder, Order::Postorder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Inorder => "Inorder",
            Order::Preorder => "Preorder",
            Order::Postorder => "Postorder",
        };
        f.write_str(name)
    }
}

/// An in-order iterator over a tree's values.
///
/// Instead of recursing, it keeps the path of nodes whose values haven't
/// been yielded yet on a stack, so memory use is bounded by the tree's
/// height rather than the call stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}
