//! Binary search tree and its nodes

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A tree node holding one value and up to two children
///
/// Dropping a node unlinks its subtree iteratively.
pub struct Node {
    value: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Create a leaf
    pub fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Place `value` in the subtree rooted here.
    ///
    /// Returns false if the value is already present.
    pub fn insert(&mut self, value: i64) -> bool {
        let mut current = self;
        loop {
            let slot = match value.cmp(&current.value) {
                Ordering::Greater => &mut current.right,
                Ordering::Less => &mut current.left,
                Ordering::Equal => return false,
            };
            match slot {
                Some(child) => current = &mut **child,
                None => {
                    *slot = Some(Box::new(Node::new(value)));
                    return true;
                }
            }
        }
    }

    /// Whether `value` is stored in the subtree rooted here
    pub fn contains(&self, value: i64) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Greater => node.right(),
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl fmt::Debug for Node {
    // Children are shown by value only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Binary search tree with a running node count
///
/// Serializes as `{"size": n, "values": [...]}` with values in pre-order;
/// inserting them in that order rebuilds the same shape.
#[derive(Default)]
pub struct BinaryTree {
    root: Option<Box<Node>>,
    size: usize,
}

impl BinaryTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Insert a value, returning whether it was stored.
    ///
    /// Duplicates are discarded and do not change `size`.
    pub fn insert(&mut self, value: i64) -> bool {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };
        if inserted {
            self.size += 1;
        }
        inserted
    }

    pub fn contains(&self, value: i64) -> bool {
        self.root().is_some_and(|root| root.contains(value))
    }

    /// Values in ascending order
    pub fn in_order(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node> = Vec::new();
        let mut current = self.root();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            if let Some(node) = stack.pop() {
                values.push(node.value);
                current = node.right();
            }
        }
        values
    }

    /// Values in pre-order (node, left subtree, right subtree)
    pub fn pre_order(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            values.push(node.value);
            stack.extend(node.right());
            stack.extend(node.left());
        }
        values
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Smallest stored value
    pub fn min(&self) -> Option<i64> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value)
    }

    /// Largest stored value
    pub fn max(&self) -> Option<i64> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value)
    }
}

impl Extend<i64> for BinaryTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i64> for BinaryTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl fmt::Debug for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("size", &self.size)
            .field("values", &self.in_order())
            .finish()
    }
}

impl Serialize for BinaryTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BinaryTree", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("values", &self.pre_order())?;
        state.end()
    }
}
