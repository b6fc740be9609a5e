//! An unbalanced BST keyed by `i32`. Each node is exclusively owned by its parent's child slot
//! (or the tree's root slot). Removal tracks the slot holding the node it is unlinking instead of
//! keeping parent pointers in the nodes.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(1), None);
//! assert_eq!(tree.height(), -1);
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.get(1), Some(&"one"));
//!
//! // Inserting the same key again keeps both entries. Lookups find the older one.
//! tree.insert(1, "uno");
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.get(1), Some(&"one"));
//!
//! // Removing a node hands its value back.
//! assert_eq!(tree.remove(1), Some("one"));
//! assert_eq!(tree.get(1), Some(&"uno"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::Error;
use crate::stack::Stack;

type Link<V> = Option<Box<Node<V>>>;

/// A Binary Search Tree mapping `i32` keys to values of type `V`. Duplicate keys are allowed and
/// are stored to the right of the first node with that key.
///
/// The tree never looks inside a `V`. To leave payloads owned by the caller, store references or
/// handles (e.g. `Tree<&T>`): dropping the tree then only releases its nodes.
pub struct Tree<V> {
    root: Link<V>,
}

struct Node<V> {
    key: i32,
    value: V,
    left: Link<V>,
    right: Link<V>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for Tree<V> {
    // Detaches each node's children before the node itself is dropped so `Box::drop` never
    // recurses, however deep the tree is.
    fn drop(&mut self) {
        let mut released = 0usize;
        let mut pending = Stack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(mut node) = pending.pop() {
            for child in [node.left.take(), node.right.take()].into_iter().flatten() {
                pending.push(child);
            }
            released += 1;
        }
        tracing::trace!(released, "released tree");
    }
}

impl<V> fmt::Debug for Tree<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Extend<(i32, V)> for Tree<V> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (i32, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(i32, V)> for Tree<V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (i32, V)>,
    {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, V> IntoIterator for &'a Tree<V> {
    type Item = (i32, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Tree<V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes. Unlike [`Tree::len`] this is `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. The count isn't cached so this visits every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2, ());
    /// tree.insert(2, ());
    /// tree.insert(1, ());
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = Stack::new();
        push_node(&mut pending, self.root.as_deref());
        while let Some(node) = pending.pop() {
            count += 1;
            push_node(&mut pending, node.left.as_deref());
            push_node(&mut pending, node.right.as_deref());
        }
        count
    }

    /// The number of edges on the longest path from the root to a leaf. A tree with a single node
    /// has a height of `0` and an empty tree has a height of `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(2, ());
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted inserts build a chain.
    /// tree.insert(3, ());
    /// tree.insert(4, ());
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut pending = Stack::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 0));
        }
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    /// Potentially finds the value associated with the given key in this tree. If several nodes
    /// share the key, the one nearest the root (the earliest inserted) wins. If no node has the
    /// key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(1), Some(&2));
    /// assert_eq!(tree.get(42), None);
    /// ```
    pub fn get(&self, key: i32) -> Option<&V> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Inserts a new node holding `key` and `value`. Existing nodes are never overwritten: a key
    /// that is already present is routed to the right and stored again.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// tree.insert(1, 3);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get(1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: i32, value: V) {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        tracing::trace!(key, depth, "inserting node");
        *slot = Some(Box::new(Node::new(key, value)));
    }

    /// Removes the node nearest the root holding `key` and returns its value. If the tree does
    /// not contain the key, nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order successor (the smallest node of its
    /// right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(1), Some(2));
    /// assert_eq!(tree.get(1), None);
    ///
    /// // Missing keys are ignored.
    /// assert_eq!(tree.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: i32) -> Option<V> {
        let slot = Node::slot_of(&mut self.root, key);
        let mut node = slot.take()?;

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => {
                tracing::trace!(key, "removing leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                tracing::trace!(key, "removing node with one child");
                Some(child)
            }
            (Some(left), Some(right)) => {
                let mut rest = Some(right);
                let successor = Node::take_leftmost(&mut rest);
                tracing::trace!(
                    key,
                    successor = successor.as_ref().map(|s| s.key),
                    "removing node with two children"
                );
                successor.map(|mut successor| {
                    successor.left = Some(left);
                    successor.right = rest;
                    successor
                })
            }
        };

        if let Some(replacement) = slot.as_deref() {
            replacement.assert_ordered_children();
        }

        let Node { value, .. } = *node;
        Some(value)
    }

    /// Like [`Tree::remove`] but reports a missing key as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(7, "seven");
    ///
    /// assert_eq!(tree.try_remove(7), Ok("seven"));
    /// assert_eq!(tree.try_remove(7), Err(Error::KeyNotFound(7)));
    /// ```
    pub fn try_remove(&mut self, key: i32) -> Result<V, Error> {
        self.remove(key).ok_or(Error::KeyNotFound(key))
    }

    /// Sums every key `k` with `lower <= k <= upper`, counting duplicates once per node. Subtrees
    /// that can't hold keys in the range are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree: Tree<()> = [50, 30, 70, 20, 40].into_iter().map(|k| (k, ())).collect();
    ///
    /// assert_eq!(tree.range_sum(25, 50), 120);
    /// assert_eq!(tree.range_sum(71, 100), 0);
    /// ```
    pub fn range_sum(&self, lower: i32, upper: i32) -> i64 {
        let mut sum = 0;
        let mut pending = Stack::new();
        push_node(&mut pending, self.root.as_deref());
        while let Some(node) = pending.pop() {
            if node.key > upper {
                push_node(&mut pending, node.left.as_deref());
            } else if node.key < lower {
                push_node(&mut pending, node.right.as_deref());
            } else {
                sum += i64::from(node.key);
                push_node(&mut pending, node.left.as_deref());
                push_node(&mut pending, node.right.as_deref());
            }
        }
        sum
    }

    /// Iterates over the keys and values of the tree in key order. Duplicate keys come out in the
    /// order they were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree: Tree<char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// let entries: Vec<_> = tree.iter().collect();
    ///
    /// assert_eq!(entries, [(1, &'a'), (2, &'b'), (3, &'c')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref())
    }
}

fn push_node<'a, V>(pending: &mut Stack<&'a Node<V>>, node: Option<&'a Node<V>>) {
    if let Some(node) = node {
        pending.push(node);
    }
}

impl<V> Node<V> {
    fn new(key: i32, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Walks down from `slot` to the slot holding the first node with `key`, or to the empty slot
    /// where the search fell off the tree.
    fn slot_of(mut slot: &mut Link<V>, key: i32) -> &mut Link<V> {
        while let Some(ordering @ (Ordering::Less | Ordering::Greater)) =
            slot.as_deref().map(|node| key.cmp(&node.key))
        {
            if let Some(node) = slot {
                slot = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }
        slot
    }

    /// Unlinks the leftmost node below `slot`, moving its right subtree into the slot it leaves.
    fn take_leftmost(mut slot: &mut Link<V>) -> Link<V> {
        while slot.as_deref().map_or(false, |node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }
        let mut leftmost = slot.take()?;
        *slot = leftmost.right.take();
        Some(leftmost)
    }

    fn assert_ordered_children(&self) {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(left.key < self.key);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(right.key >= self.key);
            }
        }
    }
}

/// An in-order iterator over a [`Tree`], created by [`Tree::iter`]. It holds a stack of nodes
/// whose right subtrees are still to be visited.
pub struct Iter<'a, V> {
    pending: Stack<&'a Node<V>>,
}

impl<'a, V> Iter<'a, V> {
    fn new(root: Option<&'a Node<V>>) -> Self {
        let mut iter = Self {
            pending: Stack::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    /// Whether a call to `next` would yield another entry.
    pub fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<V>>) {
        while let Some(node) = link {
            self.pending.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i32, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.key, &node.value))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}
