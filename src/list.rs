//! A singly linked list that only grows and shrinks at its head. This is the
//! storage behind [`Stack`][crate::Stack].
//!
//! # Examples
//!
//! ```
//! use int_bst::list::List;
//!
//! let mut list = List::new();
//! assert!(list.is_empty());
//!
//! list.insert(1);
//! list.insert(2);
//! assert_eq!(list.head(), Some(&2));
//!
//! assert_eq!(list.remove_head(), Some(2));
//! assert_eq!(list.remove_head(), Some(1));
//! assert_eq!(list.remove_head(), None);
//! ```

use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// A head-insertion singly linked list.
pub struct List<T> {
    head: Link<T>,
}

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    // Unlinks one node at a time so long lists don't recurse through `Box::drop`.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> fmt::Debug for List<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut link = self.head.as_deref();
        while let Some(node) = link {
            list.entry(&node.value);
            link = node.next.as_deref();
        }
        list.finish()
    }
}

impl<T> List<T> {
    /// Generate a new, empty `List`.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Pushes `value` onto the front of the list in `O(1)`.
    pub fn insert(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Peeks at the value at the front of the list.
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Unlinks the front of the list and hands its value back. Does nothing on an empty list.
    pub fn remove_head(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.value
        })
    }
}
