//! A LIFO stack backed by a [`List`].

use std::fmt;

use crate::list::List;

/// A last-in, first-out stack. All operations are `O(1)`.
///
/// # Examples
///
/// ```
/// use int_bst::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert!(stack.is_empty());
/// ```
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Pushes `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.insert(value);
    }

    /// Peeks at the value on top of the stack.
    pub fn top(&self) -> Option<&T> {
        self.list.head()
    }

    /// Removes the value on top of the stack and returns it, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_head()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
