//! A last-in, first-out stack on top of [`LinkedList`]. The top of the stack is the head of the
//! list so pushing and popping are both `O(1)`.

use crate::error::{Error, Result};
use crate::linked_list::LinkedList;

/// A LIFO stack.
///
/// # Examples
///
/// ```
/// use bst_kit::stack::Stack;
/// use bst_kit::Error;
///
/// let mut stack: Stack<_> = [1, 2].into_iter().collect();
/// stack.push(3);
///
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(Error::EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// The top of the stack, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.element()
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.prepend(value);
    }

    /// Removes the top of the stack and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStack`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        self.list.pop_front().ok_or(Error::EmptyStack)
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }
}

/// Pushes the values in order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack() {
        let mut stack = Stack::<i32>::new();

        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
    }

    #[test]
    fn push_and_pop() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.peek(), Some(&1));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn zero_is_a_value_like_any_other() {
        let mut stack: Stack<_> = [0].into_iter().collect();

        assert!(!stack.is_empty());
        assert_eq!(stack.pop(), Ok(0));
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
    }
}
