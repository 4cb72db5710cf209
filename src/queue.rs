//! A first-in, first-out queue on top of [`LinkedList`]. Values are added at the tail and taken
//! from the head, both in `O(1)`.

use crate::error::{Error, Result};
use crate::linked_list::LinkedList;

/// A FIFO queue.
///
/// # Examples
///
/// ```
/// use bst_kit::queue::Queue;
/// use bst_kit::Error;
///
/// let mut queue: Queue<_> = [1, 2].into_iter().collect();
/// queue.add(3);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.remove(), Ok(1));
/// assert_eq!(queue.remove(), Ok(2));
/// assert_eq!(queue.remove(), Ok(3));
/// assert_eq!(queue.remove(), Err(Error::NoSuchElement));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// The front of the queue, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.element()
    }

    /// Puts `value` at the back of the queue.
    pub fn add(&mut self, value: T) {
        self.list.append(value);
    }

    /// Removes the front of the queue and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if the queue is empty.
    pub fn remove(&mut self) -> Result<T> {
        self.list.pop_front().ok_or(Error::NoSuchElement)
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The number of queued values.
    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}
