//! A singly linked list. Both ends can be pushed to in `O(1)`, everything positional walks from
//! the head.
//!
//! # Examples
//!
//! ```
//! use bst_kit::linked_list::LinkedList;
//! use bst_kit::Error;
//!
//! let mut list: LinkedList<_> = [2, 3].into_iter().collect();
//! list.prepend(1);
//! list.append(5);
//! list.add(3, 4).unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! assert_eq!(list.element(), Some(&1));
//! assert_eq!(list.find_index(|x| *x == 4), Some(3));
//!
//! assert_eq!(list.remove(0), Ok(1));
//! assert_eq!(list.remove(9), Err(Error::IndexOutOfBounds { index: 9, len: 4 }));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

// Nodes are allocated with `Box::new` and leaked, so `head`, every `next` and `tail` are copies
// of the same pointer and none of them invalidates the others. They're reclaimed with
// `Box::from_raw` in `pop_front` and `remove`.
type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn leak(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

/// A singly linked list with a pointer to its last node for cheap appends.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // The list owns its `Node`s even though it only holds raw pointers to them.
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: The list owns its nodes outright, no pointer to them is shared with anything outside
// the list, so it is exactly as thread safe as the `T`s it holds.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: As above, `&LinkedList` only hands out `&T`.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first element of the list, without removing it.
    pub fn element(&self) -> Option<&T> {
        self.iter().next()
    }

    /// The element at `index`, or `None` if the list is too short.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// A mutable reference to the element at `index`, or `None` if the list is too short.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Puts `value` at the front of the list.
    pub fn prepend(&mut self, value: T) {
        let node = Node::leak(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Puts `value` at the end of the list.
    pub fn append(&mut self, value: T) {
        let node = Node::leak(value, None);

        match self.tail {
            // SAFETY: `tail` points at the last live node of this list. We hold `&mut self` so
            // nothing else is borrowing that node.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`, shifting everything after it
    /// back by one. `index` may be at most [`LinkedList::len`].
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` is past the end of the list.
    pub fn add(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len;
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == len {
            self.append(value);
            return Ok(());
        }

        let mut prev = self
            .node_at(index - 1)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        // SAFETY: `prev` is a live node of this list and we hold `&mut self`.
        let prev = unsafe { prev.as_mut() };
        prev.next = Some(Node::leak(value, prev.next));
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if there is no element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let out_of_bounds = Error::IndexOutOfBounds { index, len };
        if index >= len {
            return Err(out_of_bounds);
        }
        if index == 0 {
            return self.pop_front().ok_or(out_of_bounds);
        }

        let mut prev = self.node_at(index - 1).ok_or(out_of_bounds)?;
        // SAFETY: `prev` is a live node of this list and we hold `&mut self`.
        let prev_node = unsafe { prev.as_mut() };
        let removed = prev_node.next.ok_or(out_of_bounds)?;
        // SAFETY: `removed` was allocated by `Node::leak` and is unlinked right below, so it
        // can't be reclaimed twice.
        let removed = unsafe { Box::from_raw(removed.as_ptr()) };
        prev_node.next = removed.next;
        if removed.next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(removed.value)
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` was allocated by `Node::leak` and is unlinked right below, so it can't be
        // reclaimed twice.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// The first element matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(*value))
    }

    /// The position of the first element matching `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Iterates over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            marker: PhantomData,
        }
    }

    /// Iterates over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            marker: PhantomData,
        }
    }

    /// Walks `index` nodes down the chain from the head.
    fn node_at(&self, index: usize) -> Link<T> {
        let mut node = self.head?;
        for _ in 0..index {
            // SAFETY: Every `next` of a live node is either `None` or another live node.
            node = unsafe { node.as_ref().next }?;
        }
        Some(node)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Link<T>,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: The list is borrowed for `'a` so its nodes stay alive and unmodified.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}

/// Mutably borrowing iterator over a [`LinkedList`].
pub struct IterMut<'a, T> {
    next: Link<T>,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: The list is mutably borrowed for `'a` and every node is yielded at most
            // once, so the returned references never alias.
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            &mut node.value
        })
    }
}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
