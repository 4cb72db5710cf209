//! Errors returned by the sequence based collections.
//!
//! The trees never fail: looking up or removing a missing value simply yields `None` or
//! `false`. Only the [`LinkedList`][crate::linked_list::LinkedList] and the adapters built on
//! it can be asked for something that isn't there.

/// The ways an operation on one of the list based collections can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A position was outside of the collection.
    #[error("index out of bounds: the index is {index} but the length is {len}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The length of the collection at the time of the request.
        len: usize,
    },
    /// An element was requested from an empty queue.
    #[error("no such element")]
    NoSuchElement,
    /// A value was popped from an empty stack.
    #[error("empty stack")]
    EmptyStack,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
