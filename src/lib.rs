//! This crate exposes a Binary Search Tree whose nodes keep a link to their parent, the plain
//! binary tree it is built from, and a handful of small collections built on a singly linked list.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(depth)` where `depth` is the number of levels from
//! the root `Node` to the deepest leaf `Node`. The tree in [`bst`] doesn't rebalance itself so
//! inserting values in sorted order gives a tree as deep as it has values. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Sequences
//!
//! [`linked_list::LinkedList`] is the ordered sequence the [`stack`], [`queue`],
//! [`hash_table`] and [`string_builder`] modules are built on. Those are the only places that
//! can fail, see [`Error`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;
pub mod bst;
mod error;
pub mod generic_tree;
pub mod hash_table;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod string_builder;
mod util;

pub use error::{Error, Result};
