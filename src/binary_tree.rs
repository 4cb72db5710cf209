//! A plain binary tree: nodes with up to two owned children and a non-owning link back to their
//! parent. No ordering is imposed at this level, see [`crate::bst`] for that.
//!
//! Nodes are reached through [`NodeHandle`]s. A handle is a cheap, clonable reference to a node;
//! a node lives for as long as its parent (or the [`BinaryTree`] holding it as root) or any
//! handle still refers to it. Parent links are [`Weak`] so parent and child never keep each
//! other alive.
//!
//! # Examples
//!
//! ```
//! use bst_kit::binary_tree::{BinaryTree, NodeHandle};
//!
//! let root = NodeHandle::new(2);
//! root.set_left(NodeHandle::new(1));
//! root.set_right(NodeHandle::new(3));
//!
//! let mut tree = BinaryTree::new();
//! tree.set_root(root.clone());
//!
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(tree.pre_order().collect::<Vec<_>>(), [2, 1, 3]);
//! assert_eq!(tree.post_order().collect::<Vec<_>>(), [1, 3, 2]);
//!
//! let left = root.left().unwrap();
//! assert!(left.parent().unwrap().ptr_eq(&root));
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::rc::{Rc, Weak};

use crate::util::Side;

type Link<T> = Option<NodeHandle<T>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    parent: Weak<RefCell<Node<T>>>,
}

impl<T> Drop for Node<T> {
    // Dropping a long chain of nodes recursively would overflow the stack so children that are
    // about to die are unlinked and dropped one at a time.
    fn drop(&mut self) {
        let mut stack: Vec<NodeHandle<T>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(handle) = stack.pop() {
            // Someone else still holds this node so it (and its subtree) survives.
            if let Ok(cell) = Rc::try_unwrap(handle.0) {
                let mut node = cell.into_inner();
                stack.extend(node.left.take());
                stack.extend(node.right.take());
            }
        }
    }
}

/// A shared reference to a node of a binary tree.
///
/// Cloning a handle is cheap and yields another reference to the *same* node. Use
/// [`NodeHandle::ptr_eq`] to check whether two handles refer to the same node.
pub struct NodeHandle<T>(Rc<RefCell<Node<T>>>);

impl<T> Clone for NodeHandle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Pieces of a node's `Debug` output still to be written.
enum DebugStep<T> {
    Node(NodeHandle<T>),
    Child(Link<T>),
    Text(&'static str),
}

impl<T> fmt::Debug for NodeHandle<T>
where
    T: fmt::Debug,
{
    // Same text as a derived `Debug` on `Node { value, left, right }`, written with a stack so
    // deep trees don't overflow.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![DebugStep::Node(self.clone())];

        while let Some(step) = stack.pop() {
            match step {
                DebugStep::Node(node) => {
                    f.write_str("Node { value: ")?;
                    fmt::Debug::fmt(&*node.value(), f)?;
                    stack.push(DebugStep::Text(" }"));
                    stack.push(DebugStep::Child(node.right()));
                    stack.push(DebugStep::Text(", right: "));
                    stack.push(DebugStep::Child(node.left()));
                    stack.push(DebugStep::Text(", left: "));
                }
                DebugStep::Child(None) => f.write_str("None")?,
                DebugStep::Child(Some(child)) => {
                    f.write_str("Some(")?;
                    stack.push(DebugStep::Text(")"));
                    stack.push(DebugStep::Node(child));
                }
                DebugStep::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

impl<T> NodeHandle<T> {
    /// Creates a new node without children or parent.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Node {
            value,
            left: None,
            right: None,
            parent: Weak::new(),
        })))
    }

    /// Borrows the value stored in this node.
    ///
    /// ## Panics
    ///
    /// Relinking the node with [`NodeHandle::set_left`] or [`NodeHandle::set_right`] while the
    /// returned borrow is alive panics, so copy or clone the value out first when that's needed.
    /// [`BinarySearchTree::remove`](crate::bst::BinarySearchTree::remove) checks for live borrows
    /// instead of panicking.
    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |node| &node.value)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<Self> {
        self.child(Side::Left)
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<Self> {
        self.child(Side::Right)
    }

    /// The node holding this one as a child. `None` for roots and detached nodes.
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    /// Replaces the left child. A new child has its parent set to `self`.
    ///
    /// Passing `None` only clears the slot: the node previously stored there keeps pointing
    /// at `self` as its parent until it is attached somewhere else.
    pub fn set_left(&self, node: impl Into<Option<Self>>) {
        self.set_child(Side::Left, node.into());
    }

    /// Replaces the right child. See [`NodeHandle::set_left`].
    pub fn set_right(&self, node: impl Into<Option<Self>>) {
        self.set_child(Side::Right, node.into());
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = self.0.borrow();
        node.left.is_none() && node.right.is_none()
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// How many levels the subtree rooted at this node has. A leaf has a depth of 1.
    ///
    /// This is computed on every call and visits the whole subtree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.clone(), 1)];

        while let Some((handle, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = handle.0.borrow();
            for child in node.left.iter().chain(node.right.iter()) {
                stack.push((child.clone(), level + 1));
            }
        }

        deepest
    }

    /// Iterates over the values of this subtree: left subtree, this node, right subtree.
    pub fn in_order(&self) -> InOrder<T> {
        InOrder::new(Some(self.clone()))
    }

    /// Iterates over the values of this subtree: this node, left subtree, right subtree.
    pub fn pre_order(&self) -> PreOrder<T> {
        PreOrder::new(Some(self.clone()))
    }

    /// Iterates over the values of this subtree: left subtree, right subtree, this node.
    pub fn post_order(&self) -> PostOrder<T> {
        PostOrder::new(Some(self.clone()))
    }

    pub(crate) fn child(&self, side: Side) -> Option<Self> {
        let node = self.0.borrow();
        match side {
            Side::Left => node.left.clone(),
            Side::Right => node.right.clone(),
        }
    }

    pub(crate) fn set_child(&self, side: Side, child: Option<Self>) {
        if let Some(child) = &child {
            child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        }

        let old = {
            let mut node = self.0.borrow_mut();
            match side {
                Side::Left => mem::replace(&mut node.left, child),
                Side::Right => mem::replace(&mut node.right, child),
            }
        };
        // Released outside of the borrow in case this was the last reference.
        drop(old);
    }

    pub(crate) fn clear_parent(&self) {
        self.0.borrow_mut().parent = Weak::new();
    }

    /// Whether something (usually a [`NodeHandle::value`] borrow) would make relinking this node
    /// panic right now.
    pub(crate) fn is_borrowed(&self) -> bool {
        self.0.try_borrow_mut().is_err()
    }

    /// Drops the node's children and parent link. Returns `false`, leaving the node untouched,
    /// if it is currently borrowed.
    pub(crate) fn try_detach(&self) -> bool {
        let Ok(mut node) = self.0.try_borrow_mut() else {
            return false;
        };
        node.parent = Weak::new();
        let children = (node.left.take(), node.right.take());
        drop(node);
        // Released outside of the borrow in case these were the last references.
        drop(children);
        true
    }
}

/// A binary tree, which is nothing more than an optional root [`NodeHandle`].
pub struct BinaryTree<T> {
    root: Link<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("root", &self.root)
            .finish()
    }
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeHandle<T>> {
        self.root.clone()
    }

    /// Replaces the root. The new root's parent link is left as it is.
    pub fn set_root(&mut self, node: impl Into<Option<NodeHandle<T>>>) {
        self.root = node.into();
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has. An empty tree has a depth of 0.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, NodeHandle::depth)
    }

    /// Iterates over all values in in-order sequence.
    pub fn in_order(&self) -> InOrder<T> {
        InOrder::new(self.root())
    }

    /// Iterates over all values in pre-order sequence.
    pub fn pre_order(&self) -> PreOrder<T> {
        PreOrder::new(self.root())
    }

    /// Iterates over all values in post-order sequence.
    pub fn post_order(&self) -> PostOrder<T> {
        PostOrder::new(self.root())
    }
}

/// In-order iterator over the values of a subtree. Created by [`NodeHandle::in_order`] and
/// [`BinaryTree::in_order`].
///
/// The iterator only keeps the nodes it still has to come back to, so it is fine to stop
/// consuming it at any point. Once exhausted it keeps returning `None`.
pub struct InOrder<T> {
    stack: Vec<NodeHandle<T>>,
}

impl<T> InOrder<T> {
    fn new(root: Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut next: Link<T>) {
        while let Some(node) = next {
            next = node.left();
            self.stack.push(node);
        }
    }
}

impl<T: Clone> Iterator for InOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        let value = node.value().clone();
        Some(value)
    }
}

impl<T: Clone> FusedIterator for InOrder<T> {}

/// Pre-order iterator over the values of a subtree. Created by [`NodeHandle::pre_order`] and
/// [`BinaryTree::pre_order`].
pub struct PreOrder<T> {
    stack: Vec<NodeHandle<T>>,
}

impl<T> PreOrder<T> {
    fn new(root: Link<T>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<T: Clone> Iterator for PreOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that the left subtree comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        let value = node.value().clone();
        Some(value)
    }
}

impl<T: Clone> FusedIterator for PreOrder<T> {}

/// Post-order iterator over the values of a subtree. Created by [`NodeHandle::post_order`] and
/// [`BinaryTree::post_order`].
pub struct PostOrder<T> {
    /// Nodes still to visit, flagged with whether their children have already been queued.
    stack: Vec<(NodeHandle<T>, bool)>,
}

impl<T> PostOrder<T> {
    fn new(root: Link<T>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<T: Clone> Iterator for PostOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                let value = node.value().clone();
                return Some(value);
            }

            let left = node.left();
            let right = node.right();
            self.stack.push((node, true));
            self.stack.extend(right.map(|n| (n, false)));
            self.stack.extend(left.map(|n| (n, false)));
        }
    }
}

impl<T: Clone> FusedIterator for PostOrder<T> {}
