//! A tree whose nodes own any number of children. Unlike [`crate::binary_tree`] there are no
//! parent links: every node is owned by exactly one parent (or by the [`GenericTree`]).
//!
//! # Examples
//!
//! ```
//! use bst_kit::generic_tree::{GenericTree, TreeNode};
//!
//! let mut root = TreeNode::new("root");
//! let mut child = TreeNode::new("child");
//! child.add_child(TreeNode::new("grandchild"));
//! root.add_child(child);
//! root.add_child(TreeNode::new("other child"));
//!
//! let mut tree = GenericTree::new();
//! assert_eq!(tree.depth(), 0);
//!
//! tree.set_root(root);
//! assert_eq!(tree.depth(), 3);
//! ```

use std::mem;

/// A node holding a value and an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<TreeNode<T>>,
}

impl<T> Drop for TreeNode<T> {
    // Deep trees would overflow the stack if every level dropped the next one recursively.
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<T> TreeNode<T> {
    /// Creates a node without children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// A mutable reference to the value stored in this node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Adds `node` after the existing children.
    pub fn add_child(&mut self, node: TreeNode<T>) {
        self.children.push(node);
    }

    /// Iterates over the direct children, in the order they were added.
    pub fn children(&self) -> std::slice::Iter<'_, TreeNode<T>> {
        self.children.iter()
    }

    /// The child at `index`.
    pub fn child(&self, index: usize) -> Option<&TreeNode<T>> {
        self.children.get(index)
    }

    /// A mutable reference to the child at `index`.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut TreeNode<T>> {
        self.children.get_mut(index)
    }

    /// Detaches and returns the child at `index`. Later children move up by one.
    pub fn remove_child(&mut self, index: usize) -> Option<TreeNode<T>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Detaches and returns the first child matching `predicate`.
    pub fn remove_child_where<P>(&mut self, predicate: P) -> Option<TreeNode<T>>
    where
        P: FnMut(&TreeNode<T>) -> bool,
    {
        let index = self.children.iter().position(predicate)?;
        Some(self.children.remove(index))
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// How many levels the subtree rooted here has. A node without children has a depth of 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}

impl<T> Extend<TreeNode<T>> for TreeNode<T> {
    fn extend<I: IntoIterator<Item = TreeNode<T>>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

/// A tree that is either empty or has a single root [`TreeNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTree<T> {
    root: Option<TreeNode<T>>,
}

impl<T> Default for GenericTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GenericTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Replaces the root, returning the previous one.
    pub fn set_root(&mut self, node: TreeNode<T>) -> Option<TreeNode<T>> {
        self.root.replace(node)
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    /// A mutable reference to the root node, if any.
    pub fn root_mut(&mut self) -> Option<&mut TreeNode<T>> {
        self.root.as_mut()
    }

    /// Removes the root, leaving the tree empty.
    pub fn take_root(&mut self) -> Option<TreeNode<T>> {
        self.root.take()
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has. An empty tree has a depth of 0.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::depth)
    }
}
