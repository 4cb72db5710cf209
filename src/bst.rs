//! An unbalanced Binary Search Tree built on top of [`BinaryTree`]. Every node knows its parent
//! so removal rewires pointers in place instead of rebuilding paths.
//!
//! # Examples
//!
//! ```
//! use bst_kit::bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! for value in [40, 20, 60, 10, 30, 50, 70] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [10, 20, 30, 40, 50, 60, 70]);
//! assert_eq!(tree.depth(), 3);
//!
//! // Inserting a value twice doesn't add a node.
//! assert!(!tree.insert(40));
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert!(tree.remove(&60));
//! let promoted = tree.root().unwrap().right().unwrap();
//! assert_eq!(*promoted.value(), 70);
//!
//! // Removing something that isn't there does nothing.
//! assert!(!tree.remove(&60));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::binary_tree::{BinaryTree, InOrder, NodeHandle, PostOrder, PreOrder};
use crate::util::Side;

/// A Binary Search Tree holding unique values. There is no rebalancing so the depth of the tree
/// depends entirely on insertion order.
///
/// Nodes handed out by [`BinarySearchTree::search`] and [`BinarySearchTree::root`] should be
/// treated as read-only. Relinking them by hand can break the ordering the tree relies on.
pub struct BinarySearchTree<T> {
    tree: BinaryTree<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len)
            .field("root", &self.tree.root())
            .finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
            len: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeHandle<T>> {
        self.tree.root()
    }

    /// How many levels the tree has. An empty tree has a depth of 0 and a tree with just a root
    /// has a depth of 1.
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Iterates over the values in ascending order.
    pub fn in_order(&self) -> InOrder<T> {
        self.tree.in_order()
    }

    /// Iterates over the values, each node before its subtrees.
    pub fn pre_order(&self) -> PreOrder<T> {
        self.tree.pre_order()
    }

    /// Iterates over the values, each node after its subtrees.
    pub fn post_order(&self) -> PostOrder<T> {
        self.tree.post_order()
    }

    /// The node holding the smallest value.
    pub fn min(&self) -> Option<NodeHandle<T>> {
        self.tree.root().map(|root| leftmost(&root))
    }

    /// The node holding the largest value.
    pub fn max(&self) -> Option<NodeHandle<T>> {
        let mut node = self.tree.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Finds the node holding `value`. Returns `None` if no node holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_kit::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(*tree.search(&1).unwrap().value(), 1);
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<NodeHandle<T>> {
        self.locate(value).map(|(node, _)| node)
    }

    /// Returns `true` if the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree untouched, if the value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_kit::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut node) = self.tree.root() else {
            log::debug!("BinarySearchTree::insert into empty tree");
            self.tree.set_root(NodeHandle::new(value));
            self.len = 1;
            return true;
        };

        loop {
            let ordering = value.cmp(&*node.value());
            let side = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Equal => return false,
                Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(child) => node = child,
                None => {
                    log::debug!("BinarySearchTree::insert new leaf on the {:?}", side);
                    node.set_child(side, Some(NodeHandle::new(value)));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Removes the node holding `value`. Returns `false` if no node holds it.
    ///
    /// A node with two children is replaced by its in-order successor, the left-most node of its
    /// right subtree. The removed node is unlinked from the tree entirely so any handle still
    /// pointing at it sees a node with no parent and no children.
    ///
    /// `value` may be borrowed from the node being removed (see the example). That node keeps its
    /// old links until the borrow is released, but the tree itself is fully updated. If any
    /// *other* node that has to be relinked is borrowed through [`NodeHandle::value`], nothing
    /// is changed and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_kit::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert!(tree.remove(&*tree.search(&2).unwrap().value()));
    /// assert_eq!(*tree.root().unwrap().value(), 3);
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let Some((node, side)) = self.locate(value) else {
            return false;
        };
        let parent = node.parent();
        let (left, right) = (node.left(), node.right());

        let successor = match (&left, &right) {
            (Some(_), Some(right)) => Some(leftmost(right)),
            _ => None,
        };
        // Set only when the successor sits deeper than the right child.
        let successor_parent = successor
            .as_ref()
            .filter(|successor| right.as_ref().map_or(true, |right| !successor.ptr_eq(right)))
            .and_then(NodeHandle::parent);

        let touched = [
            parent.clone(),
            left.clone(),
            right.clone(),
            successor.clone(),
            successor_parent.clone(),
            successor.as_ref().and_then(NodeHandle::right),
        ];
        if touched.iter().flatten().any(NodeHandle::is_borrowed) {
            log::warn!("BinarySearchTree::remove skipped, a node to relink is borrowed");
            return false;
        }

        let replacement = match (left, right, successor) {
            (Some(left), Some(right), Some(successor)) => {
                match successor_parent {
                    Some(successor_parent) => {
                        log::debug!("BinarySearchTree::remove splicing out a deep successor");
                        // The successor is the left child of its parent and has no left child of
                        // its own. Its right subtree takes its place.
                        successor_parent.set_left(successor.right());
                        successor.set_right(right);
                    }
                    None => log::debug!("BinarySearchTree::remove promoting right child"),
                }
                successor.set_left(left);
                Some(successor)
            }
            (Some(child), None, _) | (None, Some(child), _) => {
                log::debug!("BinarySearchTree::remove node with one child");
                Some(child)
            }
            _ => {
                log::debug!("BinarySearchTree::remove leaf");
                None
            }
        };

        match (parent, side) {
            (Some(parent), Some(side)) => parent.set_child(side, replacement),
            _ => {
                log::debug!("BinarySearchTree::remove replacing the root");
                if let Some(new_root) = &replacement {
                    new_root.clear_parent();
                }
                self.tree.set_root(replacement);
            }
        }

        if !node.try_detach() {
            log::debug!("BinarySearchTree::remove left a borrowed node's links in place");
        }
        self.len -= 1;
        true
    }

    /// Walks down from the root to the node holding `value`, also returning which slot of its
    /// parent it was found in (`None` for the root).
    fn locate(&self, value: &T) -> Option<(NodeHandle<T>, Option<Side>)> {
        let mut node = self.tree.root()?;
        let mut side = None;

        loop {
            let ordering = value.cmp(&*node.value());
            let next = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Some((node, side)),
                Ordering::Greater => Side::Right,
            };
            node = node.child(next)?;
            side = Some(next);
        }
    }
}

/// The left-most node of the subtree rooted at `node`.
fn leftmost<T>(node: &NodeHandle<T>) -> NodeHandle<T> {
    let mut node = node.clone();
    while let Some(left) = node.left() {
        node = left;
    }
    node
}
