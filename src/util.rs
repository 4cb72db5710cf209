/// Which child slot of its parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// The node is its parent's left child.
    Left,
    /// The node is its parent's right child.
    Right,
}
