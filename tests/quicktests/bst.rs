use bst_kit::binary_tree::NodeHandle;
use bst_kit::bst::BinarySearchTree;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logger, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

fn tree_of(xs: &[i8]) -> BinarySearchTree<i8> {
    let mut tree = BinarySearchTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Checks every parent/child pair from both ends.
fn links_are_consistent(tree: &BinarySearchTree<i8>) -> bool {
    let Some(root) = tree.root() else {
        return true;
    };
    if root.parent().is_some() {
        return false;
    }

    let is_parent = |child: &NodeHandle<i8>, node: &NodeHandle<i8>| {
        child.parent().map_or(false, |parent| parent.ptr_eq(node))
    };

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for child in node.left().into_iter().chain(node.right()) {
            if !is_parent(&child, &node) {
                return false;
            }
            stack.push(child);
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().eq(set.iter().copied())
        && tree.len() == set.len()
        && links_are_consistent(&tree)
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let values: Vec<i8> = tree.in_order().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let mut pre: Vec<i8> = tree.pre_order().collect();
    let mut post: Vec<i8> = tree.post_order().collect();
    pre.sort_unstable();
    post.sort_unstable();
    let in_order: Vec<i8> = tree.in_order().collect();

    pre == in_order && post == in_order && tree.pre_order().next() == tree.root().map(|r| *r.value())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter()
        .all(|x| tree.search(x).map_or(false, |node| *node.value() == *x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let before: Vec<i8> = tree.in_order().collect();
    let depth = tree.depth();

    let inserted_again = xs.iter().any(|x| tree.insert(*x));

    !inserted_again && tree.in_order().eq(before) && tree.depth() == depth
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logger();
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
        && links_are_consistent(&tree)
}

#[quickcheck]
fn removing_absent_values_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let xs: Vec<i8> = xs.into_iter().filter(|x| *x != absent).collect();
    let mut tree = tree_of(&xs);
    let before: Vec<i8> = tree.in_order().collect();
    let depth = tree.depth();

    !tree.remove(&absent) && tree.in_order().eq(before) && tree.depth() == depth
}
