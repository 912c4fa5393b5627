use bst_set::Tree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Renders keys the same way the tree's traversals do.
fn render(keys: impl IntoIterator<Item = i8>) -> String {
    keys.into_iter().map(|k| format!("{} ", k)).collect()
}

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same keys, in the same order, in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        match *op {
            Op::Add(k) => {
                if tree.add(k) != set.insert(k) {
                    return false;
                }
            }
            Op::Remove(k) => {
                if tree.remove(&k) != set.remove(&k) {
                    return false;
                }
            }
            Op::Traverse => {
                if tree.in_order() != render(set.iter().copied()) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.size() == set.len()
        && set.iter().all(|k| tree.has(k))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let sorted: BTreeSet<_> = xs.into_iter().collect();

    tree.in_order() == render(sorted)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.has(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.has(x))
}

#[quickcheck]
fn adding_twice_is_adding_once(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let size = tree.size();
    let pre_order = tree.pre_order();

    xs.iter().all(|x| !tree.add(*x)) && tree.size() == size && tree.pre_order() == pre_order
}

#[quickcheck]
fn remove_shrinks_by_one(xs: Vec<i8>, key: i8) -> bool {
    let mut tree = build(&xs);
    let size = tree.size();
    let was_present = tree.has(&key);

    let removed = tree.remove(&key);
    let expected_size = if was_present { size - 1 } else { size };

    removed == was_present && !tree.has(&key) && tree.size() == expected_size
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have added the same value multiple times - drop each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.has(x)) && still_present.iter().all(|x| tree.has(x))
}

#[quickcheck]
fn leaf_and_height_bounds(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let size = tree.size();

    if tree.is_empty() {
        return size == 0 && tree.height() == 0 && tree.leaf_count() == 0;
    }

    tree.leaf_count() >= 1
        && tree.leaf_count() <= size
        && tree.height() >= 1
        && tree.height() <= size
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let original = build(&xs);
    let in_order = original.in_order();
    let pre_order = original.pre_order();

    let mut copy = original.clone();
    let mut set: BTreeSet<_> = xs.iter().copied().collect();
    let copy_ok = do_ops(&ops, &mut copy, &mut set);

    copy_ok
        && original.in_order() == in_order
        && original.pre_order() == pre_order
        && xs.iter().all(|x| original.has(x))
}

#[quickcheck]
fn traversals_are_repeatable(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.in_order() == tree.in_order()
        && tree.pre_order() == tree.pre_order()
        && tree.post_order() == tree.post_order()
}

#[quickcheck]
fn every_order_visits_every_key(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let sorted = |s: String| {
        let mut keys: Vec<i8> = s.split_whitespace().map(|k| k.parse().unwrap()).collect();
        keys.sort_unstable();
        keys
    };
    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    sorted(tree.pre_order()) == expected && sorted(tree.post_order()) == expected
}

#[quickcheck]
fn max_is_largest(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.max() == xs.iter().max()
}
