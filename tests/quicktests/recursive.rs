use textbook_bst::recursive::Tree;
use textbook_bst::traversal::Order;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// the tree always agrees with the simplest possible model of it.
fn do_ops(ops: &[Op<i8>], mut bst: Tree<i8>, model: &mut Vec<i8>) -> (Tree<i8>, bool) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                bst = bst.insert(k);
                let pos = model.partition_point(|&x| x <= k);
                model.insert(pos, k);
            }
            Op::Search(k) => {
                if bst.search(&k) != model.contains(&k) {
                    return (bst, false);
                }
            }
            Op::Check => {
                let agrees = bst.iter().eq(model.iter())
                    && bst.len() == model.len()
                    && bst.min() == model.first()
                    && bst.max() == model.last();
                if !agrees {
                    return (bst, false);
                }
            }
        }
    }

    (bst, true)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut model = Vec::new();

    let (tree, agreed) = do_ops(&ops, Tree::new(), &mut model);
    agreed && tree.inorder().into_iter().eq(model.iter())
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    tree.inorder().windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn iter_matches_inorder(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    tree.iter().collect::<Vec<_>>() == tree.inorder()
}

#[quickcheck]
fn traversals_visit_everything(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    Order::ALL.iter().all(|&order| {
        let mut visited: Vec<i8> = tree.ordered(order).into_iter().copied().collect();
        visited.sort_unstable();
        visited == sorted
    })
}

#[quickcheck]
fn preorder_starts_at_root(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    tree.preorder().first().copied() == xs.first()
        && tree.postorder().last().copied() == xs.first()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x) && tree.depth(x).is_none())
}

#[quickcheck]
fn min_max_are_inorder_ends(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let inorder = tree.inorder();

    tree.min() == inorder.first().copied() && tree.max() == inorder.last().copied()
}

#[quickcheck]
fn len_and_sum(xs: Vec<i8>) -> bool {
    let tree: Tree<i64> = xs.iter().map(|&x| i64::from(x)).collect();

    tree.len() == xs.len() && tree.sum() == xs.iter().map(|&x| i64::from(x)).sum::<i64>()
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let height = tree.height();

    if xs.is_empty() {
        return height == -1;
    }
    // Somewhere between perfectly balanced and a linked list.
    let len = xs.len() as isize;
    let balanced = (usize::BITS - xs.len().leading_zeros()) as isize - 1;
    balanced <= height && height < len
}

#[quickcheck]
fn depth_within_height(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| match tree.depth(x) {
        Some(depth) => (depth as isize) <= tree.height(),
        None => false,
    })
}

#[quickcheck]
fn lca_is_between(xs: Vec<i8>, i: usize, j: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let tree: Tree<i8> = xs.iter().copied().collect();
    let a = xs[i % xs.len()];
    let b = xs[j % xs.len()];
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    match tree.lca(&a, &b) {
        Some(node) => {
            let value = *node.value();
            let lca_depth = tree.depth(&value);
            lo <= value
                && value <= hi
                && lca_depth <= tree.depth(&a)
                && lca_depth <= tree.depth(&b)
        }
        None => false,
    }
}
