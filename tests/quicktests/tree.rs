use rooted_bst::{Error, Tree};

use std::collections::HashSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::{init_tracing, Op};

/// Applies `ops` to a fresh tree and to a list of the pairs the tree should hold.
fn do_ops(ops: &[Op<i8, i8>]) -> (Tree<i8, i8>, Vec<(i8, i8)>) {
    let mut tree = Tree::new();
    let mut model = Vec::new();
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                tree.insert(k, v);
                model.push((k, v));
            }
            Op::Remove(k) => match tree.remove(&k) {
                Ok(v) => {
                    let pos = model
                        .iter()
                        .position(|&pair| pair == (k, v))
                        .expect("removed a pair that was never inserted");
                    model.swap_remove(pos);
                }
                Err(e) => {
                    assert_eq!(e, Error::KeyNotFound);
                    assert!(model.iter().all(|&(mk, _)| mk != k));
                }
            },
        }
    }
    (tree, model)
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    init_tracing();
    let tree: Tree<_, _> = xs.iter().map(|&x| (x, x)).collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    let in_order: Vec<i8> = tree.dfs_in_order().into_iter().copied().collect();

    tree.is_bst() && in_order == sorted
}

#[quickcheck]
fn every_traversal_visits_every_value(xs: Vec<i8>) -> bool {
    let tree: Tree<_, _> = xs.iter().map(|&x| (x, x)).collect();

    let mut expected = xs;
    expected.sort_unstable();
    let sorted = |mut values: Vec<i8>| {
        values.sort_unstable();
        values
    };

    sorted(tree.dfs_pre_order().into_iter().copied().collect()) == expected
        && sorted(tree.bfs().into_iter().copied().collect()) == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.find(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == Err(Error::KeyNotFound))
}

#[quickcheck]
fn unique_keys_round_trip(pairs: Vec<(i8, u16)>) -> bool {
    let mut seen = HashSet::new();
    let pairs: Vec<_> = pairs.into_iter().filter(|(k, _)| seen.insert(*k)).collect();
    let tree: Tree<_, _> = pairs.iter().copied().collect();

    tree.len() == pairs.len() && pairs.iter().all(|(k, v)| tree.find(k) == Ok(v))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_tracing();
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete).is_ok() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_err())
        && still_present.iter().all(|x| tree.find(x).is_ok())
        && tree.len() == still_present.len()
        && tree.is_bst()
}

#[quickcheck]
fn random_operations_match_model(ops: Vec<Op<i8, i8>>) -> bool {
    init_tracing();
    let (tree, model) = do_ops(&ops);

    let mut keys: Vec<i8> = model.iter().map(|&(k, _)| k).collect();
    keys.sort_unstable();
    let in_order_len = tree.dfs_in_order().len();

    tree.len() == model.len()
        && in_order_len == keys.len()
        && tree.is_bst()
        && keys.iter().all(|k| tree.contains_key(k))
}

#[quickcheck]
fn root_keeps_its_id(ops: Vec<Op<i8, i8>>) -> bool {
    let root = Tree::<i8, i8>::new().root().id();
    let (tree, _) = do_ops(&ops);

    tree.root().id() == root && tree.root().parent().is_none()
}

#[quickcheck]
fn kth_largest_matches_sorted_values(xs: Vec<i8>, k: usize) -> TestResult {
    let tree: Tree<_, _> = xs.iter().map(|&x| (x, x)).collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    let k = k % (sorted.len() + 2);
    let result = tree.find_kth_largest_value(k);
    if k == 0 || k > sorted.len() {
        return TestResult::from_bool(
            result
                == Err(Error::OutOfRange {
                    k,
                    len: sorted.len(),
                }),
        );
    }
    TestResult::from_bool(result == Ok(&sorted[sorted.len() - k]))
}

#[quickcheck]
fn ascending_inserts_build_a_chain(n: u8) -> TestResult {
    if n == 0 {
        return TestResult::discard();
    }
    let tree: Tree<_, _> = (0..n).map(|x| (x, ())).collect();
    TestResult::from_bool(tree.height() == usize::from(n) - 1)
}
