use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use std::cmp::max;
use super::node::Link;
use super::{AvlTree, Traversal};

/// An operation on an `AvlTree`.
#[derive(Clone, Debug)]
enum Op<K> where K: Clone + Ord {
    /// Insert a key into the tree.
    Insert(K),
    /// Remove the key at index `n % tree.len()` from the tree.
    Remove(usize),
    /// Remove a key that may or may not be in the tree.
    RemoveAny(K),
    /// Remove the tree's minimum or maximum.
    RemoveExtremum(bool),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Op<K> {
        match u8::arbitrary(gen) % 8 {
            0..=3 => Op::Insert(K::arbitrary(gen)),
            4 | 5 => Op::Remove(usize::arbitrary(gen)),
            6 => Op::RemoveAny(K::arbitrary(gen)),
            _ => Op::RemoveExtremum(bool::arbitrary(gen)),
        }
    }
}

impl<K> Op<K> where K: Clone + Ord {
    /// Perform the operation on the given tree.
    fn exec(self, tree: &mut AvlTree<K, ()>) {
        match self {
            Op::Insert(key) => { tree.insert(key, ()); }
            Op::Remove(index) => if !tree.is_empty() {
                let key = tree.iter().nth(index % tree.len()).unwrap().0.clone();
                tree.remove(&key);
            },
            Op::RemoveAny(key) => { tree.remove(&key); }
            Op::RemoveExtremum(min) => { if min { tree.remove_min(); } else { tree.remove_max(); } }
        }
    }
}

// Recomputes every height from scratch instead of trusting the cached ones, and checks the
// search order against the bounds inherited from the node's ancestors.
fn assert_avl_tree<K, V>(tree: &AvlTree<K, V>) where K: Ord {
    fn check<K, V>(link: &Link<K, V>, lo: Option<&K>, hi: Option<&K>) -> (isize, usize)
        where K: Ord {

        match *link {
            None => (-1, 0),
            Some(ref node) => {
                if let Some(lo) = lo { assert!(*lo < node.key); }
                if let Some(hi) = hi { assert!(node.key < *hi); }

                let (left_height, left_len) = check(&node.left, lo, Some(&node.key));
                let (right_height, right_len) = check(&node.right, Some(&node.key), hi);

                assert!((right_height - left_height).abs() <= 1);
                assert_eq!(node.height, max(left_height, right_height) + 1);
                (node.height, left_len + right_len + 1)
            }
        }
    }

    let (height, len) = check(&tree.root, None, None);
    assert_eq!(height, tree.height());
    assert_eq!(len, tree.len());
    assert!(tree.is_balanced());
}

fn keys<'a, K: 'a + Copy, V>(it: impl Iterator<Item=(&'a K, V)>) -> Vec<K> { it.map(|e| *e.0).collect() }

fn scenario_a() -> AvlTree<i32, i32> {
    let mut tree = AvlTree::new();
    for &key in &[6, 2, 8, 1, 4, 3] { tree.insert(key, key); }
    tree
}

#[test]
fn test_avl() {
    fn check(ops: Vec<Op<u8>>) -> TestResult {
        let mut tree = AvlTree::new();
        for op in ops {
            op.exec(&mut tree);
            assert_avl_tree(&tree);
        }
        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_height_bound() {
    fn check(keys: Vec<u16>) -> bool {
        let tree: AvlTree<_, _> = keys.into_iter().map(|k| (k, ())).collect();
        let bound = 1.44 * ((tree.len() + 2) as f64).log2() - 0.328;
        tree.height() as f64 <= bound
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_scenario_a() {
    let tree = scenario_a();
    assert_avl_tree(&tree);

    assert_eq!(keys(tree.iter()), [1, 2, 3, 4, 6, 8]);
    assert_eq!(keys(tree.pre_order()), [4, 2, 1, 3, 6, 8]);
    assert_eq!(keys(tree.post_order()), [1, 3, 2, 8, 6, 4]);
    assert_eq!(keys(tree.level_order()), [4, 2, 6, 1, 3, 8]);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
}

#[test]
fn test_scenarios_b_c() {
    let mut tree = scenario_a();

    tree.insert(0, 0);
    assert_eq!(tree.get(&0), Some(&0));
    assert_eq!(tree.remove(&0), Some((0, 0)));
    assert_eq!(tree.get(&0), None);
    tree.insert(0, 0);
    assert_eq!(tree.get(&0), Some(&0));
    assert_avl_tree(&tree);

    assert_eq!(tree.remove(&6), Some((6, 6)));
    assert_eq!(tree.get(&6), None);
    assert_eq!(keys(tree.iter()), [0, 1, 2, 3, 4, 8]);
    assert_eq!(keys(tree.pre_order()), [2, 1, 0, 4, 3, 8]);
    assert_eq!(tree.height(), 2);
    assert_avl_tree(&tree);
}

#[test]
fn test_remove_absent() {
    let mut tree = scenario_a();
    let before = keys(tree.pre_order());

    assert_eq!(tree.remove(&5), None);
    assert_eq!(tree.remove(&100), None);

    assert_eq!(keys(tree.pre_order()), before);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_empty() {
    let mut tree = AvlTree::<i32, i32>::new();

    assert_eq!(tree.height(), -1);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.get(&0), None);
    assert!(tree.is_balanced());
    assert_eq!(tree.level_order().next(), None);
    assert_eq!(tree.pre_order().next(), None);
    assert_eq!(tree.post_order().next(), None);
    assert_eq!(tree.remove(&0), None);
    assert_eq!(tree.remove_min(), None);
    assert_eq!(tree.remove_max(), None);
    assert_avl_tree(&tree);
}

#[test]
fn test_right_heavy() {
    let mut tree = AvlTree::new();
    for key in 1..4 { tree.insert(key, ()); }

    assert_eq!(keys(tree.pre_order()), [2, 1, 3]);
    assert_eq!(tree.height(), 1);
    assert_avl_tree(&tree);
}

#[test]
fn test_right_left() {
    let mut tree = AvlTree::new();
    for &key in &[1, 3, 2] { tree.insert(key, ()); }

    assert_eq!(keys(tree.pre_order()), [2, 1, 3]);
    assert_avl_tree(&tree);
}

#[test]
fn test_left_right() {
    let mut tree = AvlTree::new();
    for &key in &[3, 1, 2] { tree.insert(key, ()); }

    assert_eq!(keys(tree.pre_order()), [2, 1, 3]);
    assert_avl_tree(&tree);
}

#[test]
fn test_sequential() {
    let mut tree = AvlTree::new();
    for key in 1..1001 { tree.insert(key, key); }
    assert!(tree.height() <= 20);
    assert_avl_tree(&tree);

    let mut tree = AvlTree::new();
    for key in (1..1001).rev() { tree.insert(key, key); }
    assert!(tree.height() <= 20);
    assert_avl_tree(&tree);

    for key in (1..1001).filter(|k| k % 3 != 0) { assert_eq!(tree.remove(&key), Some((key, key))); }
    assert_eq!(tree.len(), 333);
    assert_avl_tree(&tree);
}

#[test]
fn test_overwrite() {
    let mut tree = scenario_a();
    let shape = keys(tree.pre_order());

    assert_eq!(tree.insert(4, 40), Some(4));
    assert_eq!(tree.get(&4), Some(&40));
    assert_eq!(tree.len(), 6);
    assert_eq!(keys(tree.pre_order()), shape);
    assert_avl_tree(&tree);
}

#[test]
fn test_traverse_agrees_with_iterators() {
    let tree = scenario_a();

    for (order, expected) in [
        (Traversal::PreOrder, keys(tree.pre_order())),
        (Traversal::InOrder, keys(tree.in_order())),
        (Traversal::PostOrder, keys(tree.post_order())),
        (Traversal::LevelOrder, keys(tree.level_order())),
    ] {
        let mut seen = vec![];
        tree.traverse(order, |k, _| seen.push(*k));
        assert_eq!(seen, expected);
    }
}
