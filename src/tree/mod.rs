//! An ordered map based on an AVL tree.

mod iter;
mod node;

#[cfg(test)]
mod test;

use compare::{Compare, Natural};
use self::node::{Dir, Left, Right};
use std::fmt::{self, Debug};
use std::ops;
use tracing::debug;

pub use self::iter::{IntoIter, Iter, LevelOrder, PostOrder, PreOrder};

/// An ordered map based on an AVL tree.
///
/// Every node's subtrees differ in height by at most one, which keeps the tree's height within
/// roughly `1.44 * log2(n + 2)` and all lookups, insertions and removals logarithmic.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct AvlTree<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

/// The order in which [`AvlTree::traverse`](struct.AvlTree.html#method.traverse) visits a
/// tree's entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Each node, then its left subtree, then its right subtree.
    PreOrder,
    /// Ascending key order.
    InOrder,
    /// Each node's left subtree, then its right subtree, then the node.
    PostOrder,
    /// Breadth-first, level by level from the root.
    LevelOrder,
}

impl<K, V> AvlTree<K, V> where K: Ord {
    /// Creates an empty tree ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { AvlTree::with_cmp(compare::natural()) }
}

impl<K, V, C> AvlTree<K, V, C> where C: Compare<K> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = AvlTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlTree { root: None, len: 0, cmp: cmp }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2, "b");
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2, "b");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.height(), -1);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the tree, returning the previous value, if any, associated
    /// with the key.
    ///
    /// An existing key keeps its node and the tree's shape is unchanged; only the value is
    /// replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.insert(1, "a"), None);
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// assert_eq!(tree.insert(1, "b"), Some("a"));
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, old_value) = node::insert(self.root.take(), &self.cmp, key, value);
        self.root = Some(root);
        if old_value.is_none() { self.len += 1; }
        old_value
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the tree does not contain the key.
    ///
    /// A node with two children is replaced by its in-order successor's entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.remove(&2), Some((2, "b")));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get(&2), None);
    /// assert_eq!(tree.remove(&2), None);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let (root, key_value) = node::remove(self.root.take(), &self.cmp, key);
        self.root = root;
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Checks if the tree contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert!(!tree.contains_key(&1));
    /// tree.insert(1, "a");
    /// assert!(tree.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.get(&1), None);
    /// tree.insert(1, "a");
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// tree.insert(1, "a");
    ///
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key).map(|node| &mut node.value)
    }

    /// Returns a reference to the tree's minimum key and a reference to its associated
    /// value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        Left::extremum(&self.root).map(|node| node.key_value())
    }

    /// Returns a reference to the tree's maximum key and a reference to its associated
    /// value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        Right::extremum(&self.root).map(|node| node.key_value())
    }

    /// Removes the tree's minimum key and returns it and its associated value, or `None` if
    /// the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.remove_min(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.remove_min(), Some((1, "a")));
    /// ```
    pub fn remove_min(&mut self) -> Option<(K, V)> { self.remove_extremum::<Left>() }

    /// Removes the tree's maximum key and returns it and its associated value, or `None` if
    /// the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.remove_max(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.remove_max(), Some((3, "c")));
    /// ```
    pub fn remove_max(&mut self) -> Option<(K, V)> { self.remove_extremum::<Right>() }

    fn remove_extremum<D>(&mut self) -> Option<(K, V)> where D: Dir {
        let root = self.root.take()?;
        let (root, key_value) = D::remove_extremum(root);
        self.root = root;
        self.len -= 1;
        Some(key_value)
    }

    /// Returns the height of the tree: `-1` when empty, `0` for a single entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// for i in 1..8 { tree.insert(i, ()); }
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize { node::height(&self.root) }

    /// Checks that every node's subtrees differ in height by at most one.
    ///
    /// This always holds; it is meant for verifying the tree, not for maintaining it.
    pub fn is_balanced(&self) -> bool { node::is_balanced(&self.root) }

    /// Returns an iterator over the tree's entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> { Iter::new(&self.root, self.len) }

    /// Returns an iterator over the tree's entries in ascending key order.
    ///
    /// This is the same as [`iter`](#method.iter).
    pub fn in_order(&self) -> Iter<'_, K, V> { self.iter() }

    /// Returns an iterator over the tree's entries in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// for i in 1..4 { tree.insert(i, ()); }
    ///
    /// let keys: Vec<_> = tree.pre_order().map(|e| *e.0).collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, K, V> { PreOrder::new(&self.root, self.len) }

    /// Returns an iterator over the tree's entries in post-order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// for i in 1..4 { tree.insert(i, ()); }
    ///
    /// let keys: Vec<_> = tree.post_order().map(|e| *e.0).collect();
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, K, V> { PostOrder::new(&self.root, self.len) }

    /// Returns an iterator over the tree's entries in breadth-first order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avltree::AvlTree::new();
    /// for i in 1..6 { tree.insert(i, ()); }
    ///
    /// let keys: Vec<_> = tree.level_order().map(|e| *e.0).collect();
    /// assert_eq!(keys, [2, 1, 4, 3, 5]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, K, V> { LevelOrder::new(&self.root, self.len) }

    /// Calls `f` on each of the tree's entries in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTree, Traversal};
    ///
    /// let tree: AvlTree<_, _> = vec![(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
    ///
    /// let mut out = String::new();
    /// tree.traverse(Traversal::PostOrder, |_, v| out.push_str(v));
    /// assert_eq!(out, "acb");
    /// ```
    pub fn traverse<F>(&self, order: Traversal, mut f: F) where F: FnMut(&K, &V) {
        match order {
            Traversal::PreOrder => self.pre_order().for_each(|(k, v)| f(k, v)),
            Traversal::InOrder => self.iter().for_each(|(k, v)| f(k, v)),
            Traversal::PostOrder => self.post_order().for_each(|(k, v)| f(k, v)),
            Traversal::LevelOrder => self.level_order().for_each(|(k, v)| f(k, v)),
        }
    }
}

impl<K, V, C> Debug for AvlTree<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for AvlTree<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { AvlTree::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for AvlTree<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for AvlTree<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut tree: Self = Default::default();
        tree.extend(it);
        tree
    }
}

impl<K, V, C, Q: ?Sized> ops::Index<&Q> for AvlTree<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;

    /// Returns the value associated with the given key.
    ///
    /// # Panics
    ///
    /// Panics if the tree does not contain the key.
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTree<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for AvlTree<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { IntoIter::new(self.root, self.len) }
}

impl<K, V, C> PartialEq for AvlTree<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().zip(other.iter()).all(|(l, r)| self.cmp.compares_eq(l.0, r.0) && l.1 == r.1)
    }
}

impl<K, V, C> Eq for AvlTree<K, V, C> where V: Eq, C: Compare<K> {}
