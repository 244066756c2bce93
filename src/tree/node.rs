use compare::Compare;
use std::cmp::max;
use std::cmp::Ordering::*;
use std::mem::replace;
use tracing::trace;

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// Height of a subtree; an empty subtree has height `-1`.
pub fn height<K, V>(link: &Link<K, V>) -> isize {
    link.as_ref().map_or(-1, |node| node.height)
}

#[derive(Clone)]
pub struct Node<K, V> {
    pub left: Link<K, V>,
    pub right: Link<K, V>,
    pub height: isize,
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, height: 0, key: key, value: value }
    }

    fn fix_height(&mut self) {
        self.height = max(height(&self.left), height(&self.right)) + 1;
    }

    pub fn balance_factor(&self) -> isize { height(&self.right) - height(&self.left) }

    pub fn key_value(&self) -> (&K, &V) { (&self.key, &self.value) }
}

// The node's height is fixed before the child's, since the child's new height depends on it.
fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };

    trace!(from = node.height, "rotating left");
    node.right = child.left.take();
    node.fix_height();
    child.left = Some(node);
    child.fix_height();
    child
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };

    trace!(from = node.height, "rotating right");
    node.left = child.right.take();
    node.fix_height();
    child.right = Some(node);
    child.fix_height();
    child
}

fn fix_left_imbalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if let Some(child) = node.left.take() {
        node.left = Some(if height(&child.right) > height(&child.left) {
            trace!("left-right case");
            rotate_left(child)
        } else {
            child
        });
    }

    rotate_right(node)
}

fn fix_right_imbalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if let Some(child) = node.right.take() {
        node.right = Some(if height(&child.left) > height(&child.right) {
            trace!("right-left case");
            rotate_right(child)
        } else {
            child
        });
    }

    rotate_left(node)
}

/// Recomputes the node's height and restores the AVL invariant at it, returning the new
/// subtree root.
///
/// Both children must already be balanced and carry correct heights.
fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.fix_height();

    match node.balance_factor() {
        bf if bf < -1 => fix_left_imbalance(node),
        bf if bf > 1 => fix_right_imbalance(node),
        _ => node,
    }
}

/// Inserts the entry into the subtree, returning the new subtree root and the value
/// previously associated with the key, if any.
pub fn insert<K, V, C>(link: Link<K, V>, cmp: &C, key: K, value: V)
    -> (Box<Node<K, V>>, Option<V>) where C: Compare<K> {

    let mut node = match link {
        None => return (Box::new(Node::new(key, value)), None),
        Some(node) => node,
    };

    let old_value = match cmp.compare(&key, &node.key) {
        Equal => {
            let old_value = replace(&mut node.value, value);
            return (node, Some(old_value));
        }
        Less => {
            let (left, old_value) = insert(node.left.take(), cmp, key, value);
            node.left = Some(left);
            old_value
        }
        Greater => {
            let (right, old_value) = insert(node.right.take(), cmp, key, value);
            node.right = Some(right);
            old_value
        }
    };

    (rebalance(node), old_value)
}

/// Removes the entry whose key is equal to the given key from the subtree, returning the new
/// subtree root and the removed entry, if any.
pub fn remove<K, V, C, Q: ?Sized>(link: Link<K, V>, cmp: &C, key: &Q)
    -> (Link<K, V>, Option<(K, V)>) where C: Compare<Q, K> {

    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    let key_value = match cmp.compare(key, &node.key) {
        Equal => {
            let (link, key_value) = unlink(node);
            return (link, Some(key_value));
        }
        Less => {
            let (left, key_value) = remove(node.left.take(), cmp, key);
            node.left = left;
            key_value
        }
        Greater => {
            let (right, key_value) = remove(node.right.take(), cmp, key);
            node.right = right;
            key_value
        }
    };

    (Some(rebalance(node)), key_value)
}

// A node with two children takes over its in-order successor's entry; the successor itself is
// detached from the right subtree.
fn unlink<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    match (node.left.take(), node.right.take()) {
        (None, child) | (child, None) => {
            let node = *node;
            (child, (node.key, node.value))
        }
        (Some(left), Some(right)) => {
            let (right, (key, value)) = Left::remove_extremum(right);
            node.left = Some(left);
            node.right = right;
            let key_value = (replace(&mut node.key, key), replace(&mut node.value, value));
            (Some(rebalance(node)), key_value)
        }
    }
}

pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut Node<K, V>> where C: Compare<Q, K> {

    let node = link.as_deref_mut()?;

    match cmp.compare(key, &node.key) {
        Equal => Some(node),
        Less => get_mut(&mut node.left, cmp, key),
        Greater => get_mut(&mut node.right, cmp, key),
    }
}

/// Checks the cached heights of every node in the subtree against the AVL invariant.
pub fn is_balanced<K, V>(link: &Link<K, V>) -> bool {
    match *link {
        None => true,
        Some(ref node) =>
            node.balance_factor().abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right),
    }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;

    fn extremum<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
        let mut node = link.as_deref()?;
        while let Some(next) = Self::forward(node).as_deref() { node = next; }
        Some(node)
    }

    /// Detaches the subtree's extremum, returning the new subtree root and the extremum's
    /// entry.
    fn remove_extremum<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
        match Self::forward_mut(&mut *node).take() {
            Some(next) => {
                let (next, key_value) = Self::remove_extremum(next);
                *Self::forward_mut(&mut *node) = next;
                (Some(rebalance(node)), key_value)
            }
            None => {
                let rest = Self::Opposite::forward_mut(&mut *node).take();
                let node = *node;
                (rest, (node.key, node.value))
            }
        }
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
}
