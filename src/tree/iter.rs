use std::collections::VecDeque;
use self::visit::{Seen, Visit};
use super::node::{Link, Node};

/// An in-order iterator over a tree's entries, in ascending key order.
pub struct Iter<'a, K: 'a, V: 'a> {
    stack: Vec<&'a Node<K, V>>,
    size: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, size: usize) -> Self {
        let mut it = Iter { stack: vec![], size: size };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut link: &'a Link<K, V>) {
        while let Some(ref node) = *link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter { stack: self.stack.clone(), size: self.size } }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.size -= 1;
        Some(node.key_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// A pre-order iterator over a tree's entries: each node before its left subtree, the left
/// subtree before the right.
pub struct PreOrder<'a, K: 'a, V: 'a> {
    stack: Vec<&'a Node<K, V>>,
    size: usize,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, size: usize) -> Self {
        PreOrder { stack: root.as_deref().into_iter().collect(), size: size }
    }
}

impl<'a, K, V> Clone for PreOrder<'a, K, V> {
    fn clone(&self) -> Self { PreOrder { stack: self.stack.clone(), size: self.size } }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let node = self.stack.pop()?;
        if let Some(ref right) = node.right { self.stack.push(right); }
        if let Some(ref left) = node.left { self.stack.push(left); }
        self.size -= 1;
        Some(node.key_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> ExactSizeIterator for PreOrder<'a, K, V> {}

/// A post-order iterator over a tree's entries: both subtrees, left then right, before their
/// node.
pub struct PostOrder<'a, K: 'a, V: 'a> {
    visits: Vec<Visit<'a, K, V>>,
    size: usize,
}

impl<'a, K, V> PostOrder<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, size: usize) -> Self {
        PostOrder { visits: root.as_deref().into_iter().map(Visit::new).collect(), size: size }
    }
}

impl<'a, K, V> Clone for PostOrder<'a, K, V> {
    fn clone(&self) -> Self { PostOrder { visits: self.visits.clone(), size: self.size } }
}

enum Op<T> {
    Push(Option<T>),
    Pop,
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        loop {
            let op = match self.visits.last_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N => Op::Push(visit.left()),
                    Seen::L => Op::Push(visit.right()),
                    Seen::B => Op::Pop,
                },
            };

            match op {
                Op::Push(node) => if let Some(node) = node { self.visits.push(Visit::new(node)); },
                Op::Pop => {
                    self.size -= 1;
                    return self.visits.pop().map(Visit::item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> ExactSizeIterator for PostOrder<'a, K, V> {}

/// A breadth-first iterator over a tree's entries, visiting each level from left to right
/// before the next.
pub struct LevelOrder<'a, K: 'a, V: 'a> {
    queue: VecDeque<&'a Node<K, V>>,
    size: usize,
}

impl<'a, K, V> LevelOrder<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, size: usize) -> Self {
        LevelOrder { queue: root.as_deref().into_iter().collect(), size: size }
    }
}

impl<'a, K, V> Clone for LevelOrder<'a, K, V> {
    fn clone(&self) -> Self { LevelOrder { queue: self.queue.clone(), size: self.size } }
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.size -= 1;
        Some(node.key_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> ExactSizeIterator for LevelOrder<'a, K, V> {}

/// An owning in-order iterator over a tree's entries.
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    size: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(root: Link<K, V>, size: usize) -> Self {
        let mut it = IntoIter { stack: vec![], size: size };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let node = *self.stack.pop()?;
        self.push_left(node.right);
        self.size -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

mod visit {
    use super::super::node::Node;

    pub struct Visit<'a, K: 'a, V: 'a> {
        node: &'a Node<K, V>,
        seen: Seen,
    }

    impl<'a, K, V> Clone for Visit<'a, K, V> {
        fn clone(&self) -> Self { Visit { node: self.node, seen: self.seen } }
    }

    impl<'a, K, V> Visit<'a, K, V> {
        pub fn new(node: &'a Node<K, V>) -> Self { Visit { node: node, seen: Seen::N } }

        pub fn left(&mut self) -> Option<&'a Node<K, V>> {
            self.seen = Seen::L;
            self.node.left.as_deref()
        }

        pub fn right(&mut self) -> Option<&'a Node<K, V>> {
            self.seen = Seen::B;
            self.node.right.as_deref()
        }

        pub fn item(self) -> (&'a K, &'a V) { self.node.key_value() }

        pub fn seen(&self) -> Seen { self.seen }
    }

    /// Which of a node's children have been pushed: neither, the left, or both.
    #[derive(Clone, Copy)]
    pub enum Seen {
        N,
        L,
        B,
    }
}
