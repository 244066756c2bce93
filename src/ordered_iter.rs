use ::ordered_iter::OrderedMapIterator;
use super::tree::{IntoIter, Iter};

impl<K, V> OrderedMapIterator for IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}
