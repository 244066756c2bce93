//! An ordered map based on an AVL tree.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for &key in &[6, 2, 8, 1, 4, 3] { tree.insert(key, key); }
//!
//! assert_eq!(tree.iter().map(|e| *e.0).collect::<Vec<_>>(), [1, 2, 3, 4, 6, 8]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! ```

#![warn(missing_docs)]

pub mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use tree::{AvlTree, Traversal};
