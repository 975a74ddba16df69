//! An ordered set backed by a height-balanced (AVL) binary search tree.

#[macro_use]
extern crate log;

pub mod avl_tree;

pub use crate::avl_tree::AvlSet;
