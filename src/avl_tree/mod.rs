//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Values must be totally ordered. An `Ord` implementation that is not a strict total order
//! (irreflexive, antisymmetric and transitive) leaves the shape of the tree unspecified.

mod iter;
mod node;
mod set;
mod tree;

pub use self::iter::{AvlSetInorder, AvlSetIntoIter, AvlSetIter, AvlSetPostorder, AvlSetPreorder};
pub use self::node::Node;
pub use self::set::{AvlSet, Structure};

use std::error;
use std::fmt;
use std::result;

/// Returns the height of a possibly absent node. An absent node has height 0.
///
/// # Examples
/// ```
/// use avl_set::avl_tree::{self, AvlSet};
///
/// let mut set = AvlSet::new();
/// assert_eq!(avl_tree::height(set.root()), 0);
///
/// set.insert(1);
/// set.insert(2);
/// assert_eq!(avl_tree::height(set.root()), 2);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, Node::height)
}

/// Returns the balance factor of a possibly absent node: the height of its left subtree minus
/// the height of its right subtree. An absent node has balance factor 0.
///
/// # Examples
/// ```
/// use avl_set::avl_tree::{self, AvlSet};
///
/// let mut set = AvlSet::new();
/// assert_eq!(avl_tree::balance_factor(set.root()), 0);
///
/// set.insert(2);
/// set.insert(1);
/// assert_eq!(avl_tree::balance_factor(set.root()), 1);
/// ```
pub fn balance_factor<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(0, Node::balance_factor)
}

/// An invariant violation found while validating an avl tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A value is not strictly between the values of its ancestors.
    Unordered,
    /// The heights of the two subtrees of a node differ by more than one.
    Unbalanced { balance: i32 },
    /// The memoized height of a node differs from the height of its subtree.
    StaleHeight { stored: usize, actual: usize },
    /// The number of stored values differs from the number of nodes.
    LengthMismatch { len: usize, count: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unordered => write!(f, "binary search tree order violated"),
            Error::Unbalanced { balance } => write!(f, "node has balance factor {}", balance),
            Error::StaleHeight { stored, actual } => {
                write!(f, "node stores height {} but has height {}", stored, actual)
            },
            Error::LengthMismatch { len, count } => {
                write!(f, "set reports {} values but holds {} nodes", len, count)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
