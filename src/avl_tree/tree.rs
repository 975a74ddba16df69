use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result};
use std::cmp::{self, Ordering};
use std::fmt;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn balance<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

// the old root becomes a child of the new root, so its height is refreshed first
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `direction` is how the inserted value compared against the root of the child subtree it was
// inserted into. A child that was itself rotated has its height restored, so an ancestor can only
// be out of balance when the child was not rotated and `direction` still refers to its root.
fn rebalance<T>(mut node: Box<Node<T>>, direction: Ordering) -> Box<Node<T>> {
    let balance = node.balance();

    if balance > 1 && direction == Ordering::Less {
        node = rotate_right(node);
        trace!("left-left imbalance fixed, subtree height {}", node.height);
    } else if balance < -1 && direction == Ordering::Greater {
        node = rotate_left(node);
        trace!("right-right imbalance fixed, subtree height {}", node.height);
    } else if balance > 1 && direction == Ordering::Greater {
        node.left = node.left.take().map(rotate_left);
        node = rotate_right(node);
        trace!("left-right imbalance fixed, subtree height {}", node.height);
    } else if balance < -1 && direction == Ordering::Less {
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
        trace!("right-left imbalance fixed, subtree height {}", node.height);
    }

    node
}

/// Inserts `value` into the subtree, rebalancing on the way back up. Returns `None` if the value
/// was already present, otherwise how `value` compared against the root of `tree` before
/// rebalancing (`Equal` when the new node became the root).
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> Option<Ordering>
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return Some(Ordering::Equal);
        },
    };

    let ordering = value.cmp(&node.value);
    let direction = match ordering {
        Ordering::Less => insert(&mut node.left, value),
        Ordering::Greater => insert(&mut node.right, value),
        Ordering::Equal => None,
    };

    match direction {
        Some(direction) => {
            node.update();
            *tree = Some(rebalance(node, direction));
            Some(ordering)
        },
        None => {
            *tree = Some(node);
            None
        },
    }
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match value.cmp(&node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Greater => ceil(&node.right, value),
            Ordering::Less => {
                match ceil(&node.left, value) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Less => floor(&node.left, value),
            Ordering::Greater => {
                match floor(&node.right, value) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Checks every invariant of the subtree, whose values must lie strictly between `lower` and
/// `upper`. Returns the recomputed height of the subtree.
pub fn validate<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> Result<usize>
where
    T: Ord,
{
    let node = match tree {
        None => return Ok(0),
        Some(ref node) => node,
    };

    let below_lower = lower.map_or(false, |lower| node.value <= *lower);
    let above_upper = upper.map_or(false, |upper| node.value >= *upper);
    if below_lower || above_upper {
        return Err(Error::Unordered);
    }

    let left_height = validate(&node.left, lower, Some(&node.value))?;
    let right_height = validate(&node.right, Some(&node.value), upper)?;

    let actual = cmp::max(left_height, right_height) + 1;
    if node.height != actual {
        return Err(Error::StaleHeight { stored: node.height, actual });
    }

    let balance = left_height as i32 - right_height as i32;
    if balance.abs() > 1 {
        return Err(Error::Unbalanced { balance });
    }

    Ok(actual)
}

pub fn write_structure<T, W>(tree: &Tree<T>, depth: usize, label: &str, out: &mut W) -> fmt::Result
where
    T: fmt::Debug,
    W: fmt::Write,
{
    if let Some(ref node) = tree {
        writeln!(
            out,
            "{:indent$}{}{:?} (bf={}, h={})",
            "",
            label,
            node.value,
            node.balance(),
            node.height,
            indent = depth * 4,
        )?;
        write_structure(&node.left, depth + 1, "L: ", out)?;
        write_structure(&node.right, depth + 1, "R: ", out)?;
    }
    Ok(())
}
