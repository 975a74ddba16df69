use crate::avl_tree::tree;
use std::cmp;

/// A node of an avl tree.
///
/// Nodes are only created by insertion and are exposed read-only for inspecting the shape of the
/// tree.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: usize,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub(crate) fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns the height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        self.balance()
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_new_leaf() {
        let node = Node::new(1);
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 0);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn test_update_left_heavy() {
        let mut node = Node::new(3);
        let mut child = Node::new(2);
        child.left = Some(Box::new(Node::new(1)));
        child.update();
        node.left = Some(Box::new(child));
        node.update();

        assert_eq!(node.height(), 3);
        assert_eq!(node.balance_factor(), 2);
    }

    #[test]
    fn test_update_right_heavy() {
        let mut node = Node::new(1);
        node.right = Some(Box::new(Node::new(2)));
        node.update();

        assert_eq!(node.height(), 2);
        assert_eq!(node.balance_factor(), -1);
    }
}
