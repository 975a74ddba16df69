use crate::avl_tree::node::Node;
use crate::avl_tree::tree;

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    pub(crate) current: tree::Tree<T>,
    pub(crate) stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    pub(crate) current: &'a tree::Tree<T>,
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}

/// An in-order iterator for `AvlSet<T>` that also reports balance factors.
///
/// Each item pairs a value with the balance factor of the node holding it.
pub struct AvlSetInorder<'a, T>
where
    T: 'a,
{
    pub(crate) current: &'a tree::Tree<T>,
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetInorder<'a, T>
where
    T: 'a,
{
    type Item = (&'a T, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            (&node.value, node.balance())
        })
    }
}

/// A pre-order iterator for `AvlSet<T>`.
///
/// Each node is yielded before its left subtree, which is yielded before its right subtree.
pub struct AvlSetPreorder<'a, T>
where
    T: 'a,
{
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetPreorder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            if let Some(ref right) = node.right {
                self.stack.push(right);
            }
            if let Some(ref left) = node.left {
                self.stack.push(left);
            }
            &node.value
        })
    }
}

/// A post-order iterator for `AvlSet<T>`.
///
/// Each node is yielded after both of its subtrees.
pub struct AvlSetPostorder<'a, T>
where
    T: 'a,
{
    // the flag is set once the children of the node have been pushed
    pub(crate) stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for AvlSetPostorder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            if let Some(ref right) = node.right {
                self.stack.push((&**right, false));
            }
            if let Some(ref left) = node.left {
                self.stack.push((&**left, false));
            }
        }
        None
    }
}
