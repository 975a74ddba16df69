use crate::avl_tree::iter::{AvlSetInorder, AvlSetIntoIter, AvlSetIter, AvlSetPostorder, AvlSetPreorder};
use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::avl_tree::{Error, Result};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion restores the
/// invariant with at most two rotations, so the height of the tree stays logarithmic in the number
/// of values.
///
/// # Examples
/// ```
/// use avl_set::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(30);
/// set.insert(20);
/// set.insert(10);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.root().map(|node| *node.value()), Some(20));
///
/// assert_eq!(set.min(), Some(&10));
/// assert_eq!(set.ceil(&15), Some(&20));
/// assert_eq!(set.inorder().collect::<Vec<_>>(), vec![(&10, 0), (&20, 0), (&30, 0)]);
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the root node of the tree, or `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(10);
    /// set.insert(20);
    /// set.insert(30);
    ///
    /// let root = set.root().unwrap();
    /// assert_eq!(root.value(), &20);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(10));
    /// assert_eq!(root.right().map(|node| *node.value()), Some(30));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.tree.as_deref()
    }

    /// Returns the height of the tree. An empty set has height 0.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), 0);
    /// for value in 1..=7 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the balance factor of the root. An empty set has balance factor 0.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(50);
    /// set.insert(30);
    /// assert_eq!(set.balance_factor(), 1);
    /// set.insert(70);
    /// assert_eq!(set.balance_factor(), 0);
    /// ```
    pub fn balance_factor(&self) -> i32 {
        tree::balance(&self.tree)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns an in-order iterator over the set that pairs each value with the balance factor of
    /// its node. Values are yielded in strictly ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut iterator = set.inorder();
    /// assert_eq!(iterator.next(), Some((&1, 0)));
    /// assert_eq!(iterator.next(), Some((&2, 1)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn inorder(&self) -> AvlSetInorder<'_, T> {
        AvlSetInorder {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns an iterator that yields each value before the values of its subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for value in 1..=3 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.preorder().collect::<Vec<_>>(), vec![&2, &1, &3]);
    /// ```
    pub fn preorder(&self) -> AvlSetPreorder<'_, T> {
        AvlSetPreorder {
            stack: self.tree.iter().map(|node| &**node).collect(),
        }
    }

    /// Returns an iterator that yields each value after the values of its subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for value in 1..=3 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.postorder().collect::<Vec<_>>(), vec![&1, &3, &2]);
    /// ```
    pub fn postorder(&self) -> AvlSetPostorder<'_, T> {
        AvlSetPostorder {
            stack: self.tree.iter().map(|node| (&**node, false)).collect(),
        }
    }

    /// Returns a value that formats the shape of the tree, one node per line, indented by depth.
    /// Each line shows the value, the balance factor and the height of the node.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(
    ///     set.structure().to_string(),
    ///     "Root: 1 (bf=-1, h=2)\n    R: 2 (bf=0, h=1)\n",
    /// );
    /// ```
    pub fn structure(&self) -> Structure<'_, T> {
        Structure { tree: &self.tree }
    }

    /// Renders the shape of the tree. See `structure` for the layout.
    pub fn display_structure(&self) -> String
    where
        T: fmt::Debug,
    {
        self.structure().to_string()
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Inserts a value into the set. Returns `true` if the value was not already present.
    /// Inserting a value that is already present leaves the set unchanged.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match tree::insert(&mut self.tree, value) {
            Some(_) => {
                self.len += 1;
                true
            },
            None => {
                debug!("ignoring duplicate value");
                false
            },
        }
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.tree, value)
    }

    /// Returns a value in the set that is less than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        tree::floor(&self.tree, value)
    }

    /// Returns a value in the set that is greater than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        tree::ceil(&self.tree, value)
    }

    /// Checks that the tree is ordered, balanced and that every memoized height is current.
    /// Returns the first violation found.
    ///
    /// # Examples
    /// ```
    /// use avl_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..100).collect();
    /// assert_eq!(set.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()> {
        tree::validate(&self.tree, None, None)?;
        let count = self.iter().count();
        if count != self.len {
            return Err(Error::LengthMismatch { len: self.len, count });
        }
        Ok(())
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats the shape of an `AvlSet<T>`. Returned by `AvlSet::structure`.
pub struct Structure<'a, T>
where
    T: 'a,
{
    tree: &'a tree::Tree<T>,
}

impl<'a, T> fmt::Display for Structure<'a, T>
where
    T: 'a + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        tree::write_structure(self.tree, 0, "Root: ", f)
    }
}
