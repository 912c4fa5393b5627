//! An unbalanced BST used as an ordered set. Every mutation consumes a
//! subtree and hands the rebuilt subtree back to its caller, who links it
//! into its own child slot. Nodes never know their parent.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! for key in vec![40, 20, 10, 30, 60, 50, 70] {
//!     tree.add(key);
//! }
//! assert_eq!(tree.in_order(), "10 20 30 40 50 60 70 ");
//! assert_eq!(tree.size(), 7);
//!
//! // Adding a key that's already there changes nothing.
//! assert!(!tree.add(40));
//! assert_eq!(tree.size(), 7);
//!
//! // Removing a node with two children promotes its predecessor.
//! assert!(tree.remove(&40));
//! assert!(!tree.has(&40));
//! assert_eq!(tree.pre_order(), "30 20 10 60 50 70 ");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// The order in which [`Tree::traversal`] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// The subtree root, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the subtree root, then the right subtree.
    /// Yields keys in ascending order.
    In,
    /// The left subtree, then the right subtree, then the subtree root.
    Post,
}

/// A Binary Search Tree holding a set of unique keys. It never rebalances
/// itself so its height depends entirely on the order keys were added in.
pub struct Tree<K> {
    root: Link<K>,
}

/// A child slot. Either empty or the exclusive owner of a subtree, so cloning
/// a `Link` copies every node beneath it.
#[derive(Clone)]
enum Link<K> {
    Leaf,
    Node(Box<Node<K>>),
}

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Copies every node so the new tree shares nothing with this one.
impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.root.visit(Order::In, &mut |key| {
            set.entry(key);
        });
        set.finish()
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.add(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: Link::Leaf }
    }

    /// Returns whether the tree contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert!(tree.has(&1));
    /// assert!(!tree.has(&42));
    /// ```
    pub fn has(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root.has(key)
    }

    /// Adds the key to the tree. Returns `false`, leaving the tree
    /// untouched, if the key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let (root, added) = mem::take(&mut self.root).add(key);
        self.root = root;
        added
    }

    /// Removes the key from the tree. Returns `false`, leaving the tree
    /// untouched, if the key wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (root, removed) = mem::take(&mut self.root).remove(key);
        self.root = root;
        removed
    }

    /// Returns whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        matches!(self.root, Link::Leaf)
    }

    /// Counts the keys in the tree.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Counts the nodes with no children.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Gets the number of levels in the tree. An empty tree has a height
    /// of 0 and a lone root has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The largest key in the tree, if there is one.
    pub fn max(&self) -> Option<&K> {
        match &self.root {
            Link::Leaf => None,
            Link::Node(n) => Some(n.max()),
        }
    }

    /// Drops every node, leaving an empty tree. Nodes are torn down with an
    /// explicit stack so a list-shaped tree doesn't recurse once per level.
    pub fn clear(&mut self) {
        let mut stack = vec![mem::take(&mut self.root)];
        while let Some(link) = stack.pop() {
            if let Link::Node(mut n) = link {
                stack.push(mem::take(&mut n.left));
                stack.push(mem::take(&mut n.right));
            }
        }
    }

    /// Renders every key in the given order, each followed by a single
    /// space. An empty tree renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{Order, Tree};
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traversal(Order::Pre), "2 1 3 ");
    /// assert_eq!(tree.traversal(Order::In), "1 2 3 ");
    /// assert_eq!(tree.traversal(Order::Post), "1 3 2 ");
    /// ```
    pub fn traversal(&self, order: Order) -> String
    where
        K: fmt::Display,
    {
        let mut rendered = String::new();
        self.root.visit(order, &mut |key| {
            rendered.push_str(&key.to_string());
            rendered.push(' ');
        });
        rendered
    }

    /// Renders the keys in ascending order. See [`Tree::traversal`].
    pub fn in_order(&self) -> String
    where
        K: fmt::Display,
    {
        self.traversal(Order::In)
    }

    /// Renders the keys root first. See [`Tree::traversal`].
    pub fn pre_order(&self) -> String
    where
        K: fmt::Display,
    {
        self.traversal(Order::Pre)
    }

    /// Renders the keys root last. See [`Tree::traversal`].
    pub fn post_order(&self) -> String
    where
        K: fmt::Display,
    {
        self.traversal(Order::Post)
    }
}

impl<K> Default for Link<K> {
    fn default() -> Self {
        Link::Leaf
    }
}

impl<K> Link<K> {
    fn has(&self, key: &K) -> bool
    where
        K: Ord,
    {
        match self {
            Link::Leaf => false,
            Link::Node(n) => match key.cmp(&n.key) {
                Ordering::Less => n.left.has(key),
                Ordering::Equal => true,
                Ordering::Greater => n.right.has(key),
            },
        }
    }

    /// Returns this subtree with the key added and whether it was new.
    fn add(self, key: K) -> (Self, bool)
    where
        K: Ord,
    {
        match self {
            Link::Leaf => (Link::Node(Box::new(Node::new(key))), true),
            Link::Node(mut n) => {
                let added = match key.cmp(&n.key) {
                    Ordering::Less => {
                        let (left, added) = mem::take(&mut n.left).add(key);
                        n.left = left;
                        added
                    }
                    Ordering::Equal => false,
                    Ordering::Greater => {
                        let (right, added) = mem::take(&mut n.right).add(key);
                        n.right = right;
                        added
                    }
                };
                (Link::Node(n), added)
            }
        }
    }

    /// Returns this subtree without the key and whether it was there.
    fn remove(self, key: &K) -> (Self, bool)
    where
        K: Ord,
    {
        let mut n = match self {
            Link::Leaf => return (Link::Leaf, false),
            Link::Node(n) => n,
        };

        match key.cmp(&n.key) {
            Ordering::Less => {
                let (left, removed) = mem::take(&mut n.left).remove(key);
                n.left = left;
                (Link::Node(n), removed)
            }
            Ordering::Greater => {
                let (right, removed) = mem::take(&mut n.right).remove(key);
                n.right = right;
                (Link::Node(n), removed)
            }
            Ordering::Equal => match (mem::take(&mut n.left), mem::take(&mut n.right)) {
                (Link::Leaf, Link::Leaf) => (Link::Leaf, true),
                (Link::Leaf, child) | (child, Link::Leaf) => (child, true),

                // With two children this node stays where it is and takes
                // its predecessor's key. That is, the largest key in its
                // left subtree, which can have at most a left child.
                (Link::Node(left), right) => {
                    let (predecessor, left) = left.remove_largest();
                    n.key = predecessor;
                    n.left = left;
                    n.right = right;
                    (Link::Node(n), true)
                }
            },
        }
    }

    fn size(&self) -> usize {
        match self {
            Link::Leaf => 0,
            Link::Node(n) => 1 + n.left.size() + n.right.size(),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Link::Leaf => 0,
            Link::Node(n) if n.is_leaf() => 1,
            Link::Node(n) => n.left.leaf_count() + n.right.leaf_count(),
        }
    }

    fn height(&self) -> usize {
        match self {
            Link::Leaf => 0,
            Link::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    fn visit<'a, F>(&'a self, order: Order, f: &mut F)
    where
        F: FnMut(&'a K),
    {
        if let Link::Node(n) = self {
            if order == Order::Pre {
                f(&n.key);
            }
            n.left.visit(order, f);
            if order == Order::In {
                f(&n.key);
            }
            n.right.visit(order, f);
            if order == Order::Post {
                f(&n.key);
            }
        }
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: Link::Leaf,
            right: Link::Leaf,
        }
    }

    fn is_leaf(&self) -> bool {
        matches!((&self.left, &self.right), (Link::Leaf, Link::Leaf))
    }

    fn max(&self) -> &K {
        match &self.right {
            Link::Leaf => &self.key,
            Link::Node(r) => r.max(),
        }
    }

    /// Returns the largest key in this subtree and the subtree without it.
    fn remove_largest(mut self: Box<Self>) -> (K, Link<K>) {
        match mem::take(&mut self.right) {
            Link::Leaf => {
                let Node { key, left, .. } = *self;
                (key, left)
            }
            Link::Node(r) => {
                let (largest, right) = r.remove_largest();
                self.right = right;
                (largest, Link::Node(self))
            }
        }
    }
}
