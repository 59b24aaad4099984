use crate::avl_tree::node::Node;
use crate::metrics::Metrics;
use std::cmp::Ordering;
use std::fmt;

pub type Link = Option<Box<Node>>;

pub fn height(tree: &Link) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

fn rotate_left(mut node: Box<Node>, metrics: &mut Metrics) -> Box<Node> {
    metrics.record_rotation();
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

fn rotate_right(mut node: Box<Node>, metrics: &mut Metrics) -> Box<Node> {
    metrics.record_rotation();
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

fn balance(tree: &mut Link, metrics: &mut Metrics) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        if let Some(child) = node.left.take() {
            // an inner (left-right) imbalance takes a double rotation
            if child.balance_factor() < 0 {
                node.left = Some(rotate_left(child, metrics));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node, metrics);
    } else if node.balance_factor() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance_factor() > 0 {
                node.right = Some(rotate_right(child, metrics));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node, metrics);
    }

    *tree = Some(node);
}

pub fn insert(tree: &mut Link, key: i32, metrics: &mut Metrics) {
    match tree {
        Some(node) => match metrics.compare(key, node.key) {
            Ordering::Less => insert(&mut node.left, key, metrics),
            // equal keys go right, so duplicates coexist
            Ordering::Greater | Ordering::Equal => insert(&mut node.right, key, metrics),
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return;
        },
    }

    balance(tree, metrics);
}

pub fn remove(tree: &mut Link, key: i32, metrics: &mut Metrics) {
    match tree {
        Some(node) => match metrics.compare(key, node.key) {
            Ordering::Less => remove(&mut node.left, key, metrics),
            Ordering::Greater => remove(&mut node.right, key, metrics),
            Ordering::Equal => {
                if node.left.is_some() {
                    // overwrite with the in-order predecessor and remove it from the left subtree
                    let predecessor = max_key(&node.left).expect("Expected a non-empty subtree.");
                    node.key = predecessor;
                    remove(&mut node.left, predecessor, metrics);
                } else if node.right.is_some() {
                    let successor = min_key(&node.right).expect("Expected a non-empty subtree.");
                    node.key = successor;
                    remove(&mut node.right, successor, metrics);
                } else {
                    *tree = None;
                    return;
                }
            },
        },
        None => return,
    }

    balance(tree, metrics);
}

pub fn get<'a>(tree: &'a Link, key: i32, metrics: &mut Metrics) -> Option<&'a Node> {
    match tree {
        None => None,
        Some(node) => match metrics.compare(key, node.key) {
            Ordering::Less => get(&node.left, key, metrics),
            Ordering::Greater => get(&node.right, key, metrics),
            Ordering::Equal => Some(node),
        },
    }
}

// the predecessor/successor walks follow child links only and are not counted
pub fn max_key(tree: &Link) -> Option<i32> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = &curr.right {
            curr = right_node;
        }
        curr.key
    })
}

pub fn min_key(tree: &Link) -> Option<i32> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = &curr.left {
            curr = left_node;
        }
        curr.key
    })
}

pub fn len(tree: &Link) -> usize {
    match tree {
        None => 0,
        Some(node) => len(&node.left) + len(&node.right) + 1,
    }
}

fn push_keys(tree: &Link, keys: &mut Vec<i32>) {
    if let Some(node) = tree {
        push_keys(&node.left, keys);
        keys.push(node.key);
        push_keys(&node.right, keys);
    }
}

fn key_or_dash(tree: &Link) -> String {
    match tree {
        None => String::from("-"),
        Some(node) => node.key.to_string(),
    }
}

fn fmt_subtree(tree: &Link, f: &mut fmt::Formatter) -> fmt::Result {
    if let Some(node) = tree {
        writeln!(
            f,
            "({}, {}, {})",
            node.key,
            key_or_dash(&node.left),
            key_or_dash(&node.right)
        )?;
        fmt_subtree(&node.left, f)?;
        fmt_subtree(&node.right, f)?;
    }
    Ok(())
}

/// An AVL tree over `i32` keys that counts the comparisons and rotations it performs.
///
/// The heights of the two child subtrees of any node differ by at most one after every
/// operation. Equal keys are routed into the right subtree on insertion, so duplicates coexist;
/// removing a key erases one occurrence at a time.
///
/// # Examples
/// ```
/// use balanced_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(3);
/// tree.insert(2);
/// tree.insert(1);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.rotations(), 1);
///
/// tree.remove(2);
/// assert!(!tree.contains(2));
/// ```
pub struct AvlTree {
    root: Link,
    metrics: Metrics,
}

impl AvlTree {
    /// Constructs a new, empty `AvlTree`.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            metrics: Metrics::new(),
        }
    }

    /// Inserts a key into the tree. An already present key is inserted again as a duplicate.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: i32) {
        insert(&mut self.root, key, &mut self.metrics);
    }

    /// Removes one occurrence of a key from the tree. Removing an absent key is a no-op.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.remove(1);
    /// tree.remove(1);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: i32) {
        remove(&mut self.root, key, &mut self.metrics);
    }

    /// Checks if a key exists in the tree, recording the comparisons made by the descent.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(0));
    /// ```
    pub fn contains(&mut self, key: i32) -> bool {
        get(&self.root, key, &mut self.metrics).is_some()
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single node.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        len(&self.root)
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes all nodes. The counters are not reset.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the minimum key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<i32> {
        min_key(&self.root)
    }

    /// Returns the maximum key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<i32> {
        max_key(&self.root)
    }

    /// Returns the keys of the tree in order. Duplicates appear once per occurrence.
    pub fn keys(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len());
        push_keys(&self.root, &mut keys);
        keys
    }

    /// Returns the number of key comparisons recorded since the last reset.
    pub fn comparisons(&self) -> u64 {
        self.metrics.comparisons()
    }

    /// Returns the number of single rotations recorded since the last reset. A double rotation
    /// counts as two.
    pub fn rotations(&self) -> u64 {
        self.metrics.rotations()
    }

    /// Zeroes the comparison and rotation counters.
    pub fn reset_counters(&mut self) {
        self.metrics.reset();
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes one line per node in pre-order as `(key, leftKey, rightKey)`, with `-` for an absent
/// child. An empty tree renders as the empty string.
impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_subtree(&self.root, f)
    }
}
