use crate::arena::{Arena, NodeId};
use crate::metrics::Metrics;
use crate::red_black_tree::node::{Color, Node};
use std::cmp;
use std::cmp::Ordering;
use std::fmt;

/// A red-black tree over `i32` keys that counts the comparisons and rotations it performs.
///
/// Nodes are stored in an arena and linked by id; the parent links make the bottom-up deletion
/// fix-up walk possible without recursion. Insertion splits 4-nodes proactively on the way down,
/// so the final attachment needs at most one restructuring. Equal keys are routed into the right
/// subtree on insertion, so duplicates coexist; removing a key erases one occurrence at a time.
///
/// # Examples
/// ```
/// use balanced_trees::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(10);
/// tree.insert(5);
/// tree.insert(1);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.rotations(), 1);
///
/// tree.remove(5);
/// assert!(!tree.contains(5));
/// ```
pub struct RedBlackTree {
    nodes: Arena<Node>,
    root: Option<NodeId>,
    metrics: Metrics,
}

impl RedBlackTree {
    /// Constructs a new, empty `RedBlackTree`.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackTree {
            nodes: Arena::new(),
            root: None,
            metrics: Metrics::new(),
        }
    }

    fn is_red(&self, tree: Option<NodeId>) -> bool {
        match tree {
            None => false,
            Some(id) => self.nodes[id].color == Color::Red,
        }
    }

    /// Promotes the right child of `id` into its position. Purely structural; colors are managed
    /// by the callers.
    fn rotate_left(&mut self, id: NodeId) {
        self.metrics.record_rotation();
        let child = self.nodes[id]
            .right
            .expect("Expected right child node to be `Some`.");
        let grandchild = self.nodes[child].left;

        self.nodes[id].right = grandchild;
        if let Some(grandchild) = grandchild {
            self.nodes[grandchild].parent = Some(id);
        }

        let parent = self.nodes[id].parent;
        self.nodes[child].parent = parent;
        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                if self.nodes[parent].left == Some(id) {
                    self.nodes[parent].left = Some(child);
                } else {
                    self.nodes[parent].right = Some(child);
                }
            },
        }

        self.nodes[child].left = Some(id);
        self.nodes[id].parent = Some(child);
    }

    /// Promotes the left child of `id` into its position.
    fn rotate_right(&mut self, id: NodeId) {
        self.metrics.record_rotation();
        let child = self.nodes[id]
            .left
            .expect("Expected left child node to be `Some`.");
        let grandchild = self.nodes[child].right;

        self.nodes[id].left = grandchild;
        if let Some(grandchild) = grandchild {
            self.nodes[grandchild].parent = Some(id);
        }

        let parent = self.nodes[id].parent;
        self.nodes[child].parent = parent;
        match parent {
            None => self.root = Some(child),
            Some(parent) => {
                if self.nodes[parent].left == Some(id) {
                    self.nodes[parent].left = Some(child);
                } else {
                    self.nodes[parent].right = Some(child);
                }
            },
        }

        self.nodes[child].right = Some(id);
        self.nodes[id].parent = Some(child);
    }

    /// Blackens a freshly promoted node and reddens both of its children, restoring black-height
    /// after an insertion restructure.
    fn recolor_after_restructure(&mut self, promoted: NodeId) {
        self.nodes[promoted].color = Color::Black;
        if let Some(child) = self.nodes[promoted].left {
            self.nodes[child].color = Color::Red;
        }
        if let Some(child) = self.nodes[promoted].right {
            self.nodes[child].color = Color::Red;
        }
    }

    /// Splits a 4-node before the insertion descent steps below `x`: if both children of `x` are
    /// red, the colors flip, and a resulting red-red violation with the parent of `x` is repaired
    /// immediately with one of the four rotation cases at the grandparent.
    fn split_four_node(&mut self, x: NodeId) {
        let (left, right) = match (self.nodes[x].left, self.nodes[x].right) {
            (Some(left), Some(right)) => (left, right),
            _ => return,
        };
        if self.nodes[left].color != Color::Red || self.nodes[right].color != Color::Red {
            return;
        }

        self.nodes[x].color = Color::Red;
        self.nodes[left].color = Color::Black;
        self.nodes[right].color = Color::Black;

        let parent = match self.nodes[x].parent {
            Some(parent) if self.nodes[parent].color == Color::Red => parent,
            _ => return,
        };
        // a red parent is never the root, so the grandparent exists
        let grandparent = self.nodes[parent]
            .parent
            .expect("Expected a red node to have a parent.");

        let promoted = if self.nodes[grandparent].left == Some(parent) {
            if self.nodes[parent].left == Some(x) {
                self.rotate_right(grandparent);
                parent
            } else {
                self.rotate_left(parent);
                self.rotate_right(grandparent);
                x
            }
        } else {
            if self.nodes[parent].right == Some(x) {
                self.rotate_left(grandparent);
                parent
            } else {
                self.rotate_right(parent);
                self.rotate_left(grandparent);
                x
            }
        };
        self.recolor_after_restructure(promoted);
    }

    fn attach(&mut self, parent: NodeId, key: i32, to_left: bool) -> NodeId {
        let node = self.nodes.allocate(Node::new(key));
        self.nodes[node].parent = Some(parent);
        if to_left {
            self.nodes[parent].left = Some(node);
        } else {
            self.nodes[parent].right = Some(node);
        }
        node
    }

    /// Repairs the red-red violation created by attaching the red `node` under a red `x`. The
    /// proactive splitting above guarantees the sibling slots involved are empty or black, so a
    /// single rotation case at the grandparent suffices.
    fn resolve_attach(&mut self, x: NodeId, node: NodeId) {
        if self.nodes[x].color != Color::Red {
            return;
        }
        let parent = self.nodes[x]
            .parent
            .expect("Expected a red node to have a parent.");

        let promoted = if self.nodes[parent].left == Some(x) {
            if self.nodes[x].left == Some(node) {
                self.rotate_right(parent);
                x
            } else {
                self.rotate_left(x);
                self.rotate_right(parent);
                node
            }
        } else {
            if self.nodes[x].right == Some(node) {
                self.rotate_left(parent);
                x
            } else {
                self.rotate_right(x);
                self.rotate_left(parent);
                node
            }
        };
        self.recolor_after_restructure(promoted);
    }

    /// Inserts a key into the tree. An already present key is inserted again as a duplicate.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: i32) {
        let mut x = match self.root {
            Some(root) => root,
            None => {
                let root = self.nodes.allocate(Node::new(key));
                self.nodes[root].color = Color::Black;
                self.root = Some(root);
                return;
            },
        };

        loop {
            if self.metrics.compare(key, self.nodes[x].key) == Ordering::Less {
                match self.nodes[x].left {
                    Some(_) => {
                        self.split_four_node(x);
                        // the split may have restructured below x, so re-read the child link
                        x = self.nodes[x]
                            .left
                            .expect("Expected left child node to be `Some`.");
                    },
                    None => {
                        let node = self.attach(x, key, true);
                        self.resolve_attach(x, node);
                        break;
                    },
                }
            } else {
                match self.nodes[x].right {
                    Some(_) => {
                        self.split_four_node(x);
                        x = self.nodes[x]
                            .right
                            .expect("Expected right child node to be `Some`.");
                    },
                    None => {
                        let node = self.attach(x, key, false);
                        self.resolve_attach(x, node);
                        break;
                    },
                }
            }
        }

        let root = self.root.expect("Expected a non-empty tree.");
        self.nodes[root].color = Color::Black;
    }

    /// Rewires `child` into the parent slot formerly occupied by `x`, updating the parent link
    /// and the parent's child pointer or the root reference.
    fn transplant(&mut self, x: NodeId, child: Option<NodeId>) {
        let parent = self.nodes[x].parent;
        match parent {
            None => self.root = child,
            Some(parent) => {
                if self.nodes[parent].left == Some(x) {
                    self.nodes[parent].left = child;
                } else {
                    self.nodes[parent].right = child;
                }
            },
        }
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
    }

    /// Removes one occurrence of a key from the tree. Removing an absent key is a no-op.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.remove(1);
    /// tree.remove(1);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: i32) {
        let mut x = match self.root {
            Some(root) => root,
            None => return,
        };

        loop {
            match self.metrics.compare(key, self.nodes[x].key) {
                Ordering::Equal => break,
                Ordering::Less => match self.nodes[x].left {
                    Some(left) => x = left,
                    None => return,
                },
                Ordering::Greater => match self.nodes[x].right {
                    Some(right) => x = right,
                    None => return,
                },
            }
        }

        self.remove_node(x);
    }

    fn remove_node(&mut self, x: NodeId) {
        let (color, child, parent) = if self.nodes[x].left.is_none() {
            let child = self.nodes[x].right;
            let parent = self.nodes[x].parent;
            let color = self.nodes[x].color;
            self.transplant(x, child);
            self.nodes.free(x);
            (color, child, parent)
        } else if self.nodes[x].right.is_none() {
            let child = self.nodes[x].left;
            let parent = self.nodes[x].parent;
            let color = self.nodes[x].color;
            self.transplant(x, child);
            self.nodes.free(x);
            (color, child, parent)
        } else {
            // two children: overwrite the key with the in-order successor's and splice the
            // successor out instead; the successor has no left child
            let mut successor = self.nodes[x]
                .right
                .expect("Expected right child node to be `Some`.");
            while let Some(left) = self.nodes[successor].left {
                successor = left;
            }
            let color = self.nodes[successor].color;
            let child = self.nodes[successor].right;
            let parent = self.nodes[successor].parent;
            self.nodes[x].key = self.nodes[successor].key;
            self.transplant(successor, child);
            self.nodes.free(successor);
            (color, child, parent)
        };

        // splicing out a black node leaves a black-height deficit at the splice point
        if color == Color::Black {
            self.remove_fixup(child, parent);
        }
    }

    /// Walks upward from the splice point while `x` carries a black-height deficit, borrowing
    /// blackness from siblings until the deficit is absorbed by a red node or the root.
    fn remove_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && !self.is_red(x) {
            let p = match parent {
                Some(p) => p,
                None => break,
            };

            if x == self.nodes[p].left {
                let mut sibling = self.nodes[p].right;

                if self.is_red(sibling) {
                    // red sibling: rotate it above the parent so the new sibling is black
                    let w = sibling.expect("Expected a red sibling to be `Some`.");
                    self.nodes[w].color = Color::Black;
                    self.nodes[p].color = Color::Red;
                    self.rotate_left(p);
                    sibling = self.nodes[p].right;
                }

                let w = match sibling {
                    Some(w) => w,
                    // no sibling to borrow blackness from
                    None => break,
                };

                if !self.is_red(self.nodes[w].left) && !self.is_red(self.nodes[w].right) {
                    self.nodes[w].color = Color::Red;
                    x = Some(p);
                    parent = self.nodes[p].parent;
                } else if !self.is_red(self.nodes[w].right) {
                    // near nephew red, far nephew black: rotate a red node into the far position
                    let near = self.nodes[w]
                        .left
                        .expect("Expected a red nephew to be `Some`.");
                    self.nodes[near].color = Color::Black;
                    self.nodes[w].color = Color::Red;
                    self.rotate_right(w);
                } else {
                    let far = self.nodes[w]
                        .right
                        .expect("Expected a red nephew to be `Some`.");
                    self.nodes[w].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    self.nodes[far].color = Color::Black;
                    self.rotate_left(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.nodes[p].left;

                if self.is_red(sibling) {
                    let w = sibling.expect("Expected a red sibling to be `Some`.");
                    self.nodes[w].color = Color::Black;
                    self.nodes[p].color = Color::Red;
                    self.rotate_right(p);
                    sibling = self.nodes[p].left;
                }

                let w = match sibling {
                    Some(w) => w,
                    None => break,
                };

                if !self.is_red(self.nodes[w].right) && !self.is_red(self.nodes[w].left) {
                    self.nodes[w].color = Color::Red;
                    x = Some(p);
                    parent = self.nodes[p].parent;
                } else if !self.is_red(self.nodes[w].left) {
                    let near = self.nodes[w]
                        .right
                        .expect("Expected a red nephew to be `Some`.");
                    self.nodes[near].color = Color::Black;
                    self.nodes[w].color = Color::Red;
                    self.rotate_left(w);
                } else {
                    let far = self.nodes[w]
                        .left
                        .expect("Expected a red nephew to be `Some`.");
                    self.nodes[w].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    self.nodes[far].color = Color::Black;
                    self.rotate_right(p);
                    x = self.root;
                    parent = None;
                }
            }
        }

        if let Some(x) = x {
            self.nodes[x].color = Color::Black;
        }
    }

    /// Checks if a key exists in the tree, recording the comparisons made by the descent.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(0));
    /// ```
    pub fn contains(&mut self, key: i32) -> bool {
        let mut curr = self.root;
        while let Some(id) = curr {
            match self.metrics.compare(key, self.nodes[id].key) {
                Ordering::Equal => return true,
                Ordering::Less => curr = self.nodes[id].left,
                Ordering::Greater => curr = self.nodes[id].right,
            }
        }
        false
    }

    fn subtree_height(&self, tree: Option<NodeId>) -> i32 {
        match tree {
            None => -1,
            Some(id) => {
                1 + cmp::max(
                    self.subtree_height(self.nodes[id].left),
                    self.subtree_height(self.nodes[id].right),
                )
            },
        }
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single node.
    ///
    /// # Examples
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        self.subtree_height(self.root)
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes all nodes. The counters are not reset.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the minimum key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<i32> {
        self.root.map(|mut curr| {
            while let Some(left) = self.nodes[curr].left {
                curr = left;
            }
            self.nodes[curr].key
        })
    }

    /// Returns the maximum key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<i32> {
        self.root.map(|mut curr| {
            while let Some(right) = self.nodes[curr].right {
                curr = right;
            }
            self.nodes[curr].key
        })
    }

    fn push_keys(&self, tree: Option<NodeId>, keys: &mut Vec<i32>) {
        if let Some(id) = tree {
            self.push_keys(self.nodes[id].left, keys);
            keys.push(self.nodes[id].key);
            self.push_keys(self.nodes[id].right, keys);
        }
    }

    /// Returns the keys of the tree in order. Duplicates appear once per occurrence.
    pub fn keys(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len());
        self.push_keys(self.root, &mut keys);
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

    fn key_or_dash(&self, tree: Option<NodeId>) -> String {
        match tree {
            None => String::from("-"),
            Some(id) => self.nodes[id].key.to_string(),
        }
    }

    fn fmt_subtree(&self, tree: Option<NodeId>, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(id) = tree {
            let node = &self.nodes[id];
            let color = match node.color {
                Color::Red => "R",
                Color::Black => "B",
            };
            write!(
                f,
                "({}, {}, {}, {})",
                node.key,
                color,
                self.key_or_dash(node.left),
                self.key_or_dash(node.right)
            )?;
            match node.parent {
                None => writeln!(f, " (root)")?,
                Some(parent) => writeln!(f, " ({})", self.nodes[parent].key)?,
            }
            self.fmt_subtree(node.left, f)?;
            self.fmt_subtree(node.right, f)?;
        }
        Ok(())
    }
}

impl Default for RedBlackTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes one line per node in pre-order as `(key, R|B, leftKey, rightKey) (parentKey)`, with
/// `-` for an absent child and `root` in place of the root's parent key. An empty tree renders
/// as the empty string.
impl fmt::Display for RedBlackTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_subtree(self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use crate::arena::NodeId;
    use crate::red_black_tree::node::Color;
    use rand::Rng;

    // asserts the color invariants, parent-link consistency, and equal black-heights; returns
    // the black-height of the subtree counting the absent-child positions as one
    fn black_height(tree: &RedBlackTree, node: Option<NodeId>, parent: Option<NodeId>) -> usize {
        match node {
            None => 1,
            Some(id) => {
                let n = &tree.nodes[id];
                assert_eq!(n.parent, parent);
                if n.color == Color::Red {
                    assert!(!tree.is_red(n.left));
                    assert!(!tree.is_red(n.right));
                }
                let left = black_height(tree, n.left, Some(id));
                let right = black_height(tree, n.right, Some(id));
                assert_eq!(left, right);
                left + (n.color == Color::Black) as usize
            },
        }
    }

    fn audit(tree: &RedBlackTree) {
        assert!(!tree.is_red(tree.root));
        black_height(tree, tree.root, None);
    }

    fn node_key(tree: &RedBlackTree, node: Option<NodeId>) -> i32 {
        tree.nodes[node.unwrap()].key
    }

    #[test]
    fn test_empty_tree() {
        let mut tree = RedBlackTree::new();
        assert!(!tree.contains(42));
        tree.remove(42);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_insert_restructures_at_attachment() {
        let mut tree = RedBlackTree::new();
        tree.insert(10);
        tree.insert(5);
        tree.insert(1);

        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 5);
        assert_eq!(tree.nodes[root].color, Color::Black);
        assert_eq!(node_key(&tree, tree.nodes[root].left), 1);
        assert!(tree.is_red(tree.nodes[root].left));
        assert_eq!(node_key(&tree, tree.nodes[root].right), 10);
        assert!(tree.is_red(tree.nodes[root].right));
        assert_eq!(tree.rotations(), 1);
        audit(&tree);
    }

    #[test]
    fn test_insert_splits_four_node_on_descent() {
        let mut tree = RedBlackTree::new();
        for key in &[20, 10, 30, 40] {
            tree.insert(*key);
        }

        // descending towards 40 split the (10, 20, 30) 4-node without a rotation
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 20);
        assert!(!tree.is_red(tree.nodes[root].left));
        assert!(!tree.is_red(tree.nodes[root].right));
        assert!(tree.is_red(tree.nodes[tree.nodes[root].right.unwrap()].right));
        assert_eq!(tree.rotations(), 0);
        audit(&tree);
    }

    #[test]
    fn test_remove_black_leaf_borrows_from_sibling() {
        let mut tree = RedBlackTree::new();
        for key in &[20, 10, 30, 40, 25] {
            tree.insert(*key);
        }
        tree.reset_counters();

        tree.remove(10);

        // the sibling 30 absorbed the parent's color and rotated into its position
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 30);
        assert_eq!(tree.nodes[root].color, Color::Black);
        let left = tree.nodes[root].left.unwrap();
        assert_eq!(tree.nodes[left].key, 20);
        assert_eq!(tree.nodes[left].color, Color::Black);
        assert_eq!(node_key(&tree, tree.nodes[left].right), 25);
        assert!(tree.is_red(tree.nodes[left].right));
        assert_eq!(node_key(&tree, tree.nodes[root].right), 40);
        assert_eq!(tree.rotations(), 1);
        audit(&tree);
    }

    #[test]
    fn test_remove_interior_promotes_successor() {
        let mut tree = RedBlackTree::new();
        for key in &[20, 10, 30, 40, 25] {
            tree.insert(*key);
        }

        tree.remove(20);

        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 25);
        assert_eq!(tree.keys(), vec![10, 25, 30, 40]);
        assert_eq!(tree.len(), 4);
        audit(&tree);
    }

    #[test]
    fn test_remove_root_of_single_node_tree() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        tree.remove(1);

        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tree = RedBlackTree::new();
        for key in &[5, 3, 8, 1, 4] {
            tree.insert(*key);
        }
        let keys = tree.keys();
        let height = tree.height();

        tree.remove(7);

        assert_eq!(tree.keys(), keys);
        assert_eq!(tree.height(), height);
        audit(&tree);
    }

    #[test]
    fn test_duplicate_keys_coexist() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        tree.insert(1);
        tree.insert(1);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.keys(), vec![1, 1, 1]);
        audit(&tree);

        tree.remove(1);
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(1));
    }

    #[test]
    fn test_keys_sorted_after_random_inserts() {
        let mut rng = rand::thread_rng();
        let mut tree = RedBlackTree::new();
        for _ in 0..1000 {
            tree.insert(rng.gen_range(-500, 500));
        }

        let keys = tree.keys();
        assert_eq!(keys.len(), 1000);
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
        audit(&tree);
    }

    #[test]
    fn test_color_invariants_under_interleaved_operations() {
        let mut rng = rand::thread_rng();
        let mut tree = RedBlackTree::new();
        for _ in 0..2000 {
            let key = rng.gen_range(-200, 200);
            if rng.gen::<bool>() {
                tree.insert(key);
            } else {
                tree.remove(key);
            }
            audit(&tree);
        }
    }

    #[test]
    fn test_clear() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_reset_counters() {
        let mut tree = RedBlackTree::new();
        tree.insert(10);
        tree.insert(5);
        tree.insert(1);
        assert!(tree.comparisons() > 0);
        assert!(tree.rotations() > 0);

        tree.reset_counters();
        assert_eq!(tree.comparisons(), 0);
        assert_eq!(tree.rotations(), 0);
    }

    #[test]
    fn test_display_format() {
        let mut tree = RedBlackTree::new();
        tree.insert(10);
        tree.insert(5);
        tree.insert(1);

        assert_eq!(
            tree.to_string(),
            "(5, B, 1, 10) (root)\n(1, R, -, -) (5)\n(10, R, -, -) (5)\n"
        );
        assert_eq!(RedBlackTree::new().to_string(), "");
    }
}
