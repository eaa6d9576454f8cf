//! Concurrent digit-tree set over 9-digit keys.

use crate::atomic::{AtomicUsize, Ordering};
use crate::constants::{INTERIOR_LEVELS, KEY_LENGTH};
use crate::key::PhoneNumber;
use crate::trie::Node;

/// Concurrent membership set for 9-digit decimal keys.
///
/// Keys are stored as root-to-leaf paths through a 10-way tree: the first
/// 8 digits select interior nodes, the last digit is a bit in the terminal
/// bitmap of the depth-8 node. All operations take `&self` and are safe to
/// call from any number of threads with no external lock.
///
/// # Architecture
/// - 10-way branching, fixed depth (no resizing or rebalancing)
/// - Lazy allocation: nodes materialize on first insertion along a path
/// - No removal: nodes are never freed or relocated while the set lives,
///   which is what makes lock-free traversal sound
/// - Per-slot claims: each child slot and terminal bit is claimed with an
///   independent atomic operation, so disjoint paths never contend
///
/// # Counting
/// `len` counts distinct keys. The increment is performed only by the
/// caller that wins the terminal-bit transition, after the bit is written,
/// so the counter never exceeds the number of terminal bits actually set
/// and duplicate insertions never over-count.
///
/// # Visibility
/// Release/acquire ordering throughout: once `insert` returns, the
/// insertion is visible to any thread that synchronizes with the inserter,
/// and terminal bits settle to visible for all threads (they are only
/// ever set, never cleared).
///
/// # Example
/// ```rust
/// use digit_trie_set::{PhoneNumber, TrieSet};
///
/// let set = TrieSet::new();
/// let key: PhoneNumber = "123456789".parse().unwrap();
///
/// assert!(set.insert(key));   // newly inserted
/// assert!(!set.insert(key));  // already present
/// assert!(set.contains(key));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug)]
pub struct TrieSet {
    /// Root node (the empty prefix). Never terminal itself.
    root: Node,

    /// Number of distinct keys stored.
    len: AtomicUsize,
}

impl TrieSet {
    /// Create a new empty set.
    ///
    /// # Performance
    /// O(1) - allocates only the root node's slot array
    pub fn new() -> Self {
        TrieSet {
            root: Node::new(),
            len: AtomicUsize::new(0),
        }
    }

    /// Insert a key into the set.
    ///
    /// Walks the digit path from the root, installing missing children,
    /// then claims the terminal bit for the last digit. Idempotent: the
    /// element count changes only on the first insertion of a key, even
    /// when many threads insert the same key concurrently.
    ///
    /// # Arguments
    /// * `key` - The key to insert
    ///
    /// # Returns
    /// * `true` if the key was newly inserted
    /// * `false` if the key was already present
    ///
    /// # Performance
    /// O(1) - bounded by the fixed key length: at most 8 slot claims plus
    /// one bitmap update
    pub fn insert(&self, key: PhoneNumber) -> bool {
        let mut node = &self.root;
        for level in 0..INTERIOR_LEVELS {
            node = node.child_or_install(key.digit(level));
        }

        let newly_inserted = node.mark_terminal(key.digit(KEY_LENGTH - 1));
        if newly_inserted {
            // Only the winner of the terminal transition counts the key.
            self.len.fetch_add(1, Ordering::Release);
        }
        newly_inserted
    }

    /// Check whether a key is in the set.
    ///
    /// Pure read: never allocates, never blocks writers. If any node on
    /// the digit path is missing the key cannot be present and the walk
    /// stops early.
    ///
    /// # Arguments
    /// * `key` - The key to look up
    ///
    /// # Returns
    /// `true` iff a completed `insert` of this key is visible to this call
    ///
    /// # Performance
    /// O(1) - at most 8 acquire loads plus one bitmap test
    pub fn contains(&self, key: PhoneNumber) -> bool {
        let mut node = &self.root;
        for level in 0..INTERIOR_LEVELS {
            match node.child(key.digit(level)) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_terminal(key.digit(KEY_LENGTH - 1))
    }

    /// Number of distinct keys in the set.
    ///
    /// Monotonically non-decreasing (there is no removal) and never
    /// greater than the number of terminal bits set at the moment of the
    /// load.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TrieSet {
    fn default() -> Self {
        Self::new()
    }
}
