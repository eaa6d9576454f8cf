//! Tree node for 10-way digit branching.

use alloc::boxed::Box;
use core::ptr;

use crate::atomic::{AtomicPtr, AtomicU16, Ordering};
use crate::constants::FANOUT;

/// Tree node with 10-way branching.
///
/// One node per digit prefix. Child slots are atomic pointers so that
/// concurrent inserters can claim a missing child with a single
/// compare-exchange; the terminal markers for the last digit live in a
/// 10-bit atomic bitmap instead of a tenth level of nodes.
///
/// # Memory Layout
/// - `children`: 10 atomic pointers (one per digit)
/// - `terminals`: 2 bytes - terminal bitmap (bit `d` set = key ending in
///   digit `d` at this prefix is present)
///
/// # Concurrency
/// - Child install: compare-exchange null -> new node; exactly one winner
///   per slot, losers free their candidate and adopt the winner's node
/// - Terminal marking: `fetch_or`, the caller observing the bit clear in
///   the returned value is the unique winner
/// - Slots transition absent -> present exactly once and are never cleared
///   or relocated, so references handed out during traversal stay valid
///   for the lifetime of the owning set
#[derive(Debug)]
pub struct Node {
    /// Child pointers, indexed by digit (0-9). Null = no child.
    children: [AtomicPtr<Node>; FANOUT],

    /// Terminal bitmap for the last digit (bits 0-9).
    terminals: AtomicU16,
}

impl Node {
    /// Create a new empty node: no children, no terminal bits.
    pub fn new() -> Self {
        Node {
            children: [(); FANOUT].map(|_| AtomicPtr::new(ptr::null_mut())),
            terminals: AtomicU16::new(0),
        }
    }

    /// Get the child for a digit, if it has been installed.
    ///
    /// # Performance
    /// O(1) - single acquire load
    #[inline(always)]
    pub fn child(&self, digit: u8) -> Option<&Node> {
        let ptr = self.children[digit as usize].load(Ordering::Acquire);
        // Children are never freed while the set is alive, so tying the
        // reference to &self is sound.
        unsafe { ptr.as_ref() }
    }

    /// Get the child for a digit, installing a new node if the slot is empty.
    ///
    /// Safe under concurrent calls for the same slot: the compare-exchange
    /// admits exactly one winner, and losers free their candidate node and
    /// adopt the winner's.
    ///
    /// # Returns
    /// The installed child (winner's or pre-existing)
    ///
    /// # Performance
    /// O(1) - one load on the fast path, one allocation + CAS on first install
    pub fn child_or_install(&self, digit: u8) -> &Node {
        let slot = &self.children[digit as usize];

        let existing = slot.load(Ordering::Acquire);
        if !existing.is_null() {
            return unsafe { &*existing };
        }

        let candidate = Box::into_raw(Box::new(Node::new()));
        match slot.compare_exchange(
            ptr::null_mut(),
            candidate,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => unsafe { &*candidate },
            Err(winner) => {
                // Lost the race: reclaim our candidate, use the winner's.
                unsafe { drop(Box::from_raw(candidate)) };
                unsafe { &*winner }
            }
        }
    }

    /// Atomically set the terminal bit for a digit.
    ///
    /// # Returns
    /// `true` iff this call performed the false -> true transition. Under
    /// concurrent duplicate marking exactly one caller sees `true`.
    ///
    /// # Performance
    /// O(1) - single fetch_or
    #[inline(always)]
    pub fn mark_terminal(&self, digit: u8) -> bool {
        let bit = 1u16 << digit;
        self.terminals.fetch_or(bit, Ordering::AcqRel) & bit == 0
    }

    /// Check the terminal bit for a digit.
    ///
    /// # Performance
    /// O(1) - single acquire load
    #[inline(always)]
    pub fn is_terminal(&self, digit: u8) -> bool {
        self.terminals.load(Ordering::Acquire) & (1u16 << digit) != 0
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Exclusive access here; recursion depth is bounded by key length.
        for slot in &self.children {
            let child = slot.load(Ordering::Relaxed);
            if !child.is_null() {
                unsafe { drop(Box::from_raw(child)) };
            }
        }
    }
}
