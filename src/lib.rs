//! # digit-trie-set
//!
//! Lock-free concurrent membership set for fixed-length decimal keys
//! (9-digit phone numbers).
//!
//! Keys are stored as paths through a 10-way digit tree of fixed depth.
//! Every child slot and every terminal marker is an independently
//! claimable atomic cell, so unrelated insertions on disjoint paths never
//! contend and no operation takes a lock.
//!
//! ## Features
//! - `insert`/`contains`/`len` callable from any number of threads with
//!   no external synchronization
//! - Exactly-once counting under concurrent duplicate insertion
//! - Bounded operations: at most one slot claim per digit level
//! - no_std compatible (requires alloc)

#![no_std]

extern crate alloc;

mod atomic;
mod constants;
mod key;
mod trie;

pub use key::{InvalidPhoneNumber, PhoneNumber};
pub use trie::TrieSet;
