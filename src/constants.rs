//! Core constants for the digit tree.

/// Number of decimal digits in a key.
pub const KEY_LENGTH: usize = 9;

/// Number of children per node (one per decimal digit).
pub const FANOUT: usize = 10;

/// Number of interior levels (excludes the leaf level).
///
/// The first 8 digits select interior nodes; the 9th digit indexes a bit
/// in the terminal bitmap of the depth-8 node.
pub const INTERIOR_LEVELS: usize = KEY_LENGTH - 1;

/// Largest representable key value (nine nines).
pub const MAX_KEY_VALUE: u32 = 999_999_999;

/// Decimal digit weights, most significant first.
///
/// `POW10[i]` is the weight of digit position `i`, so the digit at
/// position `i` of key `v` is `(v / POW10[i]) % 10`.
pub const POW10: [u32; KEY_LENGTH] = [
    100_000_000,
    10_000_000,
    1_000_000,
    100_000,
    10_000,
    1_000,
    100,
    10,
    1,
];
