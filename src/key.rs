//! Validated fixed-length decimal key type.

use core::fmt;
use core::str::FromStr;

use crate::constants::{KEY_LENGTH, MAX_KEY_VALUE, POW10};

/// Error returned when a value is not a well-formed 9-digit key.
///
/// This is the single caller-error class of the crate: keys are validated
/// at construction, so the set operations themselves are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPhoneNumber {
    /// Textual key was not exactly [`KEY_LENGTH`] characters long.
    #[error("phone number must be exactly 9 digits, got {0} characters")]
    WrongLength(usize),

    /// Textual key contained a non-digit character.
    #[error("invalid character {found:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Zero-based position within the string.
        position: usize,
    },

    /// Numeric key exceeded the 9-digit range.
    #[error("value {0} is outside the range 0..=999999999")]
    OutOfRange(u64),
}

/// A phone number: exactly nine decimal digits.
///
/// Stored as its numeric value in `[0, 999_999_999]`; the textual form is
/// always zero-padded to nine characters. Two keys are equal iff their
/// zero-padded digit sequences are identical, which for this
/// representation is plain value equality.
///
/// # Example
/// ```rust
/// use digit_trie_set::PhoneNumber;
///
/// let n: PhoneNumber = "004912345".parse().unwrap();
/// assert_eq!(n.value(), 4_912_345);
/// assert_eq!(n.digit(0), 0);
/// assert_eq!(n.digit(8), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(u32);

impl PhoneNumber {
    /// The smallest key, `000000000`.
    pub const MIN: PhoneNumber = PhoneNumber(0);

    /// The largest key, `999999999`.
    pub const MAX: PhoneNumber = PhoneNumber(MAX_KEY_VALUE);

    /// Create a key from its numeric value.
    ///
    /// # Errors
    /// [`InvalidPhoneNumber::OutOfRange`] if `value > 999_999_999`.
    #[inline]
    pub const fn new(value: u32) -> Result<Self, InvalidPhoneNumber> {
        if value > MAX_KEY_VALUE {
            Err(InvalidPhoneNumber::OutOfRange(value as u64))
        } else {
            Ok(PhoneNumber(value))
        }
    }

    /// Numeric value of the key.
    #[inline(always)]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Extract the decimal digit at the given position.
    ///
    /// # Arguments
    /// * `position` - Digit position (0 = most significant)
    ///
    /// # Returns
    /// Digit value (0-9)
    ///
    /// # Performance
    /// O(1) - one divide and one modulo against a constant weight
    #[inline(always)]
    pub fn digit(self, position: usize) -> u8 {
        debug_assert!(position < KEY_LENGTH, "digit position out of bounds");
        ((self.0 / POW10[position]) % 10) as u8
    }

    /// All nine digits, most significant first.
    #[inline]
    pub fn digits(self) -> [u8; KEY_LENGTH] {
        let mut out = [0u8; KEY_LENGTH];
        for (position, slot) in out.iter_mut().enumerate() {
            *slot = self.digit(position);
        }
        out
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = InvalidPhoneNumber;

    /// Parse a key from exactly nine ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != KEY_LENGTH {
            return Err(InvalidPhoneNumber::WrongLength(length));
        }
        let mut value: u32 = 0;
        for (position, ch) in s.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => value = value * 10 + d,
                None => {
                    return Err(InvalidPhoneNumber::InvalidDigit {
                        found: ch,
                        position,
                    })
                }
            }
        }
        Ok(PhoneNumber(value))
    }
}

impl TryFrom<u32> for PhoneNumber {
    type Error = InvalidPhoneNumber;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PhoneNumber::new(value)
    }
}

impl From<PhoneNumber> for u32 {
    #[inline]
    fn from(key: PhoneNumber) -> u32 {
        key.value()
    }
}
