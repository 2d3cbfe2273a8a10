//! Balanced ternary nonce representation.
//!
//! A [`Nonce`] is a fixed-capacity buffer of [`Trit`]s plus its current
//! length. The search engine reuses one buffer in place while backtracking
//! and snapshots it by value (`Copy`) whenever a candidate qualifies, so
//! stored winners are immune to later mutation of the shared prefix.

use core::fmt;

use crate::params::MAX_NONCE_LEN;

/// A balanced ternary digit: -1, 0 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Trit {
    /// -1, rendered as `-`
    Minus = -1,
    /// 0, rendered as `0`
    #[default]
    Zero = 0,
    /// +1, rendered as `+`
    Plus = 1,
}

impl Trit {
    /// All trit values in ascending order. Branching follows this order,
    /// which fixes the depth-first discovery order of winners.
    pub const ALL: [Trit; 3] = [Trit::Minus, Trit::Zero, Trit::Plus];

    /// The signed-byte value used in the wire encoding.
    #[inline(always)]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Parse a signed byte back into a trit.
    pub const fn from_i8(value: i8) -> Option<Trit> {
        match value {
            -1 => Some(Trit::Minus),
            0 => Some(Trit::Zero),
            1 => Some(Trit::Plus),
            _ => None,
        }
    }

    /// Printable form: `-`, `0` or `+`.
    pub const fn as_char(self) -> char {
        match self {
            Trit::Minus => '-',
            Trit::Zero => '0',
            Trit::Plus => '+',
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A candidate nonce: up to [`MAX_NONCE_LEN`] trits.
///
/// Slots at indices >= `len` are unused; they keep whatever value a
/// previous deeper visit left behind, so equality and ordering only
/// consider the live prefix.
#[derive(Debug, Clone, Copy)]
pub struct Nonce {
    digits: [Trit; MAX_NONCE_LEN],
    len: usize,
}

impl Nonce {
    /// An empty nonce.
    pub const fn new() -> Self {
        Self {
            digits: [Trit::Zero; MAX_NONCE_LEN],
            len: 0,
        }
    }

    /// Build a nonce from a trit slice.
    ///
    /// # Panics
    ///
    /// Panics if `trits` holds more than [`MAX_NONCE_LEN`] values.
    pub fn from_trits(trits: &[Trit]) -> Self {
        assert!(
            trits.len() <= MAX_NONCE_LEN,
            "nonce capacity is {} trits, got {}",
            MAX_NONCE_LEN,
            trits.len()
        );
        let mut nonce = Self::new();
        nonce.digits[..trits.len()].copy_from_slice(trits);
        nonce.len = trits.len();
        nonce
    }

    /// Current length.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no trits have been appended yet.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live prefix.
    #[inline(always)]
    pub fn trits(&self) -> &[Trit] {
        &self.digits[..self.len]
    }

    /// Append one trit.
    ///
    /// # Panics
    ///
    /// Panics if the nonce is already at capacity.
    #[inline(always)]
    pub fn push(&mut self, trit: Trit) {
        self.digits[self.len] = trit;
        self.len += 1;
    }

    /// Remove the last trit, if any.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<Trit> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.digits[self.len])
    }
}

impl Default for Nonce {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Nonce {
    fn eq(&self, other: &Self) -> bool {
        self.trits() == other.trits()
    }
}

impl Eq for Nonce {}

impl PartialOrd for Nonce {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nonce {
    /// Lexicographic over the live prefix, prefixes before extensions.
    /// This matches the engine's depth-first preorder discovery order.
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.trits().cmp(other.trits())
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trit in self.trits() {
            write!(f, "{}", trit.as_char())?;
        }
        Ok(())
    }
}
