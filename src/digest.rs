//! SHA-256 digest predicate over the nonce wire encoding.
//!
//! The wire encoding is one signed byte per trit (-1 as 0xFF, 0, +1 as
//! 0x01), concatenated in sequence order with no padding or separators.
//! This encoding is fixed: digests must be bit-for-bit comparable across
//! implementations given the same trit sequence.

use sha2::{Digest, Sha256};

use crate::nonce::Trit;
use crate::params::DIGEST_SIZE;

/// SHA-256 over the wire encoding of `trits`.
pub fn nonce_digest(trits: &[Trit]) -> [u8; DIGEST_SIZE] {
    // SAFETY: Trit is a fieldless repr(i8) enum, so a trit slice has the
    // same size and layout as its signed-byte wire encoding.
    let bytes =
        unsafe { core::slice::from_raw_parts(trits.as_ptr().cast::<u8>(), trits.len()) };
    Sha256::digest(bytes).into()
}

/// Check whether the first `difficulty` bytes of `digest` are all zero.
///
/// Difficulty counts leading zero *bytes*; valid values run from 0
/// (every digest passes) to [`DIGEST_SIZE`].
#[inline(always)]
pub fn meets_difficulty(digest: &[u8; DIGEST_SIZE], difficulty: usize) -> bool {
    digest.iter().take(difficulty).all(|&byte| byte == 0)
}
