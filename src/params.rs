//! Fixed search parameters.
//!
//! The pruning exemption and minimum test length are fixed behavioral
//! constants; they are not derived from the alphabet size or digest
//! length and should not be assumed to generalize to either.

/// Capacity of the candidate prefix buffer, and so the hard upper
/// limit on the configurable max depth.
pub const MAX_NONCE_LEN: usize = 64;

/// Candidates at or below this length are exempt from entropy pruning;
/// samples that short give unreliable entropy estimates.
pub const PRUNE_EXEMPT_LEN: usize = 3;

/// Minimum candidate length worth digest-testing.
pub const MIN_TEST_LEN: usize = 8;

/// SHA-256 output size in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Entropy reported for candidates within the pruning exemption.
/// Sits above the log2(3) ceiling, so no real threshold can prune them.
pub const ENTROPY_SENTINEL: f64 = 2.0;

/// Theoretical entropy ceiling for a 3-symbol alphabet: log2(3).
pub const MAX_ENTROPY: f64 = 1.584_962_500_721_156;
