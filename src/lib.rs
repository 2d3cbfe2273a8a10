//! # Trinity PoW
//!
//! Exhaustive depth-bounded proof-of-work search over balanced ternary
//! nonces.
//!
//! The engine enumerates trit sequences (`-1`, `0`, `+1`) depth-first up
//! to a configured maximum length, prunes branches whose empirical
//! Shannon entropy falls below a threshold, and collects every candidate
//! whose SHA-256 digest starts with the configured number of zero bytes.
//!
//! # Overview
//!
//! - **Deterministic**: for a fixed configuration the traversal order,
//!   and so the winner collection, is identical across runs.
//! - **Entropy-pruned**: skewed symbol distributions are discarded before
//!   any digest work, cutting large lopsided subtrees cheaply.
//! - **Byte-exact encoding**: digests are computed over one signed byte
//!   per trit, so results are comparable across implementations.
//!
//! # Example
//!
//! ```rust
//! use trinity_pow::{Miner, NullReporter, SearchConfig};
//!
//! // Depth 8, pruning disabled, one leading zero byte required.
//! let config = SearchConfig::new(8, 0.0, 1).expect("valid configuration");
//! let outcome = Miner::new(config).run(&mut NullReporter);
//!
//! assert_eq!(outcome.winners.len(), 25);
//! for winner in &outcome.winners {
//!     assert_eq!(winner.len(), 8);
//! }
//! ```

pub mod digest;
pub mod entropy;
pub mod nonce;
pub mod params;
pub mod report;
pub mod search;

// Convenience re-exports
pub use digest::{meets_difficulty, nonce_digest};
pub use entropy::shannon_entropy;
pub use nonce::{Nonce, Trit};
pub use report::{ConsoleReporter, NullReporter, Reporter};
pub use search::{ConfigError, Miner, SearchConfig, SearchOutcome, SearchStats, Termination};
