//! Depth-first search engine with entropy pruning.
//!
//! The engine enumerates the bounded ternary tree in a fixed order
//! (`-1`, `0`, `+1` at each depth), prunes low-entropy branches before
//! any digest work, and appends every candidate that passes the digest
//! test to an ordered winner collection. For a fixed configuration the
//! traversal, and so the winner collection, is fully deterministic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::digest::{meets_difficulty, nonce_digest};
use crate::entropy::shannon_entropy;
use crate::nonce::{Nonce, Trit};
use crate::params::{DIGEST_SIZE, MAX_NONCE_LEN, MIN_TEST_LEN, PRUNE_EXEMPT_LEN};
use crate::report::Reporter;

/// Rejected configuration. Raised before any search work begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Max depth must fit the prefix buffer.
    #[error("max depth must be between 1 and {MAX_NONCE_LEN}, got {0}")]
    MaxDepthOutOfRange(usize),

    /// Difficulty cannot demand more zero bytes than the digest has.
    #[error("difficulty must not exceed the digest length of {DIGEST_SIZE} bytes, got {0}")]
    DifficultyTooLarge(usize),

    /// The pruning threshold must be an actual number.
    #[error("minimum entropy must be finite and non-negative, got {0}")]
    InvalidMinEntropy(f64),
}

/// Immutable configuration for one search run.
///
/// Construction validates every field, so a `SearchConfig` in hand is
/// always runnable. Minimum entropy values above log2(3) are accepted:
/// they prune every branch past the exemption length, which is useless
/// but well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    max_depth: usize,
    min_entropy: f64,
    difficulty: usize,
}

impl SearchConfig {
    /// Validate and build a configuration.
    pub fn new(max_depth: usize, min_entropy: f64, difficulty: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 || max_depth > MAX_NONCE_LEN {
            return Err(ConfigError::MaxDepthOutOfRange(max_depth));
        }
        if difficulty > DIGEST_SIZE {
            return Err(ConfigError::DifficultyTooLarge(difficulty));
        }
        if !min_entropy.is_finite() || min_entropy < 0.0 {
            return Err(ConfigError::InvalidMinEntropy(min_entropy));
        }
        Ok(Self {
            max_depth,
            min_entropy,
            difficulty,
        })
    }

    /// Upper bound on candidate length.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Entropy threshold below which branches are pruned.
    pub const fn min_entropy(&self) -> f64 {
        self.min_entropy
    }

    /// Required number of leading zero bytes in the digest.
    pub const fn difficulty(&self) -> usize {
        self.difficulty
    }
}

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The bounded tree was fully explored.
    Completed,
    /// The caller's cancellation flag was raised.
    Cancelled,
    /// Growing the winner collection failed.
    OutOfMemory,
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Tree nodes entered (including the empty root).
    pub nodes_visited: u64,
    /// Branches abandoned by the entropy check.
    pub branches_pruned: u64,
    /// Candidates that reached the digest test.
    pub digests_tested: u64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Result of a search run.
///
/// Every runtime stop produces an outcome: winners collected before a
/// cancellation or allocation failure remain intact, in discovery order.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Winning nonces in depth-first, symbol-ascending discovery order.
    pub winners: Vec<Nonce>,
    /// Run counters.
    pub stats: SearchStats,
    /// Why the run stopped.
    pub termination: Termination,
}

/// Depth-first miner over the ternary alphabet.
pub struct Miner {
    config: SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl Miner {
    /// Build a miner for `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attach a cancellation flag, polled on every node entry.
    ///
    /// Raising the flag stops the run with [`Termination::Cancelled`];
    /// winners already collected stay readable in the outcome.
    #[must_use]
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Run the search to completion (or interruption), emitting events
    /// to `reporter` as they happen.
    pub fn run(&self, reporter: &mut dyn Reporter) -> SearchOutcome {
        let start = Instant::now();
        let mut walk = Walk {
            config: &self.config,
            cancel: self.cancel.as_deref(),
            reporter: &mut *reporter,
            buf: Nonce::new(),
            winners: Vec::new(),
            stats: SearchStats::default(),
        };

        let termination = match walk.mine(0) {
            Ok(()) => Termination::Completed,
            Err(Interrupt::Cancelled) => Termination::Cancelled,
            Err(Interrupt::OutOfMemory) => Termination::OutOfMemory,
        };

        let Walk {
            winners, mut stats, ..
        } = walk;
        stats.elapsed = start.elapsed();
        reporter.on_complete(winners.len(), termination, &stats);

        SearchOutcome {
            winners,
            stats,
            termination,
        }
    }
}

/// Reasons the walk unwinds early. Neither is a configuration error;
/// both leave the collected winners valid.
enum Interrupt {
    Cancelled,
    OutOfMemory,
}

/// Mutable state of one traversal: the shared prefix buffer, the winner
/// collection and the counters.
struct Walk<'a> {
    config: &'a SearchConfig,
    cancel: Option<&'a AtomicBool>,
    reporter: &'a mut dyn Reporter,
    buf: Nonce,
    winners: Vec<Nonce>,
    stats: SearchStats,
}

impl Walk<'_> {
    /// Visit the node whose prefix currently fills `buf`. `depth` always
    /// equals `buf.len()`.
    ///
    /// Per-node order: cancellation poll, entropy prune, digest test,
    /// depth bound, then the three-way branch. Candidates of exactly max
    /// depth are digest-tested before the bound stops the branch.
    fn mine(&mut self, depth: usize) -> Result<(), Interrupt> {
        if let Some(flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(Interrupt::Cancelled);
            }
        }
        self.stats.nodes_visited += 1;

        let entropy = shannon_entropy(self.buf.trits());
        if depth > PRUNE_EXEMPT_LEN && entropy < self.config.min_entropy() {
            self.stats.branches_pruned += 1;
            return Ok(());
        }

        if depth >= MIN_TEST_LEN {
            self.stats.digests_tested += 1;
            let digest = nonce_digest(self.buf.trits());
            if meets_difficulty(&digest, self.config.difficulty()) {
                self.winners
                    .try_reserve(1)
                    .map_err(|_| Interrupt::OutOfMemory)?;
                // Snapshot by value: backtracking reuses the buffer.
                self.winners.push(self.buf);
                self.reporter.on_winner(&self.buf, entropy, &digest);
            }
        }

        if depth >= self.config.max_depth() {
            return Ok(());
        }

        for trit in Trit::ALL {
            self.buf.push(trit);
            let descended = self.mine(depth + 1);
            self.buf.pop();
            descended?;
        }
        Ok(())
    }
}
