//! Reporting sinks for discovered nonces.

use crate::nonce::Nonce;
use crate::params::DIGEST_SIZE;
use crate::search::{SearchStats, Termination};

/// Receives discovery and completion events from a running search.
///
/// `on_winner` fires at the moment of discovery, in depth-first order;
/// `on_complete` fires exactly once per run, however the run stopped.
pub trait Reporter {
    /// A candidate passed the digest test.
    fn on_winner(&mut self, nonce: &Nonce, entropy: f64, digest: &[u8; DIGEST_SIZE]);

    /// The run stopped; `winners` is the total number collected.
    fn on_complete(&mut self, winners: usize, termination: Termination, stats: &SearchStats);
}

/// Prints winners and the run summary to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn on_winner(&mut self, nonce: &Nonce, entropy: f64, digest: &[u8; DIGEST_SIZE]) {
        println!(
            "Found nonce: {}  (len={}, entropy={:.4})",
            nonce,
            nonce.len(),
            entropy
        );
        println!("  Digest: {}", hex::encode(digest));
    }

    fn on_complete(&mut self, winners: usize, termination: Termination, stats: &SearchStats) {
        match termination {
            Termination::Completed => {
                println!("\nSearch complete in {:.2}s", stats.elapsed.as_secs_f64());
            }
            Termination::Cancelled => {
                println!(
                    "\nSearch cancelled after {:.2}s",
                    stats.elapsed.as_secs_f64()
                );
            }
            Termination::OutOfMemory => {
                eprintln!(
                    "\nSearch aborted after {:.2}s: result storage exhausted",
                    stats.elapsed.as_secs_f64()
                );
            }
        }
        println!(
            "Nodes visited: {} | branches pruned: {} | digests tested: {}",
            stats.nodes_visited, stats.branches_pruned, stats.digests_tested
        );
        println!("Found {} nonces", winners);
    }
}

/// Discards all events. Useful when only the returned outcome matters.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_winner(&mut self, _nonce: &Nonce, _entropy: f64, _digest: &[u8; DIGEST_SIZE]) {}

    fn on_complete(&mut self, _winners: usize, _termination: Termination, _stats: &SearchStats) {}
}
