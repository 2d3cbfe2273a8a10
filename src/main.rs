//! Trinity PoW CLI
//!
//! Searches the bounded ternary tree for nonces whose SHA-256 digest
//! meets a leading-zero-byte difficulty target.
//!
//! # Commands
//!
//! - `mine` - Run the depth-first search and print every winner
//! - `benchmark` - Measure digest throughput

use clap::{Parser, Subcommand};
use std::hint::black_box;
use std::time::Instant;

use trinity_pow::params::MAX_NONCE_LEN;
use trinity_pow::{nonce_digest, ConsoleReporter, Miner, Nonce, SearchConfig, Termination, Trit};

#[derive(Parser)]
#[command(name = "trinity-pow")]
#[command(version = "0.1.0")]
#[command(about = "Ternary proof-of-work search with entropy pruning")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for nonces meeting the difficulty target
    Mine {
        /// Maximum nonce length to explore (at most 64)
        #[arg(long, default_value = "20")]
        max_depth: usize,

        /// Entropy threshold below which branches are pruned
        #[arg(long, default_value = "1.58")]
        entropy: f64,

        /// Required number of leading zero bytes in the digest
        #[arg(short, long, default_value = "3")]
        difficulty: usize,
    },

    /// Run digest throughput benchmark
    Benchmark {
        /// Number of digests to compute
        #[arg(short, long, default_value = "1000000")]
        count: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mine {
            max_depth,
            entropy,
            difficulty,
        } => cmd_mine(max_depth, entropy, difficulty),
        Commands::Benchmark { count } => cmd_benchmark(count),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_mine(max_depth: usize, entropy: f64, difficulty: usize) -> anyhow::Result<()> {
    let config = SearchConfig::new(max_depth, entropy, difficulty)?;

    println!("=== Trinity PoW ===");
    println!(
        "Max depth: {} | Min entropy: {:.3} | Difficulty: {} zero bytes\n",
        config.max_depth(),
        config.min_entropy(),
        config.difficulty()
    );

    let outcome = Miner::new(config).run(&mut ConsoleReporter);

    if outcome.termination == Termination::OutOfMemory {
        anyhow::bail!(
            "search aborted: result storage exhausted after {} winners",
            outcome.winners.len()
        );
    }

    Ok(())
}

fn cmd_benchmark(count: u64) -> anyhow::Result<()> {
    println!("Running benchmark with {} digests...", count);

    let mut nonce = Nonce::new();
    for i in 0..MAX_NONCE_LEN {
        nonce.push(Trit::ALL[i % 3]);
    }

    let start = Instant::now();

    for i in 0..count {
        // Vary the tail so the hash input changes each iteration
        nonce.pop();
        nonce.push(Trit::ALL[(i % 3) as usize]);
        black_box(nonce_digest(nonce.trits()));
    }

    let elapsed = start.elapsed();
    let hashrate = count as f64 / elapsed.as_secs_f64();

    println!("\nResults:");
    println!("  Total digests: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Hashrate: {:.2} H/s", hashrate);

    Ok(())
}
