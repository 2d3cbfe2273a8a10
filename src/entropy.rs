//! Empirical Shannon entropy of a trit sequence.

use crate::nonce::Trit;
use crate::params::{ENTROPY_SENTINEL, PRUNE_EXEMPT_LEN};

/// Shannon entropy (base 2) of the trit-value frequency distribution.
///
/// Sequences of [`PRUNE_EXEMPT_LEN`] trits or fewer return
/// [`ENTROPY_SENTINEL`] (2.0), which lies above the log2(3) ceiling so
/// comparing against any real threshold never prunes them. Longer
/// sequences yield a value in `[0, log2(3)]`.
pub fn shannon_entropy(trits: &[Trit]) -> f64 {
    if trits.len() <= PRUNE_EXEMPT_LEN {
        return ENTROPY_SENTINEL;
    }

    let mut counts = [0u32; 3];
    for &trit in trits {
        counts[(trit.as_i8() + 1) as usize] += 1;
    }

    let n = trits.len() as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / n;
            -p * p.log2()
        })
        .sum()
}
