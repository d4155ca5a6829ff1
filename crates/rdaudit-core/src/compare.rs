//! Comparative view of two sample sequences.
//!
//! Pure data shaping for the scatter renderer: pair elements of the two
//! sequences by position over a bounded prefix. No statistical inference
//! happens here.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::sample::SampleSequence;

/// Default prefix bound for paired views — keeps scatter plots tractable.
pub const DEFAULT_PAIR_BOUND: usize = 5000;

/// Position-paired prefix of two sequences. Both columns have equal length.
#[derive(Debug, Clone, Serialize)]
pub struct PairedSamples {
    pub a: Vec<u64>,
    pub b: Vec<u64>,
}

impl PairedSamples {
    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Pair the first `min(bound, len_a, len_b)` elements of both sequences by
/// position. Fails with `InvalidInput` when either sequence is empty —
/// there is nothing to pair.
pub fn paired_prefix(
    a: &SampleSequence,
    b: &SampleSequence,
    bound: usize,
) -> Result<PairedSamples> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::InvalidInput(
            "cannot pair samples with an empty sequence".into(),
        ));
    }
    let n = bound.min(a.len()).min(b.len());
    Ok(PairedSamples {
        a: a.values()[..n].to_vec(),
        b: b.values()[..n].to_vec(),
    })
}
