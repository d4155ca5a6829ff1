//! The statistical test battery.
//!
//! Four tests over one sample sequence at a time: byte-level Shannon entropy,
//! bit balance, lag-k autocorrelation, and a chi-square goodness-of-fit test
//! against the uniform byte distribution. Every test is a pure single-pass
//! function over in-memory data; the battery does no I/O and holds no state,
//! so callers may run any combination of tests concurrently. None of the
//! tests renders a verdict — they surface numbers and leave pass/fail
//! judgment to the caller.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::gamma;
use crate::sample::SampleSequence;

/// Default autocorrelation lag.
pub const DEFAULT_LAG: usize = 1;

/// Degrees of freedom of the byte-uniformity chi-square test (256 bins − 1).
pub const CHI_SQUARE_DF: u64 = 255;

// ---------------------------------------------------------------------------
// Byte histogram
// ---------------------------------------------------------------------------

/// Occurrence count of each byte value 0–255 across a sequence's raw bytes.
///
/// Shared subroutine of the entropy and chi-square tests. Invariant:
/// `counts` sums to `total`, which equals the sequence's byte length.
#[derive(Debug, Clone, Serialize)]
pub struct ByteHistogram {
    #[serde(serialize_with = "serialize_counts")]
    pub counts: [u64; 256],
    pub total: u64,
}

/// Serde lacks `Serialize` impls for arrays longer than 32; serialize as a
/// slice, which produces the same JSON array.
fn serialize_counts<S: serde::Serializer>(
    counts: &[u64; 256],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&counts[..], serializer)
}

impl ByteHistogram {
    /// Count every byte of the sequence's little-endian expansion.
    pub fn from_sequence(seq: &SampleSequence) -> Self {
        let mut counts = [0u64; 256];
        for byte in seq.bytes() {
            counts[byte as usize] += 1;
        }
        Self {
            counts,
            total: seq.byte_len() as u64,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Zero/one counts over the full bit expansion of a sequence.
/// Invariant: `zeros + ones == 8 × byte_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitCounts {
    pub zeros: u64,
    pub ones: u64,
}

/// Chi-square goodness-of-fit result against the uniform byte distribution.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChiSquareTest {
    pub statistic: f64,
    pub p_value: f64,
}

/// All battery outputs for one sequence, in report-sink shape.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    pub samples: usize,
    pub bytes: usize,
    /// Byte-level Shannon entropy in bits, range [0, 8].
    pub entropy_bits: f64,
    pub bit_counts: BitCounts,
    /// Lag-`lag` Pearson coefficient; NaN when variance is zero
    /// (serialized as null).
    pub autocorrelation: f64,
    pub lag: usize,
    pub chi_square: ChiSquareTest,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Shannon entropy, in bits, of the byte-level distribution of the
/// sequence's underlying representation (not of the 64-bit words).
///
/// `H = -Σ p_i·log2(p_i)` over bins with nonzero count; 8.0 indicates a
/// perfectly uniform byte distribution. Empty input is `InvalidInput`.
pub fn shannon_entropy(seq: &SampleSequence) -> Result<f64> {
    if seq.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compute entropy of an empty sequence".into(),
        ));
    }
    let hist = ByteHistogram::from_sequence(seq);
    let total = hist.total as f64;
    let mut h = 0.0;
    for &count in &hist.counts {
        if count > 0 {
            let p = count as f64 / total;
            h -= p * p.log2();
        }
    }
    Ok(h)
}

/// Count 0-bits and 1-bits across the entire bit expansion of the sequence.
///
/// Bit order within a byte (documented MSB-first) does not affect the
/// aggregate counts. An empty sequence yields `(0, 0)` — the sum invariant
/// holds trivially, so this is not an error.
pub fn bit_frequency(seq: &SampleSequence) -> BitCounts {
    let ones: u64 = seq.values().iter().map(|v| u64::from(v.count_ones())).sum();
    let total_bits = seq.byte_len() as u64 * 8;
    BitCounts {
        zeros: total_bits - ones,
        ones,
    }
}

/// Pearson correlation between the sequence and itself shifted by `lag`
/// positions, treating words as real numbers.
///
/// Words are cast `u64 → f64`; above 2^53 the cast loses low-order bits.
/// That precision loss is a documented limitation, deliberately left
/// uncorrected so outputs stay comparable with reference vectors.
///
/// Errors with `InvalidInput` when `lag == 0` or `len <= lag`. When either
/// lagged slice has zero variance the coefficient is undefined; the result
/// is then `f64::NAN` — a sentinel meaning "inconclusive", never an error
/// and never to be read as "uncorrelated".
pub fn autocorrelation(seq: &SampleSequence, lag: usize) -> Result<f64> {
    if lag == 0 {
        return Err(Error::InvalidInput("autocorrelation lag must be >= 1".into()));
    }
    let n = seq.len();
    if n <= lag {
        return Err(Error::InvalidInput(format!(
            "sequence of length {n} is too short for lag {lag}"
        )));
    }

    let values = seq.values();
    let pairs = n - lag;
    let mut mean_head = 0.0;
    let mut mean_tail = 0.0;
    for i in 0..pairs {
        mean_head += values[i] as f64;
        mean_tail += values[i + lag] as f64;
    }
    mean_head /= pairs as f64;
    mean_tail /= pairs as f64;

    let mut cov = 0.0;
    let mut var_head = 0.0;
    let mut var_tail = 0.0;
    for i in 0..pairs {
        let dh = values[i] as f64 - mean_head;
        let dt = values[i + lag] as f64 - mean_tail;
        cov += dh * dt;
        var_head += dh * dh;
        var_tail += dt * dt;
    }

    // Exact zero-variance check, not an epsilon: genuine 64-bit-scale
    // variance must never trip the sentinel.
    if var_head <= 0.0 || var_tail <= 0.0 {
        return Ok(f64::NAN);
    }
    Ok(cov / (var_head * var_tail).sqrt())
}

/// Chi-square goodness-of-fit test of the sequence's bytes against the
/// uniform distribution on {0, ..., 255}.
///
/// Expected count per bin is `total/256` (not rounded); the p-value is the
/// chi-square survival function with 255 degrees of freedom. No significance
/// threshold is applied here. Empty input is `InvalidInput`.
pub fn chi_square_uniform(seq: &SampleSequence) -> Result<ChiSquareTest> {
    if seq.is_empty() {
        return Err(Error::InvalidInput(
            "cannot run chi-square test on an empty sequence".into(),
        ));
    }
    let hist = ByteHistogram::from_sequence(seq);
    let expected = hist.total as f64 / 256.0;
    let statistic: f64 = hist
        .counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    Ok(ChiSquareTest {
        statistic,
        p_value: gamma::chi_square_p_value(statistic, CHI_SQUARE_DF),
    })
}

/// Run the full battery over one sequence with the given autocorrelation
/// lag, propagating the first precondition failure.
pub fn run_battery(seq: &SampleSequence, lag: usize) -> Result<SequenceReport> {
    Ok(SequenceReport {
        samples: seq.len(),
        bytes: seq.byte_len(),
        entropy_bits: shannon_entropy(seq)?,
        bit_counts: bit_frequency(seq),
        autocorrelation: autocorrelation(seq, lag)?,
        lag,
        chi_square: chi_square_uniform(seq)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_from_words(words: Vec<u64>) -> SampleSequence {
        SampleSequence::new(words)
    }

    fn random_words(n: usize, seed: u64) -> SampleSequence {
        let mut words = Vec::with_capacity(n);
        let mut state = seed;
        for _ in 0..n {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            words.push(state);
        }
        SampleSequence::new(words)
    }

    #[test]
    fn histogram_counts_sum_to_byte_length() {
        let seq = random_words(1000, 0xdeadbeef);
        let hist = ByteHistogram::from_sequence(&seq);
        assert_eq!(hist.total, 8000);
        assert_eq!(hist.counts.iter().sum::<u64>(), 8000);
    }

    #[test]
    fn entropy_of_identical_bytes_is_zero() {
        let seq = seq_from_words(vec![0u64; 4]);
        assert_eq!(shannon_entropy(&seq).unwrap(), 0.0);
    }

    #[test]
    fn entropy_of_one_of_each_byte_is_exactly_eight() {
        // 32 words covering every byte value exactly once.
        let bytes: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        let seq = SampleSequence::from_bytes(&bytes).unwrap();
        assert_eq!(shannon_entropy(&seq).unwrap(), 8.0);
    }

    #[test]
    fn entropy_stays_in_range() {
        let seq = random_words(5000, 0xcafebabe);
        let h = shannon_entropy(&seq).unwrap();
        assert!((0.0..=8.0).contains(&h));
        // 40 KB of LCG output should look close to uniform at byte level.
        assert!(h > 7.9, "entropy too low: {h}");
    }

    #[test]
    fn entropy_of_empty_sequence_is_invalid_input() {
        let err = shannon_entropy(&seq_from_words(vec![])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn bit_counts_sum_to_total_bits() {
        for n in [0usize, 1, 7, 1000] {
            let seq = random_words(n, 0x12345678);
            let counts = bit_frequency(&seq);
            assert_eq!(counts.zeros + counts.ones, 8 * seq.byte_len() as u64);
        }
    }

    #[test]
    fn bit_counts_of_known_words() {
        let seq = seq_from_words(vec![u64::MAX, 0, 0xFF]);
        let counts = bit_frequency(&seq);
        assert_eq!(counts.ones, 64 + 0 + 8);
        assert_eq!(counts.zeros, 192 - 72);
    }

    #[test]
    fn bit_counts_of_empty_sequence_are_zero() {
        assert_eq!(
            bit_frequency(&seq_from_words(vec![])),
            BitCounts { zeros: 0, ones: 0 }
        );
    }

    #[test]
    fn autocorrelation_of_arithmetic_progression_is_near_one() {
        let seq = seq_from_words((0..1000).collect());
        let r = autocorrelation(&seq, 1).unwrap();
        assert!(r > 0.99, "expected strong positive correlation, got {r}");

        // Reversal preserves the relative ordering within each lagged pair.
        let rev = seq_from_words((0..1000).rev().collect());
        let r_rev = autocorrelation(&rev, 1).unwrap();
        assert!(r_rev > 0.99, "expected strong positive correlation, got {r_rev}");
    }

    #[test]
    fn autocorrelation_of_alternating_sequence_is_near_minus_one() {
        let seq = seq_from_words((0..1000).map(|i| if i % 2 == 0 { 10 } else { 20 }).collect());
        let r = autocorrelation(&seq, 1).unwrap();
        assert!(r < -0.99, "expected strong negative correlation, got {r}");
    }

    #[test]
    fn autocorrelation_of_random_data_is_near_zero() {
        let seq = random_words(10_000, 0xdeadbeef);
        let r = autocorrelation(&seq, 1).unwrap();
        assert!(r.abs() < 0.05, "unexpected structure: {r}");
    }

    #[test]
    fn autocorrelation_of_constant_sequence_is_the_nan_sentinel() {
        let seq = seq_from_words(vec![7u64; 100]);
        let r = autocorrelation(&seq, 1).unwrap();
        assert!(r.is_nan());
    }

    #[test]
    fn autocorrelation_rejects_zero_lag_and_short_sequences() {
        let seq = seq_from_words(vec![1, 2, 3]);
        assert!(matches!(
            autocorrelation(&seq, 0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            autocorrelation(&seq, 3),
            Err(Error::InvalidInput(_))
        ));
        // lag 2 leaves one pair: computable, but degenerate variance.
        assert!(autocorrelation(&seq, 2).unwrap().is_nan());
    }

    #[test]
    fn chi_square_of_perfectly_uniform_bytes_is_zero() {
        let bytes: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        let seq = SampleSequence::from_bytes(&bytes).unwrap();
        let result = chi_square_uniform(&seq).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn chi_square_of_constant_bytes_is_large() {
        // One word of zeros: bin 0 holds 8, the other 255 bins hold 0.
        // Statistic: (8 - 1/32)^2/(1/32) + 255*(1/32) = 2040.
        let seq = seq_from_words(vec![0u64]);
        let result = chi_square_uniform(&seq).unwrap();
        assert!((result.statistic - 2040.0).abs() < 1e-9);
        assert!(result.p_value < 1e-100);
    }

    #[test]
    fn chi_square_statistic_is_nonnegative_for_random_data() {
        let seq = random_words(5000, 0xfeedface);
        let result = chi_square_uniform(&seq).unwrap();
        assert!(result.statistic >= 0.0);
        // Uniform-looking data should not be rejected at the 1% level.
        assert!(result.p_value > 0.01, "p too small: {}", result.p_value);
    }

    #[test]
    fn chi_square_of_empty_sequence_is_invalid_input() {
        let err = chi_square_uniform(&seq_from_words(vec![])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn run_battery_composes_all_four_tests() {
        let seq = random_words(2000, 0xabcdef01);
        let report = run_battery(&seq, DEFAULT_LAG).unwrap();
        assert_eq!(report.samples, 2000);
        assert_eq!(report.bytes, 16_000);
        assert_eq!(report.lag, 1);
        assert_eq!(
            report.bit_counts.zeros + report.bit_counts.ones,
            16_000 * 8
        );
        assert!((0.0..=8.0).contains(&report.entropy_bits));
        assert!(report.chi_square.statistic >= 0.0);
    }

    #[test]
    fn run_battery_on_empty_sequence_fails() {
        assert!(run_battery(&seq_from_words(vec![]), 1).is_err());
    }
}
