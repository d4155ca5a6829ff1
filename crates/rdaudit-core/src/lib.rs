//! # rdaudit-core
//!
//! **Does this bitstream look uniformly random?**
//!
//! `rdaudit-core` evaluates the statistical quality of raw hardware RNG
//! output — RDRAND-style fast generators and RDSEED-style true-entropy
//! seeders — captured as files of little-endian 64-bit samples. The core is
//! a four-test battery plus a comparative view between two sources.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rdaudit_core::{SampleSequence, run_battery, DEFAULT_LAG};
//!
//! let rdrand = SampleSequence::from_file("rdrand_raw.bin")?;
//! let report = run_battery(&rdrand, DEFAULT_LAG)?;
//!
//! println!("entropy: {:.4} bits / 8.0", report.entropy_bits);
//! println!("chi-square p-value: {:.4}", report.chi_square.p_value);
//! # Ok::<(), rdaudit_core::Error>(())
//! ```
//!
//! ## Architecture
//!
//! Loader → Battery (×2, once per source) → Comparator → Report/Plot sink
//!
//! The battery itself is pure and synchronous: no I/O, no shared state, no
//! verdicts. It surfaces numbers (entropy in bits, zero/one counts, a lag-k
//! Pearson coefficient, a chi-square statistic with p-value) and leaves
//! significance judgments to the caller. A zero-variance autocorrelation is
//! reported as the `f64::NAN` sentinel — "inconclusive", distinct from an
//! `InvalidInput` error.

pub mod battery;
pub mod compare;
pub mod error;
pub mod gamma;
pub mod render;
pub mod sample;

pub use battery::{
    BitCounts, ByteHistogram, CHI_SQUARE_DF, ChiSquareTest, DEFAULT_LAG, SequenceReport,
    autocorrelation, bit_frequency, chi_square_uniform, run_battery, shannon_entropy,
};
pub use compare::{DEFAULT_PAIR_BOUND, PairedSamples, paired_prefix};
pub use error::{Error, Result};
pub use gamma::chi_square_p_value;
pub use render::{
    HISTOGRAM_BINS, HistogramRequest, ScatterRequest, render_histogram, render_scatter,
    write_histogram, write_scatter,
};
pub use sample::{SampleSequence, WORD_BYTES};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
