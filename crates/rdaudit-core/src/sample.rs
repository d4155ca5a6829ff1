//! Sample sequences: ordered 64-bit words read from a raw capture file.
//!
//! A collector writes each hardware RNG output as a little-endian `u64`
//! directly to disk; this module reads such a file back into an immutable
//! in-memory sequence. Byte order is fixed at little-endian — it is never
//! re-inferred from content, and both sequences of a comparison must come
//! from collectors using the same order.

use std::path::Path;

use crate::error::{Error, Result};

/// Bytes per sample word.
pub const WORD_BYTES: usize = 8;

/// An ordered, immutable sequence of 64-bit unsigned samples from one
/// entropy source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSequence {
    values: Vec<u64>,
}

impl SampleSequence {
    /// Wrap an already-decoded word vector.
    pub fn new(values: Vec<u64>) -> Self {
        Self { values }
    }

    /// Decode a raw byte buffer as little-endian 64-bit words.
    ///
    /// Fails with `InvalidInput` when the buffer length is not a multiple of
    /// eight — a truncated capture is reported, not silently shortened.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % WORD_BYTES != 0 {
            return Err(Error::InvalidInput(format!(
                "buffer length {} is not a multiple of {WORD_BYTES}",
                bytes.len()
            )));
        }
        let values = bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| u64::from_le_bytes(chunk.try_into().unwrap()))
            .collect();
        Ok(Self { values })
    }

    /// Read a whole raw capture file and decode it as little-endian words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let seq = Self::from_bytes(&bytes)?;
        log::debug!(
            "loaded {} samples ({} bytes) from {}",
            seq.len(),
            bytes.len(),
            path.display()
        );
        Ok(seq)
    }

    /// Number of sample words.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The decoded words, in capture order.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Total bytes in the underlying representation.
    pub fn byte_len(&self) -> usize {
        self.values.len() * WORD_BYTES
    }

    /// The little-endian byte expansion of the sequence, in order.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.iter().flat_map(|v| v.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_words() {
        let seq = SampleSequence::from_bytes(&[0x01, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(seq.values(), &[1u64]);
        assert_eq!(seq.byte_len(), 8);
    }

    #[test]
    fn empty_buffer_is_an_empty_sequence() {
        let seq = SampleSequence::from_bytes(&[]).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.byte_len(), 0);
    }

    #[test]
    fn misaligned_buffer_is_rejected() {
        let err = SampleSequence::from_bytes(&[0u8; 12]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn byte_expansion_round_trips() {
        let seq = SampleSequence::new(vec![0x0807_0605_0403_0201, u64::MAX]);
        let bytes: Vec<u8> = seq.bytes().collect();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&bytes[8..], &[0xFF; 8]);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.bin");
        std::fs::write(&path, 42u64.to_le_bytes()).unwrap();
        let seq = SampleSequence::from_file(&path).unwrap();
        assert_eq!(seq.values(), &[42]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SampleSequence::from_file("/nonexistent/samples.bin").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
