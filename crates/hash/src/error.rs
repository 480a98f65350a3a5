use thiserror::Error;

/// Precondition failures at the public API edge.
///
/// All of these are programmer errors: nothing here is transient and
/// retrying the same call fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Rate is zero, not a multiple of 8, or leaves no capacity.
    #[error("invalid sponge rate: {rate} bytes")]
    InvalidRate {
        /// Rejected rate in bytes.
        rate: usize,
    },
    /// Caller buffer holds fewer bytes than the operation writes or reads.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes the operation requires.
        needed: usize,
        /// Bytes actually available.
        actual: usize,
    },
    /// A byte length whose bit length does not fit the integer encoding.
    #[error("length of {len} bytes overflows the SP 800-185 encoding")]
    EncodingOverflow {
        /// Offending length in bytes.
        len: usize,
    },
}
