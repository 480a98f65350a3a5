//! SP 800-185 integer encodings.
//!
//! `left_encode(x)` is the byte count `n` followed by the `n` big-endian bytes
//! of `x`; `right_encode(x)` puts `n` last. Zero encodes with one value byte,
//! so both encodings are 2 to 9 bytes long.

use core::fmt;

use crate::Error;

/// Longest possible encoding: one length byte plus eight value bytes.
pub const MAX_ENCODED_LEN: usize = 9;

/// A `left_encode` / `right_encode` result held inline.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    buf: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl Encoded {
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Never true; present for clippy's `len_without_is_empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Encoded").field(&self.as_bytes()).finish()
    }
}

/// Number of big-endian bytes needed for `value`, at least one.
#[inline]
const fn significant_bytes(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    if bits == 0 { 1 } else { bits.div_ceil(8) as usize }
}

#[must_use]
pub fn left_encode(value: u64) -> Encoded {
    let n = significant_bytes(value);
    let mut buf = [0u8; MAX_ENCODED_LEN];
    buf[0] = n as u8;
    buf[1..=n].copy_from_slice(&value.to_be_bytes()[8 - n..]);
    Encoded { buf, len: n + 1 }
}

#[must_use]
pub fn right_encode(value: u64) -> Encoded {
    let n = significant_bytes(value);
    let mut buf = [0u8; MAX_ENCODED_LEN];
    buf[..n].copy_from_slice(&value.to_be_bytes()[8 - n..]);
    buf[n] = n as u8;
    Encoded { buf, len: n + 1 }
}

/// `8 * len` as the bit count fed to the encoders.
///
/// # Errors
/// [`Error::EncodingOverflow`] if the bit count does not fit in 64 bits.
pub fn bit_length(len: usize) -> Result<u64, Error> {
    u64::try_from(len)
        .ok()
        .and_then(|l| l.checked_mul(8))
        .ok_or(Error::EncodingOverflow { len })
}
