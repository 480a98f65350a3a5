//! Bit-sliced GF(2^12) vector arithmetic: 64 lane-wise operations per call.

use crate::{BitsliceVec, GFBITS};

#[inline]
#[must_use]
pub fn vec_add(f: &BitsliceVec, g: &BitsliceVec) -> BitsliceVec {
    core::array::from_fn(|i| f[i] ^ g[i])
}

/// Lane-wise product: schoolbook over the 12 bit planes, then reduction
/// of planes 22..=12 with `x^12 = x^3 + 1`.
#[must_use]
pub fn vec_mul(f: &BitsliceVec, g: &BitsliceVec) -> BitsliceVec {
    let mut buf = [0u64; 2 * GFBITS - 1];
    for (i, &fi) in f.iter().enumerate() {
        for (j, &gj) in g.iter().enumerate() {
            buf[i + j] ^= fi & gj;
        }
    }

    for i in (GFBITS..2 * GFBITS - 1).rev() {
        buf[i - GFBITS + 3] ^= buf[i];
        buf[i - GFBITS] ^= buf[i];
    }

    core::array::from_fn(|i| buf[i])
}
