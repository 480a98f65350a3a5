//! Scalar GF(2^12) arithmetic, constant time.

use crate::{GFBITS, GFMASK, Gf};

#[inline]
#[must_use]
pub const fn gf_add(a: Gf, b: Gf) -> Gf {
    a ^ b
}

/// Product of `a` and `b` modulo `x^12 + x^3 + 1`.
#[must_use]
pub const fn gf_mul(a: Gf, b: Gf) -> Gf {
    let a = (a & GFMASK) as u32;
    let b = (b & GFMASK) as u32;

    let mut t = 0u32;
    let mut i = 0;
    while i < GFBITS {
        t ^= a * (b & (1 << i));
        i += 1;
    }

    // Fold x^14..x^22, then x^12..x^13, using x^12 = x^3 + 1.
    let high = t & 0x7F_C000;
    t ^= (high >> 9) ^ (high >> 12);
    let high = t & 0x3000;
    t ^= (high >> 9) ^ (high >> 12);

    (t as Gf) & GFMASK
}
