//! `qsc-math` -- field arithmetic for the code-based KEM.
//!
//! `no_std`, zero-allocation arithmetic over GF(2^12) = GF(2)[x]/(x^12 + x^3 + 1):
//! scalar multiplication, 64-lane bit-sliced vectors, and the additive FFT
//! that evaluates a degree < 64 polynomial at every field element.

#![no_std]
#![deny(unsafe_code)]
#![allow(clippy::cast_possible_truncation, clippy::module_name_repetitions)]

pub mod fft;
pub mod gf;
pub mod vec;

pub use fft::fft;
pub use gf::{gf_add, gf_mul};
pub use vec::{vec_add, vec_mul};

/// Field degree: elements are 12-bit polynomials over GF(2).
pub const GFBITS: usize = 12;

/// Mask selecting the 12 significant bits of a [`Gf`].
pub const GFMASK: Gf = (1 << GFBITS) - 1;

/// Number of lanes in a bit-sliced vector, and of output vectors of [`fft`].
pub const FFT_POINTS: usize = 64;

/// A field element, low [`GFBITS`] bits significant.
pub type Gf = u16;

/// 64 field elements bit-sliced: bit `l` of word `i` is bit `i` of lane `l`.
pub type BitsliceVec = [u64; GFBITS];
