//! `qsc` -- Keccak sponge constructions and the binary-field FFT.
//!
//! Re-exports [`qsc_hash`] (SHA-3, SHAKE, cSHAKE, KMAC over Keccak-f[1600])
//! and [`qsc_math`] (GF(2^12) arithmetic and additive FFT), and adds a
//! start-up [`self_test`] that re-derives known answers for each primitive.

#![deny(unsafe_code)]

pub mod selftest;

pub use qsc_hash as hash;
pub use qsc_hash::{
    CShake, Error, Kmac, PermutationKind, Sha3_256, Sha3_512, Shake, Strength, XofReader,
    cshake128, cshake256, cshake512, kmac128, kmac256, kmac512, set_permutation, sha3_256,
    sha3_512, shake128, shake256, shake512,
};
pub use qsc_math as math;
pub use selftest::{SelfTestError, run as self_test, run_all_strategies};
