//! `qsc-hash` -- Keccak-f[1600] and the SHA-3 family built on it.
//!
//! `no_std`, allocation-free. Layers, leaf first:
//!
//! | Module          | Contents |
//! |-----------------|----------|
//! | [`lanes`]       | little-endian lane loads/stores, rotations |
//! | [`permutation`] | Keccak-f[1600], compact and unrolled strategies |
//! | [`sponge`]      | [`KeccakState`] primitives, [`Construction`] table, [`Sponge`] engine |
//! | [`encode`]      | SP 800-185 `left_encode` / `right_encode` |
//! | [`sha3`]        | SHA3-256 / SHA3-512 |
//! | [`shake`]       | SHAKE-128 / 256 / 512 |
//! | [`cshake`]      | cSHAKE-128 / 256 / 512 |
//! | [`kmac`]        | KMAC-128 / 256 / 512 |
//!
//! Domain separation is carried by [`Construction`]: every primitive is the
//! same sponge engine with a different rate, domain byte and prefix.

#![no_std]
#![deny(unsafe_code)]
#![allow(clippy::cast_possible_truncation, clippy::module_name_repetitions)]

pub mod cshake;
pub mod ct;
pub mod encode;
mod error;
pub mod kmac;
pub mod lanes;
pub mod permutation;
pub mod sha3;
pub mod shake;
pub mod sponge;

pub use cshake::{CShake, cshake128, cshake256, cshake512};
pub use error::Error;
pub use kmac::{Kmac, kmac128, kmac256, kmac512};
pub use permutation::{PermutationKind, keccak_permute, permutation, set_permutation};
pub use sha3::{Sha3, Sha3_256, Sha3_512, sha3_256, sha3_512};
pub use shake::{Shake, shake128, shake256, shake512};
pub use sponge::{Construction, KeccakState, Rate, Sponge, Strength, XofReader};

/// Number of 64-bit lanes in the Keccak-f[1600] state.
pub const STATE_LANES: usize = 25;

/// Size in bytes of the Keccak-f[1600] state.
pub const STATE_BYTES: usize = STATE_LANES * 8;

/// Domain byte appended by SHA3-256 / SHA3-512.
pub const SHA3_DOMAIN: u8 = 0x06;
/// Domain byte appended by SHAKE (and by cSHAKE with empty name and customization).
pub const SHAKE_DOMAIN: u8 = 0x1F;
/// Domain byte appended by cSHAKE with a name or customization string.
pub const CSHAKE_DOMAIN: u8 = 0x04;
/// Domain byte appended by KMAC.
pub const KMAC_DOMAIN: u8 = 0x04;

pub const SHA3_256_RATE: usize = 136;
pub const SHA3_512_RATE: usize = 72;
pub const SHAKE128_RATE: usize = 168;
pub const SHAKE256_RATE: usize = 136;
pub const SHAKE512_RATE: usize = 72;

/// SHA3-256 digest size in bytes.
pub const SHA3_256_HASH_SIZE: usize = 32;
/// SHA3-512 digest size in bytes.
pub const SHA3_512_HASH_SIZE: usize = 64;

/// Function name fixed by KMAC when it instantiates cSHAKE.
pub const KMAC_NAME: &[u8; 4] = b"KMAC";
