//! SHA3-256 and SHA3-512 (FIPS 202).

use crate::{
    Error, SHA3_256_HASH_SIZE, SHA3_512_HASH_SIZE, STATE_BYTES,
    sponge::{Construction, KeccakState, Rate, Sponge},
};

/// Fixed-output SHA-3 with an `OUTPUT`-byte digest; the rate is
/// `200 - 2 * OUTPUT`.
#[derive(Clone, Debug)]
pub struct Sha3<const OUTPUT: usize> {
    sponge: Sponge,
}

pub type Sha3_256 = Sha3<SHA3_256_HASH_SIZE>;
pub type Sha3_512 = Sha3<SHA3_512_HASH_SIZE>;

impl<const OUTPUT: usize> Default for Sha3<OUTPUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const OUTPUT: usize> Sha3<OUTPUT> {
    pub const CONSTRUCTION: Construction = match OUTPUT {
        SHA3_256_HASH_SIZE => Construction::SHA3_256,
        SHA3_512_HASH_SIZE => Construction::SHA3_512,
        _ => panic!("SHA-3 is only provided with 32- and 64-byte digests"),
    };

    pub const RATE: Rate = Self::CONSTRUCTION.rate();

    const CHECK: () = assert!(Self::RATE.bytes() == STATE_BYTES - 2 * OUTPUT);

    #[must_use]
    pub const fn new() -> Self {
        let () = Self::CHECK;
        Self {
            sponge: Sponge::new(Self::CONSTRUCTION),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.sponge.update(data);
    }

    /// Absorb `nblocks` whole rate blocks from `message`.
    ///
    /// # Errors
    /// [`Error::BufferTooSmall`] if `message` holds fewer than
    /// `nblocks * RATE` bytes.
    pub fn block_update(&mut self, message: &[u8], nblocks: usize) -> Result<(), Error> {
        self.sponge.block_update(message, nblocks)
    }

    #[must_use]
    pub fn finalize(self) -> [u8; OUTPUT] {
        let mut out = [0u8; OUTPUT];
        self.sponge.finalize().read(&mut out);
        out
    }

    /// Absorb a final `tail` of any length, then pad and extract the digest.
    #[must_use]
    pub fn finalize_with(mut self, tail: &[u8]) -> [u8; OUTPUT] {
        self.update(tail);
        self.finalize()
    }
}

/// One-shot digest straight on the state, no buffering.
fn compute<const OUTPUT: usize>(message: &[u8]) -> [u8; OUTPUT] {
    let rate = Sha3::<OUTPUT>::RATE;
    let mut state = KeccakState::new();
    state.absorb(rate, message, Sha3::<OUTPUT>::CONSTRUCTION.domain());
    let mut out = [0u8; OUTPUT];
    state.squeeze(rate, &mut out);
    out
}

#[must_use]
pub fn sha3_256(message: &[u8]) -> [u8; SHA3_256_HASH_SIZE] {
    compute(message)
}

#[must_use]
pub fn sha3_512(message: &[u8]) -> [u8; SHA3_512_HASH_SIZE] {
    compute(message)
}
