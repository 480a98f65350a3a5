//! SHAKE extendable-output functions at 128, 256 and 512-bit strength.

use crate::{
    Error,
    sponge::{Construction, KeccakState, Rate, Strength, XofReader},
};

/// A SHAKE instance already keyed and padded, ready to squeeze.
#[derive(Clone, Debug)]
pub struct Shake {
    reader: XofReader,
}

impl Shake {
    /// Absorb `key` with the SHAKE domain byte.
    #[must_use]
    pub fn new(strength: Strength, key: &[u8]) -> Self {
        let construction = Construction::shake(strength);
        let mut state = KeccakState::new();
        state.absorb(construction.rate(), key, construction.domain());
        Self {
            reader: XofReader::new(state, construction.rate()),
        }
    }

    #[must_use]
    pub const fn rate(&self) -> Rate {
        self.reader.rate()
    }

    /// # Errors
    /// [`Error::BufferTooSmall`] if `output` holds fewer than
    /// `nblocks * rate` bytes.
    pub fn squeeze_blocks(&mut self, output: &mut [u8], nblocks: usize) -> Result<(), Error> {
        self.reader.squeeze_blocks(output, nblocks)
    }

    #[must_use]
    pub fn into_reader(self) -> XofReader {
        self.reader
    }
}

fn compute(strength: Strength, output: &mut [u8], key: &[u8]) {
    let construction = Construction::shake(strength);
    let mut state = KeccakState::new();
    state.absorb(construction.rate(), key, construction.domain());
    state.squeeze(construction.rate(), output);
}

/// Fill `output` with SHAKE-128(`key`).
pub fn shake128(output: &mut [u8], key: &[u8]) {
    compute(Strength::L128, output, key);
}

/// Fill `output` with SHAKE-256(`key`).
pub fn shake256(output: &mut [u8], key: &[u8]) {
    compute(Strength::L256, output, key);
}

/// Fill `output` with SHAKE-512(`key`): the SHAKE padding at rate 72.
pub fn shake512(output: &mut [u8], key: &[u8]) {
    compute(Strength::L512, output, key);
}
