//! KMAC (SP 800-185): cSHAKE keyed through a second `bytepad` block, with
//! the output length bound into the final input.

use zeroize::Zeroize;

use crate::{
    Error, KMAC_NAME,
    ct::ct_verify,
    cshake::absorb_bytepad,
    encode::{bit_length, right_encode},
    sponge::{Construction, Sponge, Strength, XofReader},
};

#[derive(Clone, Debug)]
pub struct Kmac {
    sponge: Sponge,
}

impl Kmac {
    /// Absorb the `"KMAC"` name with `custom`, then the key.
    ///
    /// # Errors
    /// [`Error::EncodingOverflow`] if `key` or `custom` is too long to encode.
    pub fn new(strength: Strength, key: &[u8], custom: &[u8]) -> Result<Self, Error> {
        let construction = Construction::kmac(strength);
        let mut sponge = Sponge::new(construction);
        absorb_bytepad(&mut sponge, &[KMAC_NAME.as_slice(), custom])?;
        absorb_bytepad(&mut sponge, &[key])?;
        tracing::trace!(
            construction = construction.name(),
            key_len = key.len(),
            custom_len = custom.len(),
            "KMAC key schedule absorbed"
        );
        Ok(Self { sponge })
    }

    pub fn update(&mut self, message: &[u8]) {
        self.sponge.update(message);
    }

    /// # Errors
    /// [`Error::BufferTooSmall`] if `message` holds fewer than
    /// `nblocks * rate` bytes.
    pub fn block_update(&mut self, message: &[u8], nblocks: usize) -> Result<(), Error> {
        self.sponge.block_update(message, nblocks)
    }

    /// Bind the output length and pad. The `right_encode` trailer goes
    /// through the buffer, so it may start a fresh block.
    fn into_reader(mut self, output_len: usize) -> Result<XofReader, Error> {
        self.sponge.write_encoded(&right_encode(bit_length(output_len)?));
        Ok(self.sponge.finalize())
    }

    /// Write a tag of exactly `output.len()` bytes.
    ///
    /// # Errors
    /// [`Error::EncodingOverflow`] if the output bit length overflows `u64`.
    pub fn finalize(self, output: &mut [u8]) -> Result<(), Error> {
        self.into_reader(output.len())?.read(output);
        Ok(())
    }

    /// Recompute an `expected_len`-byte tag and compare it with `tag` in
    /// constant time.
    ///
    /// The tag length is fixed by the caller, never by the received tag: a
    /// `tag` of any other length, or an `expected_len` of zero, is rejected
    /// without touching the sponge.
    ///
    /// # Errors
    /// [`Error::EncodingOverflow`] as for [`Kmac::finalize`].
    pub fn verify(self, tag: &[u8], expected_len: usize) -> Result<bool, Error> {
        if expected_len == 0 || tag.len() != expected_len {
            tracing::trace!(expected_len, received_len = tag.len(), "KMAC tag length rejected");
            return Ok(false);
        }
        let mut reader = self.into_reader(expected_len)?;
        let mut expected = [0u8; 64];
        let mut diff = 0u8;
        for received in tag.chunks(expected.len()) {
            let expected = &mut expected[..received.len()];
            reader.read(expected);
            diff |= ct_verify(expected, received);
        }
        expected.zeroize();
        Ok(diff == 0)
    }
}

fn compute(
    strength: Strength,
    output: &mut [u8],
    message: &[u8],
    key: &[u8],
    custom: &[u8],
) -> Result<(), Error> {
    let mut mac = Kmac::new(strength, key, custom)?;
    mac.update(message);
    mac.finalize(output)
}

/// # Errors
/// See [`Kmac::new`] and [`Kmac::finalize`].
pub fn kmac128(output: &mut [u8], message: &[u8], key: &[u8], custom: &[u8]) -> Result<(), Error> {
    compute(Strength::L128, output, message, key, custom)
}

/// # Errors
/// See [`Kmac::new`] and [`Kmac::finalize`].
pub fn kmac256(output: &mut [u8], message: &[u8], key: &[u8], custom: &[u8]) -> Result<(), Error> {
    compute(Strength::L256, output, message, key, custom)
}

/// # Errors
/// See [`Kmac::new`] and [`Kmac::finalize`].
pub fn kmac512(output: &mut [u8], message: &[u8], key: &[u8], custom: &[u8]) -> Result<(), Error> {
    compute(Strength::L512, output, message, key, custom)
}
