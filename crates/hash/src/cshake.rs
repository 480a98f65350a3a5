//! cSHAKE (SP 800-185): SHAKE with a function name and a customization
//! string absorbed ahead of the input.

use crate::{
    Error,
    encode::left_encode,
    sponge::{Construction, Sponge, Strength, XofReader},
};

/// Absorb `bytepad(left_encode(rate) || encode_string(s_1) || ..., rate)`.
pub(crate) fn absorb_bytepad(sponge: &mut Sponge, strings: &[&[u8]]) -> Result<(), Error> {
    let rate = sponge.construction().rate().bytes();
    sponge.write_encoded(&left_encode(rate as u64));
    for s in strings {
        sponge.write_string(s)?;
    }
    sponge.close_bytepad();
    Ok(())
}

#[derive(Clone, Debug)]
pub struct CShake {
    sponge: Sponge,
}

impl CShake {
    /// Prime a cSHAKE instance.
    ///
    /// With both `name` and `custom` empty this is plain SHAKE, byte for byte.
    ///
    /// # Errors
    /// [`Error::EncodingOverflow`] if a string's bit length overflows `u64`.
    pub fn new(strength: Strength, name: &[u8], custom: &[u8]) -> Result<Self, Error> {
        if name.is_empty() && custom.is_empty() {
            return Ok(Self {
                sponge: Sponge::new(Construction::shake(strength)),
            });
        }

        let construction = Construction::cshake(strength);
        let mut sponge = Sponge::new(construction);
        absorb_bytepad(&mut sponge, &[name, custom])?;
        tracing::trace!(
            construction = construction.name(),
            name_len = name.len(),
            custom_len = custom.len(),
            "cSHAKE prefix absorbed"
        );
        Ok(Self { sponge })
    }

    pub fn update(&mut self, data: &[u8]) {
        self.sponge.update(data);
    }

    #[must_use]
    pub fn finalize(self) -> XofReader {
        self.sponge.finalize()
    }
}

fn compute(
    strength: Strength,
    output: &mut [u8],
    key: &[u8],
    name: &[u8],
    custom: &[u8],
) -> Result<(), Error> {
    let mut xof = CShake::new(strength, name, custom)?;
    xof.update(key);
    xof.finalize().read(output);
    Ok(())
}

/// # Errors
/// See [`CShake::new`].
pub fn cshake128(output: &mut [u8], key: &[u8], name: &[u8], custom: &[u8]) -> Result<(), Error> {
    compute(Strength::L128, output, key, name, custom)
}

/// # Errors
/// See [`CShake::new`].
pub fn cshake256(output: &mut [u8], key: &[u8], name: &[u8], custom: &[u8]) -> Result<(), Error> {
    compute(Strength::L256, output, key, name, custom)
}

/// # Errors
/// See [`CShake::new`].
pub fn cshake512(output: &mut [u8], key: &[u8], name: &[u8], custom: &[u8]) -> Result<(), Error> {
    compute(Strength::L512, output, key, name, custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shake::{shake128, shake256, shake512};

    const DATA4: [u8; 4] = [0x00, 0x01, 0x02, 0x03];

    #[test]
    fn sp800_185_sample_1() {
        let mut out = [0u8; 32];
        cshake128(&mut out, &DATA4, b"", b"Email Signature").unwrap();
        assert_eq!(
            hex::encode(out),
            "c1c36925b6409a04f1b504fcbca9d82b4017277cb5ed2b2065fc1d3814d5aaf5"
        );
    }

    #[test]
    fn sp800_185_sample_3() {
        let mut out = [0u8; 64];
        cshake256(&mut out, &DATA4, b"", b"Email Signature").unwrap();
        assert_eq!(
            hex::encode(out),
            concat!(
                "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd1",
                "64020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c"
            )
        );
    }

    #[test]
    fn empty_name_and_custom_is_shake() {
        let key = [0x42u8; 200];
        for len in [0, 1, 71, 72, 136, 168, 200] {
            let (mut a, mut b) = ([0u8; 100], [0u8; 100]);
            cshake128(&mut a, &key[..len], b"", b"").unwrap();
            shake128(&mut b, &key[..len]);
            assert_eq!(a, b, "128 len {len}");

            cshake256(&mut a, &key[..len], b"", b"").unwrap();
            shake256(&mut b, &key[..len]);
            assert_eq!(a, b, "256 len {len}");

            cshake512(&mut a, &key[..len], b"", b"").unwrap();
            shake512(&mut b, &key[..len]);
            assert_eq!(a, b, "512 len {len}");
        }
    }

    #[test]
    fn name_alone_changes_output() {
        let (mut a, mut b) = ([0u8; 32], [0u8; 32]);
        cshake256(&mut a, b"msg", b"N", b"").unwrap();
        cshake256(&mut b, b"msg", b"", b"N").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn long_customization_spills_prefix_block() {
        let custom = [0x61u8; 300];
        let mut xof = CShake::new(Strength::L512, b"", &custom).unwrap();
        xof.update(&DATA4);
        let mut streamed = [0u8; 48];
        xof.finalize().read(&mut streamed);

        let mut one_shot = [0u8; 48];
        cshake512(&mut one_shot, &DATA4, b"", &custom).unwrap();
        assert_eq!(streamed, one_shot);
    }
}
