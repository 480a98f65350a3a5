//! The Keccak sponge: raw state primitives and one buffered engine that every
//! construction in the crate is built from.
//!
//! [`KeccakState`] exposes the fixed-policy primitives (absorb with padding,
//! block absorb, block squeeze). [`Sponge`] adds a rate-sized buffer so input
//! can arrive in arbitrary chunks, and [`Construction`] picks the rate and
//! domain byte. Finalizing a [`Sponge`] yields an [`XofReader`].

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    CSHAKE_DOMAIN, Error, KMAC_DOMAIN, SHA3_256_HASH_SIZE, SHA3_256_RATE, SHA3_512_HASH_SIZE,
    SHA3_512_RATE, SHA3_DOMAIN, SHAKE_DOMAIN, SHAKE128_RATE, SHAKE256_RATE, SHAKE512_RATE,
    STATE_BYTES, STATE_LANES,
    encode::{Encoded, bit_length, left_encode},
    lanes::{store_lanes, xor_lanes},
    permutation::keccak_permute,
};

/// Largest rate of any construction (SHAKE-128), sizes every block buffer.
pub const MAX_RATE: usize = SHAKE128_RATE;

/// Sponge rate in bytes: a positive multiple of 8 leaving non-zero capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rate(usize);

impl Rate {
    pub const R168: Self = Self(SHAKE128_RATE);
    pub const R136: Self = Self(SHAKE256_RATE);
    pub const R72: Self = Self(SHAKE512_RATE);

    /// # Errors
    /// [`Error::InvalidRate`] unless `bytes` is a positive multiple of 8 no
    /// larger than [`MAX_RATE`].
    pub const fn new(bytes: usize) -> Result<Self, Error> {
        if bytes == 0 || bytes % 8 != 0 || bytes > MAX_RATE {
            Err(Error::InvalidRate { rate: bytes })
        } else {
            Ok(Self(bytes))
        }
    }

    #[inline]
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.0
    }

    /// Capacity in bytes (`200 - rate`).
    #[inline]
    #[must_use]
    pub const fn capacity(self) -> usize {
        STATE_BYTES - self.0
    }
}

/// Security level of the SHAKE, cSHAKE and KMAC families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strength {
    L128,
    L256,
    L512,
}

impl Strength {
    #[must_use]
    pub const fn rate(self) -> Rate {
        match self {
            Self::L128 => Rate::R168,
            Self::L256 => Rate::R136,
            Self::L512 => Rate::R72,
        }
    }
}

/// A sponge configuration: which rate to run at and which domain byte to
/// pad with.
///
/// Only the unprefixed SHA-3 and SHAKE configurations are public. The cSHAKE
/// and KMAC ones need a `bytepad` prefix (and KMAC a length trailer) that a
/// bare [`Sponge`] does not write, so they are reachable only through
/// [`CShake`](crate::CShake) and [`Kmac`](crate::Kmac).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Construction {
    name: &'static str,
    rate: Rate,
    domain: u8,
}

impl Construction {
    pub const SHA3_256: Self = Self::new("SHA3-256", SHA3_256_RATE, SHA3_DOMAIN);
    pub const SHA3_512: Self = Self::new("SHA3-512", SHA3_512_RATE, SHA3_DOMAIN);
    pub const SHAKE_128: Self = Self::new("SHAKE-128", SHAKE128_RATE, SHAKE_DOMAIN);
    pub const SHAKE_256: Self = Self::new("SHAKE-256", SHAKE256_RATE, SHAKE_DOMAIN);
    pub const SHAKE_512: Self = Self::new("SHAKE-512", SHAKE512_RATE, SHAKE_DOMAIN);
    pub(crate) const CSHAKE_128: Self = Self::new("cSHAKE-128", SHAKE128_RATE, CSHAKE_DOMAIN);
    pub(crate) const CSHAKE_256: Self = Self::new("cSHAKE-256", SHAKE256_RATE, CSHAKE_DOMAIN);
    pub(crate) const CSHAKE_512: Self = Self::new("cSHAKE-512", SHAKE512_RATE, CSHAKE_DOMAIN);
    pub(crate) const KMAC_128: Self = Self::new("KMAC-128", SHAKE128_RATE, KMAC_DOMAIN);
    pub(crate) const KMAC_256: Self = Self::new("KMAC-256", SHAKE256_RATE, KMAC_DOMAIN);
    pub(crate) const KMAC_512: Self = Self::new("KMAC-512", SHAKE512_RATE, KMAC_DOMAIN);

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn rate(self) -> Rate {
        self.rate
    }

    #[must_use]
    pub const fn domain(self) -> u8 {
        self.domain
    }

    /// Panics at compile time on an invalid rate when used in a const.
    const fn new(name: &'static str, rate: usize, domain: u8) -> Self {
        let rate = match Rate::new(rate) {
            Ok(rate) => rate,
            Err(_) => panic!("construction rate must be a positive multiple of 8"),
        };
        Self { name, rate, domain }
    }

    #[must_use]
    pub const fn shake(strength: Strength) -> Self {
        match strength {
            Strength::L128 => Self::SHAKE_128,
            Strength::L256 => Self::SHAKE_256,
            Strength::L512 => Self::SHAKE_512,
        }
    }

    #[must_use]
    pub(crate) const fn cshake(strength: Strength) -> Self {
        match strength {
            Strength::L128 => Self::CSHAKE_128,
            Strength::L256 => Self::CSHAKE_256,
            Strength::L512 => Self::CSHAKE_512,
        }
    }

    #[must_use]
    pub(crate) const fn kmac(strength: Strength) -> Self {
        match strength {
            Strength::L128 => Self::KMAC_128,
            Strength::L256 => Self::KMAC_256,
            Strength::L512 => Self::KMAC_512,
        }
    }
}

const _: () = {
    // SHA-3 capacity is twice the digest size.
    assert!(Construction::SHA3_256.rate.capacity() == 2 * SHA3_256_HASH_SIZE);
    assert!(Construction::SHA3_512.rate.capacity() == 2 * SHA3_512_HASH_SIZE);
    // The XOF families share rates level by level.
    assert!(Construction::SHAKE_256.rate.bytes() == Construction::SHA3_256.rate.bytes());
    assert!(Construction::SHAKE_512.rate.bytes() == Construction::SHA3_512.rate.bytes());
    assert!(Construction::CSHAKE_128.rate.bytes() == Construction::SHAKE_128.rate.bytes());
    assert!(Construction::KMAC_128.rate.bytes() == Construction::CSHAKE_128.rate.bytes());
    assert!(Construction::KMAC_256.rate.bytes() == Construction::CSHAKE_256.rate.bytes());
    assert!(Construction::KMAC_512.rate.bytes() == Construction::CSHAKE_512.rate.bytes());
    // Domain bytes leave the final pad bit free.
    assert!(SHA3_DOMAIN & 0x80 == 0 && SHAKE_DOMAIN & 0x80 == 0 && CSHAKE_DOMAIN & 0x80 == 0);
};

#[inline]
fn check_len(needed: Option<usize>, actual: usize) -> Result<usize, Error> {
    match needed {
        Some(needed) if needed <= actual => Ok(needed),
        needed => Err(Error::BufferTooSmall {
            needed: needed.unwrap_or(usize::MAX),
            actual,
        }),
    }
}

/// The 1600-bit Keccak state as 25 little-endian lanes.
///
/// Cleared on drop. Methods take `&mut self`, so a state can never be
/// driven from two places at once.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState {
    lanes: [u64; STATE_LANES],
}

impl fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeccakState").finish_non_exhaustive()
    }
}

impl KeccakState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lanes: [0; STATE_LANES],
        }
    }

    pub(crate) const fn lanes(&self) -> &[u64; STATE_LANES] {
        &self.lanes
    }

    #[inline]
    pub fn permute(&mut self) {
        keccak_permute(&mut self.lanes);
    }

    /// XOR one `rate`-byte block into the state and permute.
    #[inline]
    pub(crate) fn absorb_block(&mut self, block: &[u8]) {
        xor_lanes(&mut self.lanes, block);
        self.permute();
    }

    /// XOR the final padded block without permuting; the permutation is
    /// deferred to the first squeeze.
    #[inline]
    pub(crate) fn absorb_final(&mut self, block: &[u8]) {
        xor_lanes(&mut self.lanes, block);
    }

    /// Absorb `input` in full blocks, then pad the tail with `domain` and
    /// the closing `0x80` bit.
    pub fn absorb(&mut self, rate: Rate, input: &[u8], domain: u8) {
        let rate = rate.bytes();
        let mut blocks = input.chunks_exact(rate);
        for block in &mut blocks {
            self.absorb_block(block);
        }

        let tail = blocks.remainder();
        let mut last = [0u8; MAX_RATE];
        last[..tail.len()].copy_from_slice(tail);
        last[tail.len()] = domain;
        last[rate - 1] |= 0x80;
        self.absorb_final(&last[..rate]);
        last.zeroize();
    }

    /// Absorb exactly `nblocks` whole blocks from the front of `message`.
    ///
    /// # Errors
    /// [`Error::BufferTooSmall`] if `message` is shorter than `nblocks * rate`.
    pub fn absorb_blocks(&mut self, rate: Rate, message: &[u8], nblocks: usize) -> Result<(), Error> {
        let rate = rate.bytes();
        let needed = check_len(nblocks.checked_mul(rate), message.len())?;
        for block in message[..needed].chunks_exact(rate) {
            self.absorb_block(block);
        }
        Ok(())
    }

    /// Permute then copy out one block, `nblocks` times.
    ///
    /// # Errors
    /// [`Error::BufferTooSmall`] if `output` is shorter than `nblocks * rate`.
    pub fn squeeze_blocks(
        &mut self,
        rate: Rate,
        output: &mut [u8],
        nblocks: usize,
    ) -> Result<(), Error> {
        let rate = rate.bytes();
        let needed = check_len(nblocks.checked_mul(rate), output.len())?;
        for block in output[..needed].chunks_exact_mut(rate) {
            self.permute();
            store_lanes(&self.lanes, block);
        }
        Ok(())
    }

    /// Fill `output` completely: whole blocks, then one truncated block.
    pub fn squeeze(&mut self, rate: Rate, output: &mut [u8]) {
        for block in output.chunks_mut(rate.bytes()) {
            self.permute();
            store_lanes(&self.lanes, block);
        }
    }
}

/// Buffered absorb engine shared by every construction.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    state: KeccakState,
    #[zeroize(skip)]
    construction: Construction,
    buf: [u8; MAX_RATE],
    pos: usize,
}

impl fmt::Debug for Sponge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sponge")
            .field("construction", &self.construction.name)
            .field("buffered", &self.pos)
            .finish_non_exhaustive()
    }
}

impl Sponge {
    #[must_use]
    pub const fn new(construction: Construction) -> Self {
        Self {
            state: KeccakState::new(),
            construction,
            buf: [0; MAX_RATE],
            pos: 0,
        }
    }

    #[must_use]
    pub const fn construction(&self) -> Construction {
        self.construction
    }

    #[inline]
    const fn rate(&self) -> usize {
        self.construction.rate.bytes()
    }

    fn absorb_buffer(&mut self) {
        let rate = self.rate();
        self.state.absorb_block(&self.buf[..rate]);
        self.pos = 0;
    }

    /// Absorb `data`; may be called any number of times with any chunking.
    pub fn update(&mut self, data: &[u8]) {
        let rate = self.rate();
        let mut data = data;

        if self.pos > 0 {
            let n = (rate - self.pos).min(data.len());
            self.buf[self.pos..self.pos + n].copy_from_slice(&data[..n]);
            self.pos += n;
            data = &data[n..];
            if self.pos < rate {
                return;
            }
            self.absorb_buffer();
        }

        let mut blocks = data.chunks_exact(rate);
        for block in &mut blocks {
            self.state.absorb_block(block);
        }
        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    /// Absorb `nblocks` whole blocks from the front of `message`.
    ///
    /// # Errors
    /// [`Error::BufferTooSmall`] if `message` is shorter than `nblocks * rate`.
    pub fn block_update(&mut self, message: &[u8], nblocks: usize) -> Result<(), Error> {
        let needed = check_len(nblocks.checked_mul(self.rate()), message.len())?;
        self.update(&message[..needed]);
        Ok(())
    }

    #[inline]
    pub(crate) fn write_encoded(&mut self, encoded: &Encoded) {
        self.update(encoded.as_bytes());
    }

    /// `encode_string(s) = left_encode(8 * len(s)) || s`.
    pub(crate) fn write_string(&mut self, s: &[u8]) -> Result<(), Error> {
        self.write_encoded(&left_encode(bit_length(s.len())?));
        self.update(s);
        Ok(())
    }

    /// Zero-fill the open block and absorb it, completing a `bytepad`.
    pub(crate) fn close_bytepad(&mut self) {
        if self.pos != 0 {
            let rate = self.rate();
            self.buf[self.pos..rate].fill(0);
            self.absorb_buffer();
        }
    }

    /// Pad with the construction's domain byte and switch to squeezing.
    #[must_use]
    pub fn finalize(mut self) -> XofReader {
        let rate = self.rate();
        self.buf[self.pos..rate].fill(0);
        self.buf[self.pos] = self.construction.domain;
        self.buf[rate - 1] |= 0x80;
        self.state.absorb_final(&self.buf[..rate]);

        XofReader::new(core::mem::take(&mut self.state), self.construction.rate)
    }
}

/// Squeezing half of a finalized sponge.
///
/// Reads may be split at any byte boundary; the concatenated output is the
/// same stream a single read would produce.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XofReader {
    state: KeccakState,
    #[zeroize(skip)]
    rate: Rate,
    buf: [u8; MAX_RATE],
    pos: usize,
}

impl fmt::Debug for XofReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XofReader")
            .field("rate", &self.rate)
            .finish_non_exhaustive()
    }
}

impl XofReader {
    /// Reader over an already padded state; the first read permutes.
    #[must_use]
    pub const fn new(state: KeccakState, rate: Rate) -> Self {
        Self {
            state,
            rate,
            buf: [0; MAX_RATE],
            pos: rate.bytes(),
        }
    }

    #[must_use]
    pub const fn rate(&self) -> Rate {
        self.rate
    }

    pub fn read(&mut self, output: &mut [u8]) {
        let rate = self.rate.bytes();
        let mut written = 0;
        while written < output.len() {
            if self.pos == rate {
                self.state.permute();
                store_lanes(self.state.lanes(), &mut self.buf[..rate]);
                self.pos = 0;
            }
            let n = (rate - self.pos).min(output.len() - written);
            output[written..written + n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
            self.pos += n;
            written += n;
        }
    }

    /// Squeeze `nblocks` whole blocks into the front of `output`.
    ///
    /// # Errors
    /// [`Error::BufferTooSmall`] if `output` is shorter than `nblocks * rate`.
    pub fn squeeze_blocks(&mut self, output: &mut [u8], nblocks: usize) -> Result<(), Error> {
        let rate = self.rate.bytes();
        if self.pos == rate {
            self.state.squeeze_blocks(self.rate, output, nblocks)
        } else {
            let needed = check_len(nblocks.checked_mul(rate), output.len())?;
            self.read(&mut output[..needed]);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_validation() {
        assert_eq!(Rate::new(136).map(Rate::bytes), Ok(136));
        assert_eq!(Rate::new(0), Err(Error::InvalidRate { rate: 0 }));
        assert_eq!(Rate::new(100), Err(Error::InvalidRate { rate: 100 }));
        assert_eq!(Rate::new(200), Err(Error::InvalidRate { rate: 200 }));
        assert_eq!(Rate::new(176), Err(Error::InvalidRate { rate: 176 }));
    }

    #[test]
    fn strength_rates() {
        assert_eq!(Strength::L128.rate().bytes(), 168);
        assert_eq!(Strength::L256.rate().bytes(), 136);
        assert_eq!(Strength::L512.rate().bytes(), 72);
    }

    #[test]
    fn absorb_pads_empty_input() {
        let mut state = KeccakState::new();
        state.absorb(Rate::R136, &[], SHA3_DOMAIN);
        let lanes = state.lanes();
        assert_eq!(lanes[0], 0x06);
        assert_eq!(lanes[16], 0x80 << 56);
        assert!(lanes[1..16].iter().all(|&l| l == 0));
        assert!(lanes[17..].iter().all(|&l| l == 0));
    }

    #[test]
    fn domain_and_end_bit_share_last_byte() {
        let mut state = KeccakState::new();
        state.absorb(Rate::R72, &[0xAA; 71], SHAKE_DOMAIN);
        assert_eq!(state.lanes()[8] >> 56, u64::from(SHAKE_DOMAIN | 0x80));
    }

    #[test]
    fn block_calls_reject_short_buffers() {
        let mut state = KeccakState::new();
        assert_eq!(
            state.absorb_blocks(Rate::R72, &[0; 100], 2),
            Err(Error::BufferTooSmall {
                needed: 144,
                actual: 100,
            })
        );
        let mut out = [0u8; 10];
        assert_eq!(
            state.squeeze_blocks(Rate::R72, &mut out, 1),
            Err(Error::BufferTooSmall {
                needed: 72,
                actual: 10,
            })
        );
        assert!(matches!(
            state.absorb_blocks(Rate::R72, &[], usize::MAX),
            Err(Error::BufferTooSmall { needed: usize::MAX, .. })
        ));
    }

    #[test]
    fn engine_matches_state_primitives() {
        let msg: [u8; 300] = core::array::from_fn(|i| i as u8);

        let mut state = KeccakState::new();
        state.absorb(Rate::R136, &msg, SHAKE_DOMAIN);
        let mut expected = [0u8; 400];
        state.squeeze(Rate::R136, &mut expected);

        let mut sponge = Sponge::new(Construction::SHAKE_256);
        for chunk in msg.chunks(7) {
            sponge.update(chunk);
        }
        let mut reader = sponge.finalize();
        let mut got = [0u8; 400];
        for chunk in got.chunks_mut(33) {
            reader.read(chunk);
        }
        assert_eq!(got, expected);
    }

    #[test]
    fn reader_blocks_after_partial_read() {
        let mut a = Sponge::new(Construction::SHAKE_128).finalize();
        let mut b = a.clone();

        let mut whole = [0u8; 2 * 168 + 5];
        a.read(&mut whole);

        let mut head = [0u8; 5];
        b.read(&mut head);
        let mut blocks = [0u8; 2 * 168];
        b.squeeze_blocks(&mut blocks, 2).unwrap();
        assert_eq!(&whole[..5], &head);
        assert_eq!(&whole[5..], &blocks[..]);
    }

    #[test]
    fn bytepad_close_is_noop_when_aligned() {
        let mut a = Sponge::new(Construction::CSHAKE_512);
        a.update(&[1; 72]);
        let before = a.state.clone();
        a.close_bytepad();
        assert!(a.state == before);
    }

    #[test]
    fn only_unprefixed_constructions_are_public() {
        let public = [
            Construction::SHA3_256,
            Construction::SHA3_512,
            Construction::SHAKE_128,
            Construction::SHAKE_256,
            Construction::SHAKE_512,
        ];
        for c in public {
            assert!(
                c.domain() == SHA3_DOMAIN || c.domain() == SHAKE_DOMAIN,
                "{} needs a prefix",
                c.name()
            );
        }

        for strength in [Strength::L128, Strength::L256, Strength::L512] {
            for c in [Construction::cshake(strength), Construction::kmac(strength)] {
                assert_eq!(c.domain(), CSHAKE_DOMAIN, "{}", c.name());
                assert_eq!(c.rate(), strength.rate());
                assert!(!public.contains(&c));
            }
        }
    }
}
