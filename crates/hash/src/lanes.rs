//! Lane-level helpers: little-endian word conversion and rotation.
//!
//! The Keccak state is 25 little-endian 64-bit lanes; every byte-oriented
//! operation in the crate goes through these.

use crate::STATE_LANES;

/// Read the first 8 bytes of `bytes` as a little-endian `u64`.
#[inline]
#[must_use]
pub fn load_le64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Write `word` little-endian into the first 8 bytes of `out`.
#[inline]
pub fn store_le64(out: &mut [u8], word: u64) {
    out[..8].copy_from_slice(&word.to_le_bytes());
}

#[inline]
#[must_use]
pub const fn rotl64(word: u64, n: u32) -> u64 {
    word.rotate_left(n)
}

/// XOR `block` into the leading lanes of the state.
///
/// `block.len()` must be a multiple of 8 and at most 200.
#[inline]
pub fn xor_lanes(lanes: &mut [u64; STATE_LANES], block: &[u8]) {
    debug_assert!(block.len().is_multiple_of(8));
    for (chunk, lane) in block.chunks_exact(8).zip(lanes.iter_mut()) {
        *lane ^= load_le64(chunk);
    }
}

/// Copy the leading `out.len()` bytes of the state into `out`.
///
/// A trailing partial lane is truncated, so any length up to 200 works.
#[inline]
pub fn store_lanes(lanes: &[u64; STATE_LANES], out: &mut [u8]) {
    debug_assert!(out.len() <= STATE_LANES * 8);
    for (chunk, &lane) in out.chunks_mut(8).zip(lanes.iter()) {
        let bytes = lane.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn le64_roundtrip() {
        let mut buf = [0u8; 8];
        store_le64(&mut buf, 0x0102_0304_0506_0708);
        assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(load_le64(&buf), 0x0102_0304_0506_0708);
    }

    #[test]
    fn rotl64_wraps_high_bit() {
        assert_eq!(rotl64(0x8000_0000_0000_0001, 1), 3);
        assert_eq!(rotl64(0xDEAD_BEEF, 0), 0xDEAD_BEEF);
        assert_eq!(rotl64(1, 63), 1 << 63);
    }

    #[test]
    fn xor_then_store_recovers_block() {
        let block: [u8; 24] = core::array::from_fn(|i| i as u8 * 11);
        let mut lanes = [0u64; STATE_LANES];
        xor_lanes(&mut lanes, &block);
        assert_eq!(lanes[0], load_le64(&block[..8]));
        assert_eq!(lanes[3], 0);

        let mut out = [0u8; 24];
        store_lanes(&lanes, &mut out);
        assert_eq!(out, block);
    }

    #[test]
    fn store_lanes_truncates_partial_lane() {
        let mut lanes = [0u64; STATE_LANES];
        lanes[0] = u64::from_le_bytes(*b"abcdefgh");
        lanes[1] = u64::from_le_bytes(*b"ijklmnop");
        let mut out = [0u8; 11];
        store_lanes(&lanes, &mut out);
        assert_eq!(&out, b"abcdefghijk");
    }
}
