//! Constant-time tag comparison for MAC verification.

/// Compare two equal-length tags without branching on their contents.
///
/// Returns 0 when equal, 1 otherwise. Panics if the lengths differ, since
/// tag length is public.
#[inline]
#[must_use]
pub fn ct_verify(expected: &[u8], received: &[u8]) -> u8 {
    assert_eq!(expected.len(), received.len(), "ct_verify: tag length mismatch");

    let diff = expected
        .iter()
        .zip(received)
        .fold(0u8, |acc, (&x, &y)| acc | (x ^ y));
    let diff = u32::from(core::hint::black_box(diff));
    // 0 stays 0, 1..=255 wraps to a value with the top bit set.
    (diff.wrapping_neg() >> 31) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_tags() {
        let tag = [0x3Cu8; 32];
        assert_eq!(ct_verify(&tag, &tag), 0);
        assert_eq!(ct_verify(&[], &[]), 0);
    }

    #[test]
    fn any_single_bit_flip_is_detected() {
        let tag = [0u8; 16];
        for byte in 0..tag.len() {
            for bit in 0..8 {
                let mut forged = tag;
                forged[byte] ^= 1 << bit;
                assert_eq!(ct_verify(&tag, &forged), 1, "byte {byte} bit {bit}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "tag length mismatch")]
    fn length_mismatch_panics() {
        let _ = ct_verify(&[0; 4], &[0; 5]);
    }
}
