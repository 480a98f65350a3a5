//! Additive FFT over GF(2^12) with 64 evaluation vectors.
//!
//! The input is a polynomial of degree < 64 with coefficient `k` bit-sliced
//! into lane `k`. After the transform, lane `l` of output vector `j` holds
//! the polynomial evaluated at `REVERSAL[j] | REVERSAL[l] << 6`, so the 64
//! vectors cover all 4096 field elements.
//!
//! - radix conversion: five rounds of mask/shift folding, each followed by a
//!   scaling multiply.
//! - butterflies: broadcast each lane bit to a full word in bit-reversed
//!   order, then six decimation stages with `vec_mul` twiddles.

mod consts;

pub use consts::{BUTTERFLY_CONSTS, RADIX_MASKS, RADIX_SCALARS, REVERSAL};

use crate::{
    BitsliceVec, FFT_POINTS,
    vec::{vec_add, vec_mul},
};

/// Number of butterfly stages, `log2(FFT_POINTS)`.
const STAGES: u32 = FFT_POINTS.trailing_zeros();

fn radix_conversions(input: &mut BitsliceVec) {
    for (round, scalar) in RADIX_SCALARS.iter().enumerate() {
        for word in input.iter_mut() {
            for (k, mask) in RADIX_MASKS.iter().enumerate().skip(round).rev() {
                let shift = 1 << k;
                *word ^= (*word & mask[0]) >> shift;
                *word ^= (*word & mask[1]) >> shift;
            }
        }
        *input = vec_mul(input, scalar);
    }
}

fn butterflies(out: &mut [BitsliceVec; FFT_POINTS], input: &BitsliceVec) {
    for (vec, &rev) in out.iter_mut().zip(REVERSAL.iter()) {
        for (word, &coeff) in vec.iter_mut().zip(input.iter()) {
            *word = ((coeff >> rev) & 1).wrapping_neg();
        }
    }

    // Stage `i` pairs `k` with `k + 2^i` and uses twiddles 2^i - 1 .. 2^(i+1) - 1.
    let mut ctr = 0;
    for stage in 0..STAGES {
        let half = 1 << stage;
        let twiddles = &BUTTERFLY_CONSTS[ctr..ctr + half];
        for block in out.chunks_exact_mut(2 * half) {
            let (lo, hi) = block.split_at_mut(half);
            for ((l, h), c) in lo.iter_mut().zip(hi.iter_mut()).zip(twiddles) {
                *l = vec_add(l, &vec_mul(h, c));
                *h = vec_add(h, l);
            }
        }
        ctr += half;
    }
}

/// Evaluate the bit-sliced polynomial `input` at all 4096 field elements.
///
/// `input` is overwritten by the radix conversion.
pub fn fft(out: &mut [BitsliceVec; FFT_POINTS], input: &mut BitsliceVec) {
    radix_conversions(input);
    butterflies(out, input);
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::{GFBITS, GFMASK, Gf, gf::gf_mul};

    fn bitslice(coeffs: &[Gf; FFT_POINTS]) -> BitsliceVec {
        core::array::from_fn(|bit| {
            coeffs
                .iter()
                .enumerate()
                .fold(0u64, |acc, (k, &c)| acc | (u64::from((c >> bit) & 1) << k))
        })
    }

    fn lane(v: &BitsliceVec, l: usize) -> Gf {
        (0..GFBITS).fold(0, |acc, i| acc | ((((v[i] >> l) & 1) as Gf) << i))
    }

    fn horner(coeffs: &[Gf; FFT_POINTS], x: Gf) -> Gf {
        coeffs.iter().rev().fold(0, |acc, &c| gf_mul(acc, x) ^ c)
    }

    fn transform(input: &BitsliceVec) -> [BitsliceVec; FFT_POINTS] {
        let mut out = [[0u64; GFBITS]; FFT_POINTS];
        let mut scratch = *input;
        fft(&mut out, &mut scratch);
        out
    }

    #[test]
    fn zero_maps_to_zero() {
        let out = transform(&[0; GFBITS]);
        assert!(out.iter().flatten().all(|&w| w == 0));
    }

    #[test]
    fn constant_evaluates_to_itself() {
        for c in [1, 0x9, 0x800, 0xABC] {
            let mut coeffs = [0; FFT_POINTS];
            coeffs[0] = c;
            let out = transform(&bitslice(&coeffs));
            for bit in 0..GFBITS {
                let expected = if (c >> bit) & 1 == 1 { u64::MAX } else { 0 };
                assert!(out.iter().all(|v| v[bit] == expected), "c = {c:#x} bit {bit}");
            }
        }
    }

    #[test]
    fn linear_over_gf2() {
        let mut rng = SmallRng::seed_from_u64(4096);
        for _ in 0..8 {
            let a: BitsliceVec = core::array::from_fn(|_| rng.random());
            let b: BitsliceVec = core::array::from_fn(|_| rng.random());
            let sum = transform(&vec_add(&a, &b));
            let (fa, fb) = (transform(&a), transform(&b));
            for j in 0..FFT_POINTS {
                assert_eq!(sum[j], vec_add(&fa[j], &fb[j]), "vector {j}");
            }
        }
    }

    #[test]
    fn agrees_with_horner_at_every_point() {
        let mut rng = SmallRng::seed_from_u64(62);
        let coeffs: [Gf; FFT_POINTS] = core::array::from_fn(|_| rng.random::<Gf>() & GFMASK);
        let out = transform(&bitslice(&coeffs));
        for (j, vec) in out.iter().enumerate() {
            for l in 0..FFT_POINTS {
                let x = Gf::from(REVERSAL[j]) | (Gf::from(REVERSAL[l]) << 6);
                assert_eq!(lane(vec, l), horner(&coeffs, x), "j {j} l {l}");
            }
        }
    }

    #[test]
    fn reversal_is_six_bit_mirror() {
        for (j, &r) in REVERSAL.iter().enumerate() {
            assert_eq!(usize::from(r), j.reverse_bits() >> (usize::BITS - 6));
        }
    }
}
