use super::{PI_LANES, Permute, RHO_OFFSETS, ROUND_CONSTANTS};
use crate::{STATE_LANES, lanes::rotl64};

/// Table-driven Keccak-f[1600]: a short loop per step, small code size.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compact;

impl Permute for Compact {
    fn permute(a: &mut [u64; STATE_LANES]) {
        for &rc in &ROUND_CONSTANTS {
            // theta
            let mut c = [0u64; 5];
            for x in 0..5 {
                c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
            }
            for x in 0..5 {
                let d = c[(x + 4) % 5] ^ rotl64(c[(x + 1) % 5], 1);
                for y in (0..STATE_LANES).step_by(5) {
                    a[y + x] ^= d;
                }
            }

            // rho and pi
            let mut last = a[1];
            for (&dst, &rot) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
                let next = a[dst];
                a[dst] = rotl64(last, rot);
                last = next;
            }

            // chi
            for y in (0..STATE_LANES).step_by(5) {
                let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];
                for x in 0..5 {
                    a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
                }
            }

            // iota
            a[0] ^= rc;
        }
    }
}
