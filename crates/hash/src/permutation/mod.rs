//! Keccak-f[1600]: 24 rounds of theta, rho, pi, chi, iota over 25 lanes.
//!
//! Two interchangeable strategies implement [`Permute`]:
//!
//! - [`Compact`]: one loop per step, driven by the [`RHO_OFFSETS`] and
//!   [`PI_LANES`] tables.
//! - [`Unrolled`]: two rounds per iteration over named lane variables, no
//!   table lookups inside a round.
//!
//! Both are bit-identical. [`keccak_permute`] dispatches to whichever one is
//! selected process-wide by [`set_permutation`].

mod compact;
mod unrolled;

use core::{
    fmt::Display,
    sync::atomic::{AtomicU8, Ordering},
};

pub use compact::Compact;
pub use unrolled::Unrolled;

use crate::STATE_LANES;

/// Number of rounds in Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Iota round constants, round 0 first.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation amounts, listed in the order pi visits the lanes starting
/// from lane 1 (lane 0 is never rotated).
pub const RHO_OFFSETS: [u32; ROUNDS] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi destination lane for each step of the rho/pi walk.
pub const PI_LANES: [usize; ROUNDS] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// A Keccak-f[1600] implementation strategy.
pub trait Permute {
    /// Apply all 24 rounds to `lanes` in place.
    fn permute(lanes: &mut [u64; STATE_LANES]);
}

/// Runtime-selectable permutation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PermutationKind {
    Compact  = 0,
    Unrolled = 1,
}

impl Display for PermutationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Compact => f.write_str("compact"),
            Self::Unrolled => f.write_str("unrolled"),
        }
    }
}

impl From<u8> for PermutationKind {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Compact,
            _ => Self::Unrolled,
        }
    }
}

impl PermutationKind {
    /// Strategy used until [`set_permutation`] is called.
    pub const DEFAULT: Self = if cfg!(feature = "compact-permutation") {
        Self::Compact
    } else {
        Self::Unrolled
    };

    /// Run this strategy directly, bypassing the global selection.
    #[inline]
    pub fn apply(self, lanes: &mut [u64; STATE_LANES]) {
        match self {
            Self::Compact => Compact::permute(lanes),
            Self::Unrolled => Unrolled::permute(lanes),
        }
    }
}

static PERMUTATION: AtomicU8 = AtomicU8::new(PermutationKind::DEFAULT as u8);

/// Select the permutation strategy used by every sponge in the process.
///
/// Both strategies produce identical output, so switching is safe at any
/// time, including between absorb and squeeze of the same state.
pub fn set_permutation(kind: PermutationKind) {
    let previous = PermutationKind::from(PERMUTATION.swap(kind as u8, Ordering::Relaxed));
    if previous != kind {
        tracing::debug!(%previous, current = %kind, "keccak permutation strategy changed");
    }
}

#[must_use]
pub fn permutation() -> PermutationKind {
    PERMUTATION.load(Ordering::Relaxed).into()
}

/// Keccak-f[1600] using the currently selected strategy.
#[inline]
pub fn keccak_permute(lanes: &mut [u64; STATE_LANES]) {
    permutation().apply(lanes);
}
