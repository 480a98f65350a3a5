//! Known-answer self-test over every primitive in the library.
//!
//! Each check recomputes a published vector (FIPS 202, SP 800-185 samples)
//! and compares it byte for byte. A failing check is reported by name and
//! the run stops there.

use qsc_hash::{
    Error, PermutationKind, cshake128, cshake256, kmac128, kmac256, permutation, set_permutation,
    sha3_256, sha3_512, shake128, shake256,
};
use qsc_math::{BitsliceVec, FFT_POINTS, GFBITS, fft};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelfTestError {
    /// A primitive produced output different from its published vector.
    #[error("{primitive}: output does not match the known answer")]
    KnownAnswerMismatch { primitive: &'static str },
    /// A construction rejected the self-test's own parameters.
    #[error(transparent)]
    Construction(#[from] Error),
}

type Check = fn() -> Result<bool, Error>;

const SP800_185_DATA: [u8; 4] = [0x00, 0x01, 0x02, 0x03];

fn sp800_185_key() -> [u8; 32] {
    core::array::from_fn(|i| 0x40 + i as u8)
}

fn matches(output: &[u8], expected: &str) -> bool {
    hex::encode(output) == expected
}

fn check_sha3_256() -> Result<bool, Error> {
    Ok(matches(
        &sha3_256(b""),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    ))
}

fn check_sha3_512() -> Result<bool, Error> {
    Ok(matches(
        &sha3_512(b"abc"),
        concat!(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e",
            "10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        ),
    ))
}

fn check_shake128() -> Result<bool, Error> {
    let mut out = [0u8; 32];
    shake128(&mut out, b"");
    Ok(matches(
        &out,
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
    ))
}

fn check_shake256() -> Result<bool, Error> {
    let mut out = [0u8; 64];
    shake256(&mut out, b"");
    Ok(matches(
        &out,
        concat!(
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
            "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"
        ),
    ))
}

fn check_cshake128() -> Result<bool, Error> {
    let mut out = [0u8; 32];
    cshake128(&mut out, &SP800_185_DATA, b"", b"Email Signature")?;
    Ok(matches(
        &out,
        "c1c36925b6409a04f1b504fcbca9d82b4017277cb5ed2b2065fc1d3814d5aaf5",
    ))
}

fn check_cshake256() -> Result<bool, Error> {
    let mut out = [0u8; 64];
    cshake256(&mut out, &SP800_185_DATA, b"", b"Email Signature")?;
    Ok(matches(
        &out,
        concat!(
            "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd1",
            "64020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c"
        ),
    ))
}

fn check_kmac128() -> Result<bool, Error> {
    let mut out = [0u8; 32];
    kmac128(&mut out, &SP800_185_DATA, &sp800_185_key(), b"My Tagged Application")?;
    Ok(matches(
        &out,
        "3b1fba963cd8b0b59e8c1a6d71888b7143651af8ba0a7070c0979e2811324aa5",
    ))
}

fn check_kmac256() -> Result<bool, Error> {
    let mut out = [0u8; 64];
    kmac256(&mut out, &SP800_185_DATA, &sp800_185_key(), b"My Tagged Application")?;
    Ok(matches(
        &out,
        concat!(
            "20c570c31346f703c9ac36c61c03cb64c3970d0cfc787e9b79599d273a68d2f7",
            "f69d4cc3de9d104a351689f27cf6f5951f0103f33f4f24871024d9c27773a8dd"
        ),
    ))
}

/// A constant polynomial must evaluate to itself at all 4096 points.
fn check_fft() -> Result<bool, Error> {
    const C: u64 = 0xA5C;
    let mut input: BitsliceVec = core::array::from_fn(|bit| (C >> bit) & 1);
    let mut out = [[0u64; GFBITS]; FFT_POINTS];
    fft(&mut out, &mut input);
    Ok(out.iter().all(|vec| {
        vec.iter()
            .enumerate()
            .all(|(bit, &word)| word == ((C >> bit) & 1).wrapping_neg())
    }))
}

const CHECKS: [(&str, Check); 9] = [
    ("SHA3-256", check_sha3_256),
    ("SHA3-512", check_sha3_512),
    ("SHAKE-128", check_shake128),
    ("SHAKE-256", check_shake256),
    ("cSHAKE-128", check_cshake128),
    ("cSHAKE-256", check_cshake256),
    ("KMAC-128", check_kmac128),
    ("KMAC-256", check_kmac256),
    ("FFT", check_fft),
];

/// Run every known-answer check with the current permutation strategy.
///
/// # Errors
/// The first failing primitive, as [`SelfTestError::KnownAnswerMismatch`].
pub fn run() -> Result<(), SelfTestError> {
    let strategy = permutation();
    for (primitive, check) in CHECKS {
        if check()? {
            tracing::debug!(primitive, %strategy, "self-test passed");
        } else {
            tracing::error!(primitive, %strategy, "self-test known-answer mismatch");
            return Err(SelfTestError::KnownAnswerMismatch { primitive });
        }
    }
    tracing::info!(checks = CHECKS.len(), %strategy, "self-test complete");
    Ok(())
}

/// Run [`run`] once per permutation strategy, then restore the selection.
///
/// # Errors
/// As [`run`].
pub fn run_all_strategies() -> Result<(), SelfTestError> {
    let previous = permutation();
    let result = [PermutationKind::Compact, PermutationKind::Unrolled]
        .into_iter()
        .try_for_each(|kind| {
            set_permutation(kind);
            run()
        });
    set_permutation(previous);
    result
}
