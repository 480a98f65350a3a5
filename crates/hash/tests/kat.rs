//! Known-answer tests: FIPS 202 digests and SP 800-185 cSHAKE / KMAC
//! samples, plus the rate-72 SHAKE-512 / cSHAKE-512 / KMAC-512 variants.

use qsc_hash::{
    CShake, Kmac, Sha3_256, Sha3_512, Strength, cshake128, cshake256, cshake512, kmac128, kmac256,
    kmac512, sha3_256, sha3_512, shake128, shake256, shake512,
};
use serde::{Deserialize, de};

const KAT: &[u8] = include_bytes!("data/kat.json");

fn de_hex<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>, {
    let encoded = <&str>::deserialize(deserializer)?;
    hex::decode(encoded).map_err(de::Error::custom)
}

#[derive(Clone, Deserialize)]
#[serde(transparent)]
struct HexBytes(#[serde(deserialize_with = "de_hex")] Vec<u8>);

#[derive(Deserialize)]
struct KatFile {
    sha3: Vec<DigestCase>,
    shake: Vec<DigestCase>,
    cshake: Vec<CShakeCase>,
    kmac: Vec<KmacCase>,
}

#[derive(Deserialize)]
struct DigestCase {
    bits: u16,
    msg: HexBytes,
    md: HexBytes,
}

#[derive(Deserialize)]
struct CShakeCase {
    bits: u16,
    msg: HexBytes,
    name: HexBytes,
    custom: HexBytes,
    md: HexBytes,
}

#[derive(Deserialize)]
struct KmacCase {
    bits: u16,
    key: HexBytes,
    msg: HexBytes,
    custom: HexBytes,
    md: HexBytes,
}

fn load() -> KatFile {
    serde_json::from_slice(KAT).expect("kat.json")
}

fn strength(bits: u16) -> Strength {
    match bits {
        128 => Strength::L128,
        256 => Strength::L256,
        512 => Strength::L512,
        other => panic!("unexpected strength {other}"),
    }
}

#[test]
fn sha3_vectors() {
    let kat = load();
    let mut tested = 0;
    for case in &kat.sha3 {
        let (one_shot, streamed) = match case.bits {
            256 => {
                let mut h = Sha3_256::new();
                for chunk in case.msg.0.chunks(17) {
                    h.update(chunk);
                }
                (sha3_256(&case.msg.0).to_vec(), h.finalize().to_vec())
            }
            512 => {
                let mut h = Sha3_512::new();
                for chunk in case.msg.0.chunks(17) {
                    h.update(chunk);
                }
                (sha3_512(&case.msg.0).to_vec(), h.finalize().to_vec())
            }
            other => panic!("unexpected SHA3-{other}"),
        };
        assert_eq!(one_shot, case.md.0, "SHA3-{} len {}", case.bits, case.msg.0.len());
        assert_eq!(streamed, case.md.0, "SHA3-{} streamed len {}", case.bits, case.msg.0.len());
        tested += 1;
    }
    assert!(tested > 0, "no SHA-3 vectors ran");
}

#[test]
fn sha3_256_empty_string() {
    assert_eq!(
        hex::encode(sha3_256(b"")),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );
}

#[test]
fn shake_vectors() {
    let kat = load();
    for case in &kat.shake {
        let mut out = vec![0u8; case.md.0.len()];
        match case.bits {
            128 => shake128(&mut out, &case.msg.0),
            256 => shake256(&mut out, &case.msg.0),
            512 => shake512(&mut out, &case.msg.0),
            other => panic!("unexpected SHAKE-{other}"),
        }
        assert_eq!(out, case.md.0, "SHAKE-{} len {}", case.bits, case.msg.0.len());
    }
}

#[test]
fn cshake_vectors() {
    let kat = load();
    for case in &kat.cshake {
        let mut out = vec![0u8; case.md.0.len()];
        let f = match case.bits {
            128 => cshake128,
            256 => cshake256,
            512 => cshake512,
            other => panic!("unexpected cSHAKE-{other}"),
        };
        f(&mut out, &case.msg.0, &case.name.0, &case.custom.0).unwrap();
        assert_eq!(out, case.md.0, "cSHAKE-{} len {}", case.bits, case.msg.0.len());

        let mut xof = CShake::new(strength(case.bits), &case.name.0, &case.custom.0).unwrap();
        for chunk in case.msg.0.chunks(50) {
            xof.update(chunk);
        }
        let mut reader = xof.finalize();
        let mut streamed = vec![0u8; case.md.0.len()];
        for chunk in streamed.chunks_mut(9) {
            reader.read(chunk);
        }
        assert_eq!(streamed, case.md.0, "cSHAKE-{} streamed", case.bits);
    }
}

#[test]
fn kmac_vectors() {
    let kat = load();
    for case in &kat.kmac {
        let mut out = vec![0u8; case.md.0.len()];
        let f = match case.bits {
            128 => kmac128,
            256 => kmac256,
            512 => kmac512,
            other => panic!("unexpected KMAC-{other}"),
        };
        f(&mut out, &case.msg.0, &case.key.0, &case.custom.0).unwrap();
        assert_eq!(
            out,
            case.md.0,
            "KMAC-{} len {} custom {}",
            case.bits,
            case.msg.0.len(),
            case.custom.0.len()
        );

        let mut mac = Kmac::new(strength(case.bits), &case.key.0, &case.custom.0).unwrap();
        mac.update(&case.msg.0);
        assert!(
            mac.clone().verify(&case.md.0, case.md.0.len()).unwrap(),
            "KMAC-{} verify",
            case.bits
        );
        assert!(
            !mac.verify(&case.md.0[..1], case.md.0.len()).unwrap(),
            "KMAC-{} truncated tag accepted",
            case.bits
        );
    }
}
