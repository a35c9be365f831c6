// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use foundation_bech32::{
    charset::CHARSET, decode, encode, encoded_len, DecodeError, CHECKSUM_LEN, MAX_HRP_LEN,
    MAX_LEN,
};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro256StarStar,
};

const ITERATIONS: usize = 500;

fn random_below(rng: &mut Xoshiro256StarStar, n: u32) -> u32 {
    rng.next_u32() % n
}

/// Random printable ASCII human-readable part, in mixed case.
fn random_hrp(rng: &mut Xoshiro256StarStar, max_len: usize) -> String {
    let len = 1 + random_below(rng, max_len as u32) as usize;
    (0..len)
        .map(|_| char::from(33 + random_below(rng, 94) as u8))
        .collect()
}

fn random_payload(rng: &mut Xoshiro256StarStar, len: usize) -> Vec<u8> {
    (0..len).map(|_| random_below(rng, 32) as u8).collect()
}

fn random_case(rng: &mut Xoshiro256StarStar) -> (String, Vec<u8>) {
    let hrp = random_hrp(rng, 20);
    let room = MAX_LEN - encoded_len(&hrp, 0);
    let len = random_below(rng, room as u32 + 1) as usize;
    (hrp, random_payload(rng, len))
}

#[test]
fn round_trip() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);

    for _ in 0..ITERATIONS {
        let (hrp, payload) = random_case(&mut rng);
        let encoded = encode(&hrp, &payload).unwrap();
        assert!(encoded.len() <= MAX_LEN);

        let (decoded_hrp, decoded_payload) = decode(&encoded).unwrap();
        assert_eq!(decoded_hrp, hrp.to_ascii_lowercase());
        assert_eq!(decoded_payload, payload);
    }
}

#[test]
fn round_trip_longest_hrp() {
    let hrp = "x".repeat(MAX_HRP_LEN);
    let encoded = encode(&hrp, &[]).unwrap();
    assert_eq!(encoded.len(), MAX_LEN);
    assert_eq!(decode(&encoded).unwrap(), (hrp, vec![]));
}

#[test]
fn single_character_substitution_is_detected() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0xc0ffee);

    for _ in 0..50 {
        let (hrp, payload) = random_case(&mut rng);
        let encoded = encode(&hrp, &payload).unwrap();
        let data_start = encoded.rfind('1').unwrap() + 1;

        for position in data_start..encoded.len() {
            for &replacement in CHARSET.iter() {
                let mut altered = encoded.clone().into_bytes();
                if altered[position] == replacement {
                    continue;
                }
                altered[position] = replacement;
                let altered = String::from_utf8(altered).unwrap();

                assert_eq!(
                    decode(&altered),
                    Err(DecodeError::ChecksumMismatch),
                    "{altered}"
                );
            }

            // Characters outside of the alphabet.
            for replacement in [b'b', b'i', b'o'] {
                let mut altered = encoded.clone().into_bytes();
                altered[position] = replacement;
                let altered = String::from_utf8(altered).unwrap();

                assert_eq!(
                    decode(&altered),
                    Err(DecodeError::InvalidCharacter { position })
                );
            }
        }
    }
}

#[test]
fn hrp_substitution_is_detected() {
    let encoded = encode("bc", &[0, 14, 20, 15, 7, 13, 26]).unwrap();

    for replacement in (b'!'..=b'~').filter(|c| !c.is_ascii_uppercase()) {
        if replacement == b'b' || replacement == b'1' {
            continue;
        }
        let mut altered = encoded.clone().into_bytes();
        altered[0] = replacement;
        let altered = String::from_utf8(altered).unwrap();

        assert_eq!(decode(&altered), Err(DecodeError::ChecksumMismatch));
    }
}

#[test]
fn case_invariance() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);

    for _ in 0..ITERATIONS {
        let (hrp, payload) = random_case(&mut rng);
        let encoded = encode(&hrp, &payload).unwrap();

        let lower = decode(&encoded).unwrap();
        let upper = decode(&encoded.to_ascii_uppercase()).unwrap();
        assert_eq!(lower, upper);
    }
}

#[test]
fn mixed_case_is_rejected() {
    let encoded = encode("test", &[1, 2, 3, 4, 5]).unwrap();

    for position in 0..encoded.len() {
        let mut altered = encoded.clone().into_bytes();
        if !altered[position].is_ascii_lowercase() {
            continue;
        }
        altered[position].make_ascii_uppercase();
        let altered = String::from_utf8(altered).unwrap();

        assert_eq!(decode(&altered), Err(DecodeError::InvalidCase));
    }
}

#[test]
fn boundaries() {
    let encoded = encode("a", &[0; MAX_LEN - 1 - 1 - CHECKSUM_LEN]).unwrap();
    assert_eq!(encoded.len(), MAX_LEN);
    decode(&encoded).unwrap();

    let too_long = encode("a", &[0; MAX_LEN - 1 - CHECKSUM_LEN]).unwrap();
    assert_eq!(
        decode(&too_long),
        Err(DecodeError::StringLengthExceeded { length: 91 })
    );

    assert_eq!(decode("1qqqqqq"), Err(DecodeError::IncorrectHrpSize));
    assert_eq!(decode("a1"), Err(DecodeError::IncorrectChecksumSize));
    assert_eq!(decode("a1qqqqq"), Err(DecodeError::IncorrectChecksumSize));
    assert_eq!(decode("a1qqqqqq"), Err(DecodeError::ChecksumMismatch));
}
