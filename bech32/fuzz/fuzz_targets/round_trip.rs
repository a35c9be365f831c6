// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_main]

use arbitrary::Arbitrary;
use foundation_bech32::{decode, encode, encoded_len, MAX_LEN};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    hrp: String,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let data: Vec<u8> = input.data.iter().map(|w| w & 0x1f).collect();

    let Ok(encoded) = encode(&input.hrp, &data) else {
        return;
    };

    if encoded_len(&input.hrp, data.len()) > MAX_LEN {
        return;
    }

    let (hrp, decoded) = decode(&encoded).unwrap();
    assert_eq!(hrp, input.hrp.to_ascii_lowercase());
    assert_eq!(decoded, data);
});
