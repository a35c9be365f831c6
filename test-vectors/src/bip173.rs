// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

#[derive(Debug, serde::Deserialize)]
pub struct TestVectors {
    pub valid: Vec<TestVector>,
    pub invalid: Vec<InvalidTestVector>,
}

impl TestVectors {
    pub fn new() -> Self {
        serde_json::from_slice(include_bytes!("../data/bip-0173.json"))
            .expect("file should be valid JSON")
    }
}

/// A string that decodes successfully.
#[derive(Debug, serde::Deserialize)]
pub struct TestVector {
    pub name: String,
    pub encoded: String,
    /// Lower case human-readable part.
    pub hrp: String,
    /// Payload words, without the checksum.
    pub data: Vec<u8>,
}

/// A string that must be rejected.
#[derive(Debug, serde::Deserialize)]
pub struct InvalidTestVector {
    pub name: String,
    pub encoded: String,
    /// Name of the expected error kind.
    pub error: String,
}
