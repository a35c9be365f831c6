// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! BCH checksum of the Bech32 encoding.
//!
//! The checksum covers the expanded human-readable part followed by the data
//! words. A string is valid when running [`polymod`] over the expanded HRP,
//! the payload and the six checksum words yields [`BECH32_CONST`].

use core::iter;

/// Length of the checksum, in data words.
pub const CHECKSUM_LEN: usize = 6;

/// Value the checksum of a valid Bech32 string evaluates to.
pub const BECH32_CONST: u32 = 1;

/// Generator coefficients, selected by the five bits shifted out of the
/// accumulator.
const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

#[inline]
fn polymod_step(chk: u32, word: u8) -> u32 {
    let top = chk >> 25;
    let mut chk = ((chk & 0x1ffffff) << 5) ^ u32::from(word);
    for (i, g) in GEN.iter().enumerate() {
        if (top >> i) & 1 != 0 {
            chk ^= g;
        }
    }
    chk
}

/// Compute the 30-bit checksum accumulator over a sequence of 5-bit words.
///
/// The empty sequence evaluates to `1`.
pub fn polymod<I>(words: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    words.into_iter().fold(1, polymod_step)
}

/// Expand a human-readable part into the words fed to the checksum.
///
/// The result has `2 * hrp.len() + 1` elements: the high bits of every byte,
/// a zero, and then the low five bits of every byte.
pub fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + Clone + '_ {
    hrp.bytes()
        .map(|c| c >> 5)
        .chain(iter::once(0))
        .chain(hrp.bytes().map(|c| c & 0x1f))
}

/// Create the six checksum words for `hrp` and `data`.
///
/// `hrp` is expected in its lower case canonical form.
pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let words = hrp_expand(hrp)
        .chain(data.iter().copied())
        .chain([0; CHECKSUM_LEN]);
    let m = polymod(words) ^ BECH32_CONST;

    let mut checksum = [0u8; CHECKSUM_LEN];
    for (i, w) in checksum.iter_mut().enumerate() {
        *w = ((m >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Verify that the trailing six words of `data` are a valid checksum of
/// `hrp` and the words preceding them.
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    polymod(hrp_expand(hrp).chain(data.iter().copied())) == BECH32_CONST
}
