// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The Bech32 alphabet.
//!
//! Every 5-bit data word maps to exactly one character of [`CHARSET`]. The
//! characters `1`, `b`, `i` and `o` are not part of the alphabet.

/// The 32 characters of the data part, indexed by word value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup table indexed by ASCII code, `-1` marks characters outside
/// of the alphabet. Upper case letters map to the same value as their lower
/// case counterpart.
pub const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// Largest value a data word can hold.
pub const MAX_WORD: u8 = 0x1f;

/// Map a data word to its character, `None` if `word` is bigger than
/// [`MAX_WORD`].
#[inline]
pub const fn encode_word(word: u8) -> Option<char> {
    if word > MAX_WORD {
        return None;
    }

    Some(CHARSET[word as usize] as char)
}

/// Map an ASCII character of the data part to its word value.
///
/// The lookup is case insensitive. Returns `None` for characters that are
/// not in the alphabet, including every non-ASCII byte.
#[inline]
pub const fn decode_char(c: u8) -> Option<u8> {
    if c >= 128 {
        return None;
    }

    match CHARSET_REV[c as usize] {
        v if v < 0 => None,
        v => Some(v as u8),
    }
}
