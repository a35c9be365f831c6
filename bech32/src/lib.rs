// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! # Foundation Bech32
//!
//! `no_std` friendly implementation of the [BIP-173] Bech32 encoding.
//!
//! A Bech32 string is made of a human-readable part, the separator `1` and a
//! data part of 5-bit words protected by a six word BCH checksum. This crate
//! only deals with the 5-bit words, regrouping them into bytes and giving them
//! a meaning (e.g. segwit addresses) is left to the caller.
//!
//! ```
//! use foundation_bech32::{decode, encode};
//!
//! let encoded = encode("test", &[0, 1, 2, 31]).unwrap();
//! let (hrp, data) = decode(&encoded).unwrap();
//! assert_eq!(hrp, "test");
//! assert_eq!(data, [0u8, 1, 2, 31]);
//! ```
//!
//! Without the `alloc` feature use [`parse`], [`decode_to_slice`],
//! [`encode_to_fmt`] or [`encode_to_slice`] instead.
//!
//! [BIP-173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod fmt;

pub mod charset;
pub mod checksum;
mod decode;
mod encode;

pub use self::checksum::CHECKSUM_LEN;
pub use self::decode::{decode_to_slice, parse, validate, DecodeError, Decoded};
pub use self::encode::{encode_to_fmt, encode_to_slice, encoded_len, EncodeError};

#[cfg(feature = "alloc")]
pub use self::decode::decode;
#[cfg(feature = "alloc")]
pub use self::encode::encode;

/// Separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

/// Maximum length of a Bech32 string.
pub const MAX_LEN: usize = 90;

/// Maximum length of the human-readable part of a decodable string.
pub const MAX_HRP_LEN: usize = MAX_LEN - 1 - CHECKSUM_LEN;

/// Maximum number of data words of a decodable string, checksum included.
pub const MAX_DATA_LEN: usize = MAX_LEN - 2;
