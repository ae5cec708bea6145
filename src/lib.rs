// Segwit Address Library
// Written in 2024 by
//   The Elements developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Segwit Address Library
//!
//! Decoding and encoding of bech32 ([BIP-173]) and bech32m ([BIP-350]) strings,
//! and of the Bitcoin segregated witness addresses built on top of them.
//!
//! The two entry points most users want are [`decode`], which validates a
//! segwit address against an expected human-readable part, and
//! [`bech32_decode`], which only checks the general checksummed base32 format
//! and hands back the raw 5-bit values.
//!
//! [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>
//!

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub extern crate bitcoin;
#[cfg(feature = "serde")]
pub extern crate actual_serde as serde;

mod charset;
pub mod checksum;
pub mod convert;
pub mod decode;
pub mod encode;
mod error;
pub mod inspect;
pub mod params;
pub mod segwit;

// export everything at the top level so it can be used as `segwit_addr::decode` etc.
pub use crate::checksum::Variant;
pub use crate::convert::{convert_bits, from_base32, to_base32};
pub use crate::decode::{bech32_decode, DecodedPayload};
pub use crate::encode::bech32_encode;
pub use crate::error::{CaseOrVariant, Error};
pub use crate::inspect::{to_char_codes, to_hex_array};
pub use crate::params::AddressParams;
pub use crate::segwit::{decode, decode_with_params, encode, SegwitAddress};
