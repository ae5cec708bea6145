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

//! Helpers for eyeballing encoded strings and raw buffers while debugging.

use std::slice;

use bitcoin::hex::DisplayHex;

/// The code point of every character in `s`.
pub fn to_char_codes(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

/// Every byte of `bytes` as two lowercase hex digits.
pub fn to_hex_array(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|b| slice::from_ref(b).to_lower_hex_string()).collect()
}
