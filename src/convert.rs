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

//! Regrouping of bit strings between 8-bit bytes and 5-bit values.
//!
//! From BIP-173:
//! > Re-arrange those bits into groups of 8 bits. Any incomplete group at the
//! > end MUST be 4 bits or less, MUST be all zeroes, and is discarded.

use crate::Error;

/// Regroups `data`, read as a big-endian stream of `from`-bit values, into
/// `to`-bit values.
///
/// With `pad` set, a trailing partial group is filled with zero bits. Without
/// it, the leftover bits must be fewer than `from` and all zero, as BIP-173
/// requires when going from 5 back to 8 bits.
///
/// Both widths must be between 1 and 8, otherwise [`Error::InvalidBitWidth`]
/// is returned.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Error> {
    for &width in [from, to].iter() {
        if width < 1 || width > 8 {
            return Err(Error::InvalidBitWidth(width));
        }
    }

    let max_value: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity(data.len() * from as usize / to as usize + 1);

    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(Error::InvalidDataValue(value));
        }
        acc = ((acc << from) | u32::from(value)) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            ret.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from {
        return Err(Error::ExcessPadding);
    } else if (acc << (to - bits)) & max_value != 0 {
        return Err(Error::NonZeroPadding);
    }

    Ok(ret)
}

/// Converts bytes to 5-bit values, zero-padding the last group.
pub fn to_base32(bytes: &[u8]) -> Vec<u8> {
    // 8 -> 5 with padding cannot fail: every u8 fits in 8 bits
    convert_bits(bytes, 8, 5, true).expect("bytes always fit in 8 bits")
}

/// Converts 5-bit values back to bytes, enforcing the BIP-173 padding rules.
///
/// Padding failures come in two kinds: [`Error::ExcessPadding`] when five or
/// more bits are left over, and [`Error::NonZeroPadding`] when the leftover
/// bits are not all zero.
pub fn from_base32(values: &[u8]) -> Result<Vec<u8>, Error> {
    convert_bits(values, 5, 8, false)
}
