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

//! # Checksums
//!
//! The BCH code shared by bech32 and bech32m. Both variants run the same
//! polymod over the expanded human-readable part followed by the data; they
//! differ only in the residue a valid string leaves behind.
//!

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of checksum characters at the end of every string.
pub const CHECKSUM_LENGTH: usize = 6;

/// Generator coefficients
const GEN: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// The checksum algorithm a string was encoded with.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(crate = "actual_serde"))]
pub enum Variant {
    /// The original BIP-173 checksum, used for witness version 0.
    Bech32,
    /// The BIP-350 checksum, used for witness versions 1 through 16.
    Bech32m,
}

impl Variant {
    /// The polymod residue a valid string leaves for this variant.
    pub const fn target_residue(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }

    /// Maps a polymod residue back to the variant it is valid for.
    pub fn from_residue(residue: u32) -> Option<Variant> {
        if residue == Variant::Bech32.target_residue() {
            Some(Variant::Bech32)
        } else if residue == Variant::Bech32m.target_residue() {
            Some(Variant::Bech32m)
        } else {
            None
        }
    }

    /// The variant segwit addresses of this witness version must use.
    pub fn for_witness_version(version: u8) -> Variant {
        match version {
            0 => Variant::Bech32,
            _ => Variant::Bech32m,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Variant::Bech32 => f.write_str("bech32"),
            Variant::Bech32m => f.write_str("bech32m"),
        }
    }
}

/// Runs the checksum over `hrp` (lowercase ASCII) and `data` (5-bit values,
/// checksum included) and reports which variant it is valid for, if any.
pub fn verify_checksum(hrp: &[u8], data: &[u8]) -> Option<Variant> {
    let mut exp = hrp_expand(hrp);
    exp.extend_from_slice(data);
    Variant::from_residue(polymod(&exp))
}

/// Computes the six checksum values to append to `data`.
pub fn create_checksum(hrp: &[u8], data: &[u8], variant: Variant) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let plm = polymod(&values) ^ variant.target_residue();

    let mut checksum = [0; CHECKSUM_LENGTH];
    for (p, value) in checksum.iter_mut().enumerate() {
        *value = ((plm >> (5 * (5 - p))) & 0x1f) as u8;
    }
    checksum
}

/// Splits every HRP byte into its high 3 bits and low 5 bits, with a zero
/// between the two halves.
fn hrp_expand(hrp: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(hrp.len() * 2 + 1);
    v.extend(hrp.iter().map(|b| b >> 5));
    v.push(0);
    v.extend(hrp.iter().map(|b| b & 0x1f));
    v
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let b = (chk >> 25) as u8;
        chk = (chk & 0x1ff_ffff) << 5 ^ u32::from(*v);
        for (i, g) in GEN.iter().enumerate() {
            if (b >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}
