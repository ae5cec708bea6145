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

//! # Segwit Addresses
//!
//! A segwit address is a bech32 string whose first data value is the witness
//! version and whose remaining values, regrouped into bytes, are the witness
//! program. From [BIP-350]:
//!
//! > the address decoder has to verify that the encoding matches what is
//! > expected for the decoded witness version (Bech32 for version 0, Bech32m
//! > for others).
//!
//! [BIP-350]: <https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki>
//!

use std::convert::TryFrom;
use std::fmt;
use std::iter;
use std::str::FromStr;

use bitcoin::{ScriptBuf, WitnessVersion};

use crate::checksum::{Variant, CHECKSUM_LENGTH};
use crate::convert::{from_base32, to_base32};
use crate::decode::{bech32_decode, DecodedPayload, MAX_LENGTH};
use crate::encode::{check_hrp, encode_to_fmt};
use crate::error::{CaseOrVariant, Error};
use crate::params::AddressParams;

/// Shortest allowed witness program, in bytes.
pub const MIN_PROGRAM_LENGTH: usize = 2;
/// Longest allowed witness program, in bytes.
pub const MAX_PROGRAM_LENGTH: usize = 40;
/// Highest witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// A decoded segwit address.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegwitAddress {
    /// Lowercase human-readable part.
    hrp: String,
    witness_version: u8,
    program: Vec<u8>,
}

/// Decodes a segwit address, checking that its human-readable part is `hrp`.
///
/// The comparison ignores case, and so does the address itself as long as it
/// is not mixed case.
pub fn decode(hrp: &str, s: &str) -> Result<SegwitAddress, Error> {
    decode_inner(Some(hrp), s)
}

/// Decodes a segwit address for the network described by `params`.
pub fn decode_with_params(params: &AddressParams, s: &str) -> Result<SegwitAddress, Error> {
    decode_inner(Some(params.bech_hrp), s)
}

/// Encodes a witness program as a segwit address.
///
/// Version 0 programs use bech32, all later versions bech32m.
pub fn encode(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String, Error> {
    SegwitAddress::new(hrp, witness_version, program.to_vec()).map(|addr| addr.to_string())
}

fn decode_inner(expected_hrp: Option<&str>, s: &str) -> Result<SegwitAddress, Error> {
    let DecodedPayload { hrp, data, variant } = bech32_decode(s)?;

    if let Some(expected) = expected_hrp {
        if !expected.eq_ignore_ascii_case(&hrp) {
            return Err(Error::PrefixMismatch { expected: expected.to_ascii_lowercase(), found: hrp });
        }
    }

    let (&witness_version, values) = data.split_first().ok_or(Error::MissingWitnessVersion)?;
    check_witness_version(witness_version)?;
    if variant != Variant::for_witness_version(witness_version) {
        return Err(CaseOrVariant::WrongVariant { witness_version, variant }.into());
    }

    let program = from_base32(values)?;
    check_program_length(witness_version, program.len())?;

    Ok(SegwitAddress { hrp, witness_version, program })
}

fn check_witness_version(witness_version: u8) -> Result<(), Error> {
    if witness_version > MAX_WITNESS_VERSION {
        Err(Error::InvalidWitnessVersion(witness_version))
    } else {
        Ok(())
    }
}

fn check_program_length(witness_version: u8, length: usize) -> Result<(), Error> {
    let valid = match witness_version {
        0 => length == 20 || length == 32,
        _ => length >= MIN_PROGRAM_LENGTH && length <= MAX_PROGRAM_LENGTH,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidProgramLength { witness_version, length })
    }
}

impl SegwitAddress {
    /// Builds an address from its parts, applying the same checks as decoding.
    pub fn new(hrp: &str, witness_version: u8, program: Vec<u8>) -> Result<SegwitAddress, Error> {
        let hrp = check_hrp(hrp)?;
        check_witness_version(witness_version)?;
        check_program_length(witness_version, program.len())?;

        let len = hrp.len() + 2 + (program.len() * 8 + 4) / 5 + CHECKSUM_LENGTH;
        if len > MAX_LENGTH {
            return Err(Error::InvalidLength(len));
        }

        Ok(SegwitAddress { hrp, witness_version, program })
    }

    /// The human-readable part, lowercase.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The witness version, 0 to 16.
    pub fn witness_version(&self) -> u8 {
        self.witness_version
    }

    /// The witness version as a `rust-bitcoin` type.
    pub fn bitcoin_witness_version(&self) -> WitnessVersion {
        WitnessVersion::try_from(self.witness_version).expect("0<=16")
    }

    /// The witness program bytes.
    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// The checksum algorithm this address is encoded with.
    pub fn variant(&self) -> Variant {
        Variant::for_witness_version(self.witness_version)
    }

    /// The network this address belongs to, if its prefix is a known one.
    pub fn params(&self) -> Option<&'static AddressParams> {
        AddressParams::from_hrp(&self.hrp)
    }

    /// Whether the address carries the prefix of `params`.
    pub fn is_valid_for(&self, params: &AddressParams) -> bool {
        self.hrp == params.bech_hrp
    }

    /// Generates a script pubkey spending to this address
    pub fn script_pubkey(&self) -> ScriptBuf {
        // OP_0, or OP_1 through OP_16
        let version_opcode = match self.witness_version {
            0 => 0x00,
            v => 0x50 + v,
        };
        let mut bytes = Vec::with_capacity(2 + self.program.len());
        bytes.push(version_opcode);
        // programs are at most 40 bytes so a direct push always fits
        bytes.push(self.program.len() as u8);
        bytes.extend_from_slice(&self.program);
        ScriptBuf::from_bytes(bytes)
    }
}

impl fmt::Display for SegwitAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data: Vec<u8> =
            iter::once(self.witness_version).chain(to_base32(&self.program)).collect();
        encode_to_fmt(f, &self.hrp, &data, self.variant())
    }
}

impl fmt::Debug for SegwitAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for SegwitAddress {
    type Err = Error;

    /// Decodes an address without checking its human-readable part.
    fn from_str(s: &str) -> Result<SegwitAddress, Error> {
        decode_inner(None, s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SegwitAddress {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = SegwitAddress;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a segwit address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                SegwitAddress::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SegwitAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
