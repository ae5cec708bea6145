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

//! Contains the error type shared by the decoder and the encoder.

use std::{error, fmt};

use crate::charset::SEP;
use crate::checksum::Variant;

/// Decoding or encoding error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The string is longer than 90 characters, or the human-readable part
    /// is longer than 83 characters.
    InvalidLength(usize),
    /// The separator is missing, nothing precedes it, or fewer than 6
    /// characters follow it.
    InvalidSeparator,
    /// A character outside the printable US-ASCII range, or a data character
    /// outside the bech32 alphabet.
    InvalidCharacter(char),
    /// The checksum matches neither bech32 nor bech32m.
    ChecksumMismatch,
    /// The string mixes upper and lower case, or the witness version was
    /// checksummed with the wrong algorithm.
    MixedCaseOrWrongChecksumVariant(CaseOrVariant),
    /// Leftover bits after regrouping are not all zero.
    NonZeroPadding,
    /// Five or more leftover bits after regrouping.
    ExcessPadding,
    /// The witness program has a length that its version does not allow.
    InvalidProgramLength {
        /// Witness version of the program.
        witness_version: u8,
        /// Length of the program in bytes.
        length: usize,
    },
    /// The human-readable part is not the one the caller asked for.
    PrefixMismatch {
        /// The lowercase prefix the caller expected.
        expected: String,
        /// The lowercase prefix found in the string.
        found: String,
    },
    /// Witness version must be 0 to 16 inclusive.
    InvalidWitnessVersion(u8),
    /// The data part holds only a checksum.
    MissingWitnessVersion,
    /// A value does not fit in the bit width it is supposed to have.
    InvalidDataValue(u8),
    /// A bit width outside 1 to 8 was passed to a regrouping function.
    InvalidBitWidth(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidLength(len) => write!(f, "invalid length: {}", len),
            Error::InvalidSeparator => write!(
                f,
                "the separator \"{}\" must follow a non-empty prefix and precede at least 6 characters",
                SEP
            ),
            Error::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            Error::ChecksumMismatch => write!(f, "invalid checksum"),
            Error::MixedCaseOrWrongChecksumVariant(ref e) => fmt::Display::fmt(e, f),
            Error::NonZeroPadding => write!(f, "the data payload is padded with non-zero bits"),
            Error::ExcessPadding => write!(f, "the data payload has too many bits of padding"),
            Error::InvalidProgramLength { witness_version: 0, length } => {
                write!(f, "a v0 witness program must be length 20 or 32, not {}", length)
            }
            Error::InvalidProgramLength { length, .. } => {
                write!(f, "the witness program must be between 2 and 40 bytes in length, not {}", length)
            }
            Error::PrefixMismatch { ref expected, ref found } => {
                write!(f, "expected human-readable part \"{}\", found \"{}\"", expected, found)
            }
            Error::InvalidWitnessVersion(v) => write!(f, "invalid witness script version: {}", v),
            Error::MissingWitnessVersion => write!(f, "the witness version byte is missing"),
            Error::InvalidDataValue(v) => write!(f, "data value {} is out of range", v),
            Error::InvalidBitWidth(w) => write!(f, "bit width must be between 1 and 8, not {}", w),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::MixedCaseOrWrongChecksumVariant(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<CaseOrVariant> for Error {
    fn from(e: CaseOrVariant) -> Error {
        Error::MixedCaseOrWrongChecksumVariant(e)
    }
}

/// The two ways a string can pass the character checks and still be
/// rejected for its case or checksum algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOrVariant {
    /// The whole string must be of one case.
    MixedCase,
    /// A v0 program must use bech32, a v1+ program must use bech32m.
    WrongVariant {
        /// Witness version found in the data part.
        witness_version: u8,
        /// The checksum algorithm the string was actually encoded with.
        variant: Variant,
    },
}

impl fmt::Display for CaseOrVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CaseOrVariant::MixedCase => write!(f, "mixed-case strings not allowed"),
            CaseOrVariant::WrongVariant { witness_version: 0, .. } => {
                write!(f, "v0 witness program must use bech32 not bech32m")
            }
            CaseOrVariant::WrongVariant { .. } => {
                write!(f, "v1+ witness program must use bech32m not bech32")
            }
        }
    }
}

impl error::Error for CaseOrVariant {}
