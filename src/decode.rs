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

//! # Decoding
//!
//! Parsing of the general checksummed base32 format. A bech32 string is at
//! most 90 characters long and consists of:
//!
//! - The human-readable part, 1 to 83 US-ASCII characters in the range 33-126.
//! - The separator, which is always "1". It is the *last* "1" in the string,
//!   since the human-readable part may contain the character too.
//! - The data part, which is at least 6 characters long and only consists of
//!   alphanumeric characters excluding "1", "b", "i", and "o". Its last six
//!   characters are the checksum.
//!
//! Segwit-specific interpretation of the data lives in [`crate::segwit`].
//!

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::charset::{self, SEP};
use crate::checksum::{self, Variant, CHECKSUM_LENGTH};
use crate::error::{CaseOrVariant, Error};

/// Maximum length of an encoded string.
pub const MAX_LENGTH: usize = 90;

/// Maximum length of the human-readable part.
pub const MAX_HRP_LENGTH: usize = 83;

/// A bech32 string with a verified checksum, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(crate = "actual_serde"))]
pub struct DecodedPayload {
    /// The human-readable part, lowercased.
    pub hrp: String,
    /// The 5-bit data values, without the checksum.
    pub data: Vec<u8>,
    /// The checksum algorithm the string was encoded with.
    pub variant: Variant,
}

/// Decodes a bech32 or bech32m string into its human-readable part and its
/// 5-bit data values.
///
/// The checksum algorithm is detected from the checksum itself and reported
/// in [`DecodedPayload::variant`]. Upper-case strings are accepted; the
/// returned HRP is always lowercase.
pub fn bech32_decode(s: &str) -> Result<DecodedPayload, Error> {
    if s.len() > MAX_LENGTH {
        return Err(Error::InvalidLength(s.len()));
    }
    check_characters(s)?;

    let sep = match s.rfind(SEP) {
        Some(sep) if sep > 0 && s.len() - sep - 1 >= CHECKSUM_LENGTH => sep,
        _ => return Err(Error::InvalidSeparator),
    };
    let (raw_hrp, raw_data) = (&s[..sep], &s[sep + 1..]);

    let mut data = raw_data
        .chars()
        .map(|c| charset::value_of(c).ok_or(Error::InvalidCharacter(c)))
        .collect::<Result<Vec<u8>, Error>>()?;

    let hrp = raw_hrp.to_ascii_lowercase();
    let variant = checksum::verify_checksum(hrp.as_bytes(), &data).ok_or(Error::ChecksumMismatch)?;

    data.truncate(data.len() - CHECKSUM_LENGTH);
    Ok(DecodedPayload { hrp, data, variant })
}

/// Checks that every character is printable US-ASCII and that the string
/// does not mix upper and lower case.
pub(crate) fn check_characters(s: &str) -> Result<(), Error> {
    let mut has_upper = false;
    let mut has_lower = false;
    for ch in s.chars() {
        if !ch.is_ascii() || (ch as u32) < 33 || (ch as u32) > 126 {
            return Err(Error::InvalidCharacter(ch));
        }
        if ch.is_ascii_uppercase() {
            has_upper = true;
        } else if ch.is_ascii_lowercase() {
            has_lower = true;
        }
    }
    if has_upper && has_lower {
        Err(CaseOrVariant::MixedCase.into())
    } else {
        Ok(())
    }
}
