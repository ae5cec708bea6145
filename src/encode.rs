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

//! # Encoding
//!
//! The inverse of [`crate::decode`]. Output is always lowercase.
//!

use std::fmt;

use crate::charset::{self, SEP};
use crate::checksum::{self, Variant, CHECKSUM_LENGTH};
use crate::decode::{check_characters, MAX_HRP_LENGTH, MAX_LENGTH};
use crate::Error;

/// Encodes `data` (5-bit values) under `hrp` with the checksum of `variant`.
pub fn bech32_encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String, Error> {
    let hrp = check_hrp(hrp)?;
    if let Some(&v) = data.iter().find(|v| **v > 31) {
        return Err(Error::InvalidDataValue(v));
    }

    let len = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if len > MAX_LENGTH {
        return Err(Error::InvalidLength(len));
    }

    let mut ret = String::with_capacity(len);
    encode_to_fmt(&mut ret, &hrp, data, variant).expect("writing to a string never fails");
    Ok(ret)
}

/// Writes a bech32 string to any [`fmt::Write`].
///
/// `hrp` must already be lowercase and valid, and every value in `data` must
/// be below 32.
pub(crate) fn encode_to_fmt<W: fmt::Write>(
    w: &mut W,
    hrp: &str,
    data: &[u8],
    variant: Variant,
) -> fmt::Result {
    let checksum = checksum::create_checksum(hrp.as_bytes(), data, variant);

    w.write_str(hrp)?;
    w.write_char(SEP)?;
    for v in data.iter().chain(checksum.iter()) {
        w.write_char(charset::char_of(*v))?;
    }
    Ok(())
}

/// Validates a human-readable part and returns it lowercased.
pub(crate) fn check_hrp(hrp: &str) -> Result<String, Error> {
    if hrp.is_empty() || hrp.len() > MAX_HRP_LENGTH {
        return Err(Error::InvalidLength(hrp.len()));
    }
    check_characters(hrp)?;
    Ok(hrp.to_ascii_lowercase())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decode::bech32_decode;
    use crate::error::CaseOrVariant;

    #[test]
    fn bip_vectors() {
        assert_eq!(bech32_encode("a", &[], Variant::Bech32).unwrap(), "a12uel5l");
        assert_eq!(bech32_encode("A", &[], Variant::Bech32m).unwrap(), "a1lqfn3a");
        assert_eq!(
            bech32_encode("abcdef", &(0..32).collect::<Vec<u8>>(), Variant::Bech32).unwrap(),
            "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
        );
    }

    #[test]
    fn decodes_back() {
        let data = [0, 14, 20, 15, 7, 13, 26, 0, 25, 18, 6, 11, 13, 8, 21, 4];
        for &variant in [Variant::Bech32, Variant::Bech32m].iter() {
            let s = bech32_encode("bcrt", &data, variant).unwrap();
            let decoded = bech32_decode(&s).unwrap();
            assert_eq!(decoded.hrp, "bcrt");
            assert_eq!(decoded.data, data);
            assert_eq!(decoded.variant, variant);
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(bech32_encode("", &[], Variant::Bech32), Err(Error::InvalidLength(0)));
        assert_eq!(
            bech32_encode(&"a".repeat(84), &[], Variant::Bech32),
            Err(Error::InvalidLength(84)),
        );
        assert_eq!(
            bech32_encode("Bc", &[], Variant::Bech32),
            Err(Error::MixedCaseOrWrongChecksumVariant(CaseOrVariant::MixedCase)),
        );
        assert_eq!(bech32_encode("b c", &[], Variant::Bech32), Err(Error::InvalidCharacter(' ')));
        assert_eq!(bech32_encode("bc", &[0, 32], Variant::Bech32), Err(Error::InvalidDataValue(32)));
        assert_eq!(bech32_encode("bc", &[0; 82], Variant::Bech32), Err(Error::InvalidLength(91)));
    }
}
