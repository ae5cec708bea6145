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

//! The bech32 alphabet.

/// Human-readable part and data part separator
pub const SEP: char = '1';

/// Encoding character set. Maps data value -> char
const CHARSET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', 'g', 'f', '2', 't', 'v', 'd', 'w', '0', 's', '3', 'j',
    'n', '5', '4', 'k', 'h', 'c', 'e', '6', 'm', 'u', 'a', '7', 'l',
];

// Reverse character set. Maps ASCII byte -> CHARSET index on [0,31]
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30, 7, 5, -1, -1, -1, -1, -1, -1, -1, 29, -1, 24, 13, 25, 9, 8, 23,
    -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1, -1, -1, -1, -1, -1, 29,
    -1, 24, 13, 25, 9, 8, 23, -1, 18, 22, 31, 27, 19, -1, 1, 0, 3, 16, 11, 28, 12, 14, 6, 4, 2, -1,
    -1, -1, -1, -1,
];

/// Looks up the 5-bit value of a data character, in either case.
///
/// Returns `None` for anything outside the alphabet.
pub fn value_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    // c is ASCII so it indexes the 128-entry table
    match CHARSET_REV[c as usize] {
        v if v < 0 => None,
        v => Some(v as u8),
    }
}

/// Returns the lowercase character for a 5-bit value.
///
/// # Panics
///
/// If `v` is 32 or more. Callers range-check values before encoding.
pub fn char_of(v: u8) -> char {
    CHARSET[usize::from(v)]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tables_agree() {
        for v in 0..32u8 {
            let c = char_of(v);
            assert_eq!(value_of(c), Some(v));
            assert_eq!(value_of(c.to_ascii_uppercase()), Some(v));
        }
    }

    #[test]
    fn excluded_characters() {
        for c in ['1', 'b', 'i', 'o', 'B', 'I', 'O', ' ', '\u{7f}', '\u{ff}', 'é'].iter() {
            assert_eq!(value_of(*c), None, "{:?}", c);
        }
    }
}
