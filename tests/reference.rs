extern crate bech32;
extern crate rand;
extern crate segwit_addr;

use std::convert::TryFrom;

use bech32::{Fe32, Hrp};
use rand::Rng;
use segwit_addr::{bech32_decode, decode, encode, to_char_codes, to_hex_array, Error, Variant};

const VALID: [&str; 8] = [
    "BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4",
    "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7",
    "bc1pw508d6qejxtdg4y5r3zarvary0c5xw7kw508d6qejxtdg4y5r3zarvary0c5xw7kt5nd6y",
    "BC1SW50QGDZ25J",
    "bc1zw508d6qejxtdg4y5r3zarvaryvaxxpcs",
    "tb1qqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesrxh6hy",
    "tb1pqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesf3hn0c",
    "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0",
];

#[test]
fn agrees_with_bech32_crate_on_valid_addresses() {
    for s in VALID.iter() {
        let (hrp, version, program) = bech32::segwit::decode(s).expect("reference decodes");
        let addr = decode(&hrp.to_lowercase(), s).expect("decodes");
        assert_eq!(addr.witness_version(), version.to_u8(), "{}", s);
        assert_eq!(addr.program(), &program[..], "{}", s);
    }
}

#[test]
fn agrees_with_bech32_crate_on_random_programs() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let version: u8 = rng.gen_range(0..=16);
        let len = if version == 0 {
            if rng.gen() { 20 } else { 32 }
        } else {
            rng.gen_range(2..=40)
        };
        let program: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let hrp = if rng.gen() { "bc" } else { "tb" };

        let ours = encode(hrp, version, &program).expect("encodes");
        let theirs = bech32::segwit::encode(
            Hrp::parse(hrp).expect("valid hrp"),
            Fe32::try_from(version).expect("version fits in 5 bits"),
            &program,
        )
        .expect("reference encodes");
        assert_eq!(ours, theirs);

        let addr = decode(hrp, &theirs).expect("decodes");
        assert_eq!(addr.witness_version(), version);
        assert_eq!(addr.program(), &program[..]);
    }
}

#[test]
fn rejects_what_bech32_crate_rejects() {
    let invalid = [
        "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqh2y7hd",
        "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kemeawh",
        "BC130XLXVLHEMJA6C4DQV22UAPCTQUPFHLXM9H8Z3K2E72Q4K9HCZ7VQ7ZWS8R",
        "bc1pw5dgrnzv",
        "BC1QR508D6QEJXTDG4Y5R3ZARVARYV98GJ9P",
        "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7v07qwwzcrf",
        "bc1gmk9yu",
        "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5",
    ];
    for s in invalid.iter() {
        assert!(bech32::segwit::decode(s).is_err(), "reference accepted {}", s);
        assert!(decode("bc", s).is_err(), "accepted {}", s);
    }
}

#[test]
fn debug_script_literals() {
    let taproot = "tb1pqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesf3hn0c";
    let raw = bech32_decode(taproot).unwrap();
    assert_eq!(raw.hrp, "tb");
    assert_eq!(raw.variant, Variant::Bech32m);
    assert_eq!(raw.data.len(), 53);
    assert_eq!(raw.data[0], 1);

    let addr = decode(&taproot[0..2].to_lowercase(), taproot).unwrap();
    assert_eq!(addr.witness_version(), 1);
    assert_eq!(
        to_hex_array(&addr.program()[..4]),
        vec!["00", "00", "00", "c4"],
    );

    let v2 = "bc1zw508d6qejxtdg4y5r3zarvaryvaxxpcs";
    let codes = to_char_codes(v2);
    assert_eq!(codes.len(), v2.len());
    assert_eq!(codes[..4].to_vec(), vec![98, 99, 49, 122]);

    assert_eq!(
        decode("tb", v2),
        Err(Error::PrefixMismatch { expected: "tb".to_owned(), found: "bc".to_owned() }),
    );
}
