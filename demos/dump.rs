extern crate segwit_addr;

use segwit_addr::{bech32_decode, decode, to_char_codes, to_hex_array};

/// Prints the raw payload and the segwit interpretation of a testnet taproot
/// address, the prefix being taken from its first two characters.
fn reference_output() {
    let s = "tb1pqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesf3hn0c";

    match bech32_decode(s) {
        Ok(payload) => println!("bech32: {:?}", payload),
        Err(e) => println!("bech32: error: {}", e),
    }
    match decode(&s[0..2].to_lowercase(), s) {
        Ok(addr) => println!(
            "address: version {} program {:?}",
            addr.witness_version(),
            to_hex_array(addr.program()),
        ),
        Err(e) => println!("address: error: {}", e),
    }
}

/// Prints the character codes of a witness v2 address.
fn char_codes() {
    let s = "bc1zw508d6qejxtdg4y5r3zarvaryvaxxpcs";
    println!("{:?}", to_char_codes(s));
}

/// Prints the leading, meaningful part of a zero-padded buffer as values and
/// as hex.
fn storage_dump() {
    let mut dump = vec![
        0, 8, 14, 11, 11, 20, 26, 29, 30, 25, 3, 22, 2, 11, 1, 23, 25, 11, 1, 7, 4, 15, 15, 19, 23,
        18, 29, 20, 2, 3, 16, 24, 11,
    ];
    dump.resize(90, 0);
    let len = 33;

    println!("u8 vals: {:?}", &dump[..len]);
    println!("hex: {:?}", to_hex_array(&dump[..len]));
}

fn main() {
    reference_output();
    char_codes();
    storage_dump();
}
