extern crate segwit_addr;

use std::str::FromStr;

fn do_test(data: &[u8]) {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    if let Ok(payload) = segwit_addr::bech32_decode(s) {
        let reenc = segwit_addr::bech32_encode(&payload.hrp, &payload.data, payload.variant).unwrap();
        assert_eq!(s.to_ascii_lowercase(), reenc);
    }

    if let Ok(addr) = segwit_addr::SegwitAddress::from_str(s) {
        assert_eq!(s.to_ascii_lowercase(), addr.to_string());
        let again = segwit_addr::decode(addr.hrp(), &addr.to_string()).unwrap();
        assert_eq!(addr, again);
    }
}

#[cfg(feature = "afl")]
extern crate afl;
#[cfg(feature = "afl")]
fn main() {
    afl::read_stdio_bytes(|data| {
        do_test(&data);
    });
}

#[cfg(feature = "honggfuzz")]
#[macro_use] extern crate honggfuzz;
#[cfg(feature = "honggfuzz")]
fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}

#[cfg(not(any(feature = "afl", feature = "honggfuzz")))]
fn main() {}

#[cfg(test)]
mod tests {
    #[test]
    fn uppercase_taproot() {
        super::do_test(b"BC1P0XLXVLHEMJA6C4DQV22UAPCTQUPFHLXM9H8Z3K2E72Q4K9HCZ7VQZK5JJ0");
    }

    #[test]
    fn garbage() {
        super::do_test(b"\xff1qqqqqq");
        super::do_test(b"bc1gmk9yu");
    }
}
