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

//! Network parameters for segwit addresses.

use bitcoin::Network;

/// The parameters to decode addresses of a given network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressParams {
    /// Short name of the network.
    pub name: &'static str,
    /// The bech32 HRP for segwit addresses.
    pub bech_hrp: &'static str,
    /// The matching `rust-bitcoin` network.
    pub network: Network,
}

impl AddressParams {
    /// Bitcoin mainnet.
    pub const BITCOIN: AddressParams =
        AddressParams { name: "bitcoin", bech_hrp: "bc", network: Network::Bitcoin };

    /// Bitcoin testnet.
    pub const TESTNET: AddressParams =
        AddressParams { name: "testnet", bech_hrp: "tb", network: Network::Testnet };

    /// Bitcoin signet. Shares its HRP with testnet.
    pub const SIGNET: AddressParams =
        AddressParams { name: "signet", bech_hrp: "tb", network: Network::Signet };

    /// Bitcoin regtest.
    pub const REGTEST: AddressParams =
        AddressParams { name: "regtest", bech_hrp: "bcrt", network: Network::Regtest };

    /// All known parameter sets, in lookup order.
    pub const ALL: [&'static AddressParams; 4] = [
        &AddressParams::BITCOIN,
        &AddressParams::TESTNET,
        &AddressParams::SIGNET,
        &AddressParams::REGTEST,
    ];

    /// Finds the parameters that use `hrp`, ignoring case.
    ///
    /// "tb" resolves to testnet, since signet uses the same prefix.
    pub fn from_hrp(hrp: &str) -> Option<&'static AddressParams> {
        AddressParams::ALL.iter().copied().find(|params| params.bech_hrp.eq_ignore_ascii_case(hrp))
    }
}
