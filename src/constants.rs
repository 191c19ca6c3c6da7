//! Per-chain native currency data.

use alloy::primitives::{Address, address};

use crate::entities::{ChainId, Token};

/// Wrapped Ether on Ethereum mainnet
const WETH_MAINNET: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

/// Wrapped Fantom on Fantom Opera
const WFTM_FANTOM: Address = address!("21be370d5312f44cb42ce377bc9b8a0cef1a4c83");

/// Wrapped Fantom on the Fantom testnet
const WFTM_FANTOM_TESTNET: Address = address!("f1277d1ed8ad466beddf92ef448a132661956621");

pub(crate) fn native_metadata(chain: ChainId) -> (&'static str, &'static str) {
    match chain {
        ChainId::Mainnet => ("ETH", "Ether"),
        ChainId::Fantom | ChainId::FantomTestnet => ("FTM", "Fantom"),
    }
}

/// The wrapped token that stands in for the native currency inside pools.
pub fn wrapped_native(chain: ChainId) -> Token {
    match chain {
        ChainId::Mainnet => {
            Token::new(chain.id(), WETH_MAINNET, 18).with_symbol("WETH", "Wrapped Ether")
        }
        ChainId::Fantom => {
            Token::new(chain.id(), WFTM_FANTOM, 18).with_symbol("WFTM", "Wrapped Fantom")
        }
        ChainId::FantomTestnet => {
            Token::new(chain.id(), WFTM_FANTOM_TESTNET, 18).with_symbol("WFTM", "Wrapped Fantom")
        }
    }
}
