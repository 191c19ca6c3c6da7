use std::fmt;

use alloy::primitives::U256;

use super::{EntityError, EntityResult, Token};
use crate::constants::{native_metadata, wrapped_native};

/// Chains with a known router deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum ChainId {
    Mainnet = 1,
    Fantom = 250,
    FantomTestnet = 4002,
}

impl ChainId {
    pub fn id(self) -> u64 {
        self as u64
    }
}

impl TryFrom<u64> for ChainId {
    type Error = EntityError;

    fn try_from(value: u64) -> EntityResult<Self> {
        match value {
            1 => Ok(ChainId::Mainnet),
            250 => Ok(ChainId::Fantom),
            4002 => Ok(ChainId::FantomTestnet),
            other => Err(EntityError::UnsupportedChain(other)),
        }
    }
}

/// The chain's base asset (ETH, FTM). Routers trade it through its wrapped token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub chain_id: u64,
    pub decimals: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub wrapped: Token,
}

impl NativeCurrency {
    pub fn on_chain(chain: ChainId) -> Self {
        let (symbol, name) = native_metadata(chain);
        Self {
            chain_id: chain.id(),
            decimals: 18,
            symbol,
            name,
            wrapped: wrapped_native(chain),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.chain_id,
            Currency::Token(token) => token.chain_id,
        }
    }

    /// The token that represents this currency inside a pool.
    pub fn wrapped(&self) -> &Token {
        match self {
            Currency::Native(native) => &native.wrapped,
            Currency::Token(token) => token,
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Native(native) => write!(f, "{}", native.symbol),
            Currency::Token(token) => write!(f, "{token}"),
        }
    }
}

/// A raw amount (smallest unit) of a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub raw: U256,
}

impl CurrencyAmount {
    pub fn from_raw(currency: impl Into<Currency>, raw: U256) -> Self {
        Self {
            currency: currency.into(),
            raw,
        }
    }

    pub fn quotient(&self) -> U256 {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_round_trip() {
        assert_eq!(ChainId::try_from(250).unwrap(), ChainId::Fantom);
        assert_eq!(ChainId::Fantom.id(), 250);
        assert_eq!(
            ChainId::try_from(56),
            Err(EntityError::UnsupportedChain(56))
        );
    }

    #[test]
    fn test_native_currency_wraps_to_chain_token() {
        let ether = NativeCurrency::on_chain(ChainId::Mainnet);
        assert_eq!(ether.symbol, "ETH");
        assert_eq!(ether.wrapped.chain_id, 1);

        let currency = Currency::from(ether.clone());
        assert!(currency.is_native());
        assert_eq!(currency.wrapped(), &ether.wrapped);
    }

    #[test]
    fn test_fantom_testnet_native() {
        let ftm = NativeCurrency::on_chain(ChainId::FantomTestnet);
        assert_eq!(ftm.symbol, "FTM");
        assert_eq!(ftm.chain_id, 4002);
        assert_eq!(ftm.wrapped.chain_id, 4002);
    }
}
