use std::fmt;

use alloy::primitives::Address;

use super::{EntityError, EntityResult};

/// An ERC20-style token identified by chain id and contract address.
#[derive(Debug, Clone)]
pub struct Token {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    pub fn new(chain_id: u64, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl ToString, name: impl ToString) -> Self {
        self.symbol = Some(symbol.to_string());
        self.name = Some(name.to_string());
        self
    }

    /// Returns true if this token's address sorts before the other token's address.
    ///
    /// This is the same ordering the factory contract uses to decide which token
    /// of a pair is `token0`. Both tokens must live on the same chain and have
    /// different addresses.
    pub fn sorts_before(&self, other: &Token) -> EntityResult<bool> {
        if self.chain_id != other.chain_id {
            return Err(EntityError::ChainIdMismatch(self.chain_id, other.chain_id));
        }
        if self.address == other.address {
            return Err(EntityError::IdenticalAddresses(self.address));
        }
        // Byte-wise comparison of the raw address equals comparing lowercase hex.
        Ok(self.address < other.address)
    }

    /// The EIP-55 checksummed address string.
    pub fn checksummed(&self) -> String {
        self.address.to_checksum(None)
    }
}

// Tokens are equal when they share chain and address; metadata is ignored.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol} ({})", self.checksummed()),
            None => write!(f, "{}", self.checksummed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn test_sorts_before_orders_by_address() {
        let low = Token::new(1, address!("0000000000000000000000000000000000000001"), 18);
        let high = Token::new(1, address!("0000000000000000000000000000000000000002"), 18);

        assert!(low.sorts_before(&high).unwrap());
        assert!(!high.sorts_before(&low).unwrap());
    }

    #[test]
    fn test_sorts_before_ignores_checksum_case() {
        let usdc = Token::new(1, address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"), 6);
        let weth = Token::new(1, address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"), 18);

        assert!(usdc.sorts_before(&weth).unwrap());
    }

    #[test]
    fn test_sorts_before_rejects_different_chains() {
        let a = Token::new(1, address!("0000000000000000000000000000000000000001"), 18);
        let b = Token::new(250, address!("0000000000000000000000000000000000000002"), 18);

        assert_eq!(a.sorts_before(&b), Err(EntityError::ChainIdMismatch(1, 250)));
    }

    #[test]
    fn test_sorts_before_rejects_identical_addresses() {
        let a = Token::new(1, address!("0000000000000000000000000000000000000001"), 18);
        let b = Token::new(1, address!("0000000000000000000000000000000000000001"), 6);

        assert!(matches!(
            a.sorts_before(&b),
            Err(EntityError::IdenticalAddresses(_))
        ));
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let a = Token::new(1, address!("0000000000000000000000000000000000000001"), 18)
            .with_symbol("A", "Token A");
        let b = Token::new(1, address!("0000000000000000000000000000000000000001"), 6);

        assert_eq!(a, b);
    }

    #[test]
    fn test_checksummed_address() {
        let weth = Token::new(1, address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"), 18);
        assert_eq!(
            weth.checksummed(),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
    }
}
