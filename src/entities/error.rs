use alloy::primitives::Address;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("Tokens are on different chains: {0} and {1}")]
    ChainIdMismatch(u64, u64),

    #[error("Tokens have identical addresses: {0}")]
    IdenticalAddresses(Address),

    #[error("Unsupported chain id: {0}")]
    UnsupportedChain(u64),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    #[error("Fraction denominator must not be zero")]
    ZeroDenominator,

    #[error("Invalid percentage: {0}")]
    InvalidPercent(String),

    #[error("Arithmetic overflow")]
    Overflow,
}
