use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::EntityError;
use crate::router::RouterError;

#[derive(Debug, Clone, PartialEq, Eq, Error, JsonSchema, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ServiceError {
    // Request validation errors
    /// An address (token, factory, router or recipient) is malformed or fails its checksum.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// An amount is not a non-negative integer in the token's smallest unit.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The slippage tolerance is not a non-negative percentage.
    #[error("Invalid slippage tolerance: {0}")]
    InvalidSlippage(String),

    /// The ttl and deadline were both given.
    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),

    /// A relative deadline must be strictly positive.
    #[error("Invalid ttl: {0}, must be greater than zero")]
    InvalidTtl(i64),

    /// The init code hash is not a 32-byte hex value.
    #[error("Invalid init code hash: {0}")]
    InvalidCodeHash(String),

    /// The route, path or amounts do not describe a consistent trade.
    #[error("Invalid trade: {0}")]
    InvalidTrade(String),

    /// No router or factory deployment is configured for the chain.
    #[error("No deployment configured for chain {0}")]
    DeploymentNotConfigured(u64),

    // Router rejections
    /// The router has no entry point for native currency on both sides.
    #[error("Native currency cannot be both input and output")]
    NativeInOutConflict,

    /// Fee-on-transfer router variants only exist for exact-input trades.
    #[error("Fee-on-transfer tokens are not supported for exact-output trades")]
    FeeOnTransferExactOutputUnsupported,

    /// An unexpected internal error occurred.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<RouterError> for ServiceError {
    fn from(err: RouterError) -> Self {
        match err {
            RouterError::NativeInOutConflict => ServiceError::NativeInOutConflict,
            RouterError::InvalidTtl(ttl) => ServiceError::InvalidTtl(ttl),
            RouterError::FeeOnTransferExactOutputUnsupported => {
                ServiceError::FeeOnTransferExactOutputUnsupported
            }
            RouterError::InvalidAddress(msg) => ServiceError::InvalidAddress(msg),
            RouterError::InvalidCodeHash(msg) => ServiceError::InvalidCodeHash(msg),
            RouterError::Entity(err) => err.into(),
        }
    }
}

impl From<EntityError> for ServiceError {
    fn from(err: EntityError) -> Self {
        match err {
            EntityError::InvalidPercent(msg) => ServiceError::InvalidSlippage(msg),
            EntityError::Overflow => {
                ServiceError::InvalidAmount("amount overflows 256 bits".to_string())
            }
            EntityError::ZeroDenominator => ServiceError::InternalError(err.to_string()),
            EntityError::ChainIdMismatch(..)
            | EntityError::IdenticalAddresses(_)
            | EntityError::UnsupportedChain(_)
            | EntityError::InvalidRoute(_)
            | EntityError::CurrencyMismatch { .. } => ServiceError::InvalidTrade(err.to_string()),
        }
    }
}
