use thiserror::Error;

use crate::entities::EntityError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Both sides of the trade are the native currency; the router has no entry point for it.
    #[error("Router does not support native currency on both sides of a trade")]
    NativeInOutConflict,

    /// A relative deadline must be strictly positive.
    #[error("Invalid ttl: {0}, must be greater than zero")]
    InvalidTtl(i64),

    /// Fee-on-transfer router variants only exist for exact-input swaps.
    #[error("Fee-on-transfer tokens are not supported for exact-output trades")]
    FeeOnTransferExactOutputUnsupported,

    /// An address string is malformed or fails its checksum.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid init code hash: {0}")]
    InvalidCodeHash(String),

    #[error(transparent)]
    Entity(#[from] EntityError),
}
