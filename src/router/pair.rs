use std::str::FromStr;

use alloy::primitives::{Address, B256, keccak256};

use super::address::validate_and_parse_address;
use super::{RouterError, RouterResult};
use crate::entities::Token;

/// A derived pair: its address and the tokens in factory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub address: Address,
    pub token0: Token,
    pub token1: Token,
}

/// Derive the pair for two tokens, keeping the sorted tokens alongside the address.
///
/// The tokens are put in factory order first, so the result does not depend on
/// argument order. The salt is `keccak256(token0 ‖ token1)` over the packed
/// 20-byte addresses, and the address is the last 20 bytes of
/// `keccak256(0xff ‖ factory ‖ salt ‖ code_hash)`.
pub fn derive_pair(
    factory: Address,
    token_a: &Token,
    token_b: &Token,
    code_hash: B256,
) -> RouterResult<Pair> {
    let (token0, token1) = if token_a.sorts_before(token_b)? {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.address.as_slice());
    packed[20..].copy_from_slice(token1.address.as_slice());
    let salt = keccak256(packed);

    let address = factory.create2(salt, code_hash);
    tracing::debug!(%factory, token0 = %token0.address, token1 = %token1.address, pair = %address, "derived pair address");

    Ok(Pair {
        address,
        token0: token0.clone(),
        token1: token1.clone(),
    })
}

/// Compute the CREATE2 address of the pair contract for two tokens.
pub fn compute_pair_address(
    factory: Address,
    token_a: &Token,
    token_b: &Token,
    code_hash: B256,
) -> RouterResult<Address> {
    derive_pair(factory, token_a, token_b, code_hash).map(|pair| pair.address)
}

/// Parse a 32-byte init code hash from hex.
pub fn parse_code_hash(code_hash: &str) -> RouterResult<B256> {
    B256::from_str(code_hash.trim())
        .map_err(|e| RouterError::InvalidCodeHash(format!("{code_hash}: {e}")))
}

/// String-typed variant of [`compute_pair_address`] for callers holding raw inputs.
///
/// Returns the pair address in EIP-55 checksum form.
pub fn compute_pair_address_str(
    factory: &str,
    token_a: &Token,
    token_b: &Token,
    code_hash: &str,
) -> RouterResult<String> {
    let factory = validate_and_parse_address(factory)?;
    let code_hash = parse_code_hash(code_hash)?;

    compute_pair_address(factory, token_a, token_b, code_hash).map(|pair| pair.to_checksum(None))
}
