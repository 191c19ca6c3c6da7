use std::str::FromStr;

use alloy::primitives::Address;

use super::{RouterError, RouterResult};

/// Parse an address string, enforcing the EIP-55 checksum when the input is mixed-case.
///
/// All-lowercase and all-uppercase hex carry no checksum and are accepted as is.
pub fn validate_and_parse_address(address: &str) -> RouterResult<Address> {
    let trimmed = address.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    if hex.len() != 40 {
        return Err(RouterError::InvalidAddress(format!(
            "{address}: expected 40 hex digits, got {}",
            hex.len()
        )));
    }

    let parsed = Address::from_str(hex)
        .map_err(|e| RouterError::InvalidAddress(format!("{address}: {e}")))?;

    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower && &parsed.to_checksum(None)[2..] != hex {
        return Err(RouterError::InvalidAddress(format!(
            "{address}: bad checksum"
        )));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WETH_CHECKSUMMED: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    #[test]
    fn test_accepts_checksummed_address() {
        let parsed = validate_and_parse_address(WETH_CHECKSUMMED).unwrap();
        assert_eq!(parsed.to_checksum(None), WETH_CHECKSUMMED);
    }

    #[test]
    fn test_accepts_lowercase_and_unprefixed() {
        let lower = validate_and_parse_address("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").unwrap();
        let bare = validate_and_parse_address("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").unwrap();
        assert_eq!(lower.to_checksum(None), WETH_CHECKSUMMED);
        assert_eq!(lower, bare);
    }

    #[test]
    fn test_rejects_bad_checksum() {
        // last character case flipped
        let result = validate_and_parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756CC2");
        assert!(matches!(result, Err(RouterError::InvalidAddress(_))));
    }

    #[test]
    fn test_rejects_malformed() {
        for input in ["", "0x", "0x1234", "invalid_address", "0xzz2aaa39b223fe8d0a0e5c4f27ead9083c756cc2"] {
            let result = validate_and_parse_address(input);
            assert!(
                matches!(result, Err(RouterError::InvalidAddress(_))),
                "expected {input:?} to be rejected"
            );
        }
    }
}
