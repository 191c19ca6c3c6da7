//! Parsing helpers that turn string request fields into typed router inputs.

use std::str::FromStr;

use alloy::primitives::U256;
use rust_decimal::Decimal;

use super::ServiceResult;
use super::error::ServiceError;
use crate::entities::{ChainId, Currency, NativeCurrency, Percent, Token};
use crate::router::{Deadline, validate_and_parse_address};

/// Keyword selecting the chain's native currency in place of a token address.
const NATIVE_KEYWORD: &str = "native";

/// Decimals assumed for tokens given by bare address. They do not affect calldata.
const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Parse a raw amount in the smallest unit.
///
/// Accepts decimal digits (e.g. "1500000000000000000") or `0x`-prefixed hex.
pub fn parse_raw_amount(amount: &str) -> ServiceResult<U256> {
    let amount = amount.trim();
    if amount.is_empty() || amount.starts_with('-') {
        return Err(ServiceError::InvalidAmount(format!(
            "'{amount}' is not a non-negative integer"
        )));
    }
    U256::from_str(amount).map_err(|e| ServiceError::InvalidAmount(format!("'{amount}': {e}")))
}

/// Parse a slippage tolerance given in percent (e.g. "0.5" for 0.5%).
pub fn parse_slippage(slippage: &str) -> ServiceResult<Percent> {
    let decimal = Decimal::from_str(slippage.trim())
        .map_err(|e| ServiceError::InvalidSlippage(format!("'{slippage}': {e}")))?;
    Ok(Percent::from_decimal(decimal)?)
}

/// Resolve "native" or a token address into a currency on `chain_id`.
pub fn parse_currency(chain_id: u64, currency: &str) -> ServiceResult<Currency> {
    if currency.trim().eq_ignore_ascii_case(NATIVE_KEYWORD) {
        let chain = ChainId::try_from(chain_id)?;
        return Ok(NativeCurrency::on_chain(chain).into());
    }
    parse_token(chain_id, currency).map(Currency::Token)
}

pub fn parse_token(chain_id: u64, address: &str) -> ServiceResult<Token> {
    let address = validate_and_parse_address(address)?;
    Ok(Token::new(chain_id, address, DEFAULT_TOKEN_DECIMALS))
}

pub fn parse_path(chain_id: u64, path: &[String]) -> ServiceResult<Vec<Token>> {
    path.iter().map(|token| parse_token(chain_id, token)).collect()
}

/// Pick the deadline from a request, falling back to the configured ttl.
pub fn resolve_deadline(
    ttl: Option<i64>,
    deadline: Option<u64>,
    default_ttl: i64,
) -> ServiceResult<Deadline> {
    match (ttl, deadline) {
        (Some(_), Some(_)) => Err(ServiceError::InvalidDeadline(
            "ttl and deadline are mutually exclusive".to_string(),
        )),
        (Some(ttl), None) => Ok(Deadline::Ttl(ttl)),
        (None, Some(deadline)) => Ok(Deadline::At(deadline)),
        (None, None) => Ok(Deadline::Ttl(default_ttl)),
    }
}

/// Current unix time in seconds.
pub fn unix_now() -> ServiceResult<u64> {
    u64::try_from(chrono::Utc::now().timestamp())
        .map_err(|e| ServiceError::InternalError(format!("system clock before unix epoch: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_amount_decimal_should_work() {
        let amount = parse_raw_amount("1500000000000000000").unwrap();
        assert_eq!(amount, U256::from(1_500_000_000_000_000_000u64));
    }

    #[test]
    fn test_parse_raw_amount_hex_should_work() {
        assert_eq!(parse_raw_amount("0x64").unwrap(), U256::from(100u64));
    }

    #[test]
    fn test_parse_raw_amount_rejects_garbage() {
        for input in ["", "-1", "1.5", "abc"] {
            assert!(
                matches!(parse_raw_amount(input), Err(ServiceError::InvalidAmount(_))),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_slippage_should_work() {
        let slippage = parse_slippage("0.5").unwrap();
        assert_eq!(
            slippage,
            Percent::new(U256::from(5u64), U256::from(1000u64)).unwrap()
        );
    }

    #[test]
    fn test_parse_slippage_rejects_negative() {
        assert!(matches!(
            parse_slippage("-0.5"),
            Err(ServiceError::InvalidSlippage(_))
        ));
        assert!(matches!(
            parse_slippage("half"),
            Err(ServiceError::InvalidSlippage(_))
        ));
    }

    #[test]
    fn test_parse_currency_native_should_work() {
        let currency = parse_currency(250, "NATIVE").unwrap();
        assert!(currency.is_native());
        assert_eq!(currency.chain_id(), 250);
    }

    #[test]
    fn test_parse_currency_native_on_unknown_chain_should_fail() {
        assert!(matches!(
            parse_currency(56, "native"),
            Err(ServiceError::InvalidTrade(_))
        ));
    }

    #[test]
    fn test_parse_currency_token_should_work() {
        let currency = parse_currency(1, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap();
        assert!(!currency.is_native());
        assert_eq!(
            currency.wrapped().checksummed(),
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
        );
    }

    #[test]
    fn test_parse_path_rejects_invalid_address() {
        let path = vec![
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            "invalid_address".to_string(),
        ];
        assert!(matches!(
            parse_path(1, &path),
            Err(ServiceError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_resolve_deadline() {
        assert_eq!(resolve_deadline(None, None, 1200).unwrap(), Deadline::Ttl(1200));
        assert_eq!(resolve_deadline(Some(60), None, 1200).unwrap(), Deadline::Ttl(60));
        assert_eq!(resolve_deadline(None, Some(50), 1200).unwrap(), Deadline::At(50));
        assert!(matches!(
            resolve_deadline(Some(60), Some(50), 1200),
            Err(ServiceError::InvalidDeadline(_))
        ));
    }
}
