use serde::{Deserialize, Serialize};

use super::{Currency, CurrencyAmount, EntityError, EntityResult, Percent, Token};

/// Which side of the trade is fixed. The other side is bounded by slippage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// Ordered token path a swap traverses, first = input token, last = output token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: Vec<Token>,
    pub input: Currency,
    pub output: Currency,
}

impl Route {
    pub fn new(path: Vec<Token>, input: Currency, output: Currency) -> EntityResult<Self> {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return Err(EntityError::InvalidRoute("path must not be empty".to_string()));
        };
        if path.len() < 2 {
            return Err(EntityError::InvalidRoute(
                "path needs at least two tokens".to_string(),
            ));
        }

        let chain_id = first.chain_id;
        if let Some(token) = path.iter().find(|t| t.chain_id != chain_id) {
            return Err(EntityError::ChainIdMismatch(chain_id, token.chain_id));
        }
        if first != input.wrapped() {
            return Err(EntityError::InvalidRoute(format!(
                "path starts at {first} but input is {input}"
            )));
        }
        if last != output.wrapped() {
            return Err(EntityError::InvalidRoute(format!(
                "path ends at {last} but output is {output}"
            )));
        }

        Ok(Self {
            path,
            input,
            output,
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.input.chain_id()
    }
}

/// A priced trade along a route.
///
/// Amounts are produced by the caller's routing logic; this type only carries
/// them and derives the slippage bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub route: Route,
    pub trade_type: TradeType,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
}

impl Trade {
    pub fn new(
        route: Route,
        trade_type: TradeType,
        input_amount: CurrencyAmount,
        output_amount: CurrencyAmount,
    ) -> EntityResult<Self> {
        ensure_currency(&route.input, &input_amount.currency)?;
        ensure_currency(&route.output, &output_amount.currency)?;

        Ok(Self {
            route,
            trade_type,
            input_amount,
            output_amount,
        })
    }

    /// Least amount received for `slippage`. Exact-output trades return the
    /// output amount itself.
    pub fn minimum_amount_out(&self, slippage: &Percent) -> EntityResult<CurrencyAmount> {
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => {
                let factor = slippage.as_fraction().one_plus()?.invert()?;
                let raw = factor.mul_floor(self.output_amount.quotient())?;
                Ok(CurrencyAmount::from_raw(self.output_amount.currency.clone(), raw))
            }
        }
    }

    /// Most amount spent for `slippage`. Exact-input trades return the input
    /// amount itself.
    pub fn maximum_amount_in(&self, slippage: &Percent) -> EntityResult<CurrencyAmount> {
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => {
                let factor = slippage.as_fraction().one_plus()?;
                let raw = factor.mul_floor(self.input_amount.quotient())?;
                Ok(CurrencyAmount::from_raw(self.input_amount.currency.clone(), raw))
            }
        }
    }
}

fn ensure_currency(expected: &Currency, actual: &Currency) -> EntityResult<()> {
    if expected != actual {
        return Err(EntityError::CurrencyMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{U256, address};

    use super::*;
    use crate::entities::{ChainId, NativeCurrency};

    fn token0() -> Token {
        Token::new(1, address!("0000000000000000000000000000000000000001"), 18)
    }

    fn token1() -> Token {
        Token::new(1, address!("0000000000000000000000000000000000000002"), 18)
    }

    fn one_percent() -> Percent {
        Percent::new(U256::from(1u64), U256::from(100u64)).unwrap()
    }

    fn route_0_1() -> Route {
        Route::new(vec![token0(), token1()], token0().into(), token1().into()).unwrap()
    }

    #[test]
    fn test_route_rejects_short_path() {
        let result = Route::new(vec![token0()], token0().into(), token0().into());
        assert!(matches!(result, Err(EntityError::InvalidRoute(_))));

        let result = Route::new(vec![], token0().into(), token1().into());
        assert!(matches!(result, Err(EntityError::InvalidRoute(_))));
    }

    #[test]
    fn test_route_requires_matching_endpoints() {
        let result = Route::new(vec![token0(), token1()], token1().into(), token0().into());
        assert!(matches!(result, Err(EntityError::InvalidRoute(_))));
    }

    #[test]
    fn test_route_accepts_native_through_wrapped() {
        let ether = NativeCurrency::on_chain(ChainId::Mainnet);
        let route = Route::new(
            vec![ether.wrapped.clone(), token1()],
            ether.into(),
            token1().into(),
        )
        .unwrap();
        assert!(route.input.is_native());
        assert_eq!(route.chain_id(), 1);
    }

    #[test]
    fn test_trade_rejects_mismatched_amount_currency() {
        let result = Trade::new(
            route_0_1(),
            TradeType::ExactInput,
            CurrencyAmount::from_raw(token1(), U256::from(100u64)),
            CurrencyAmount::from_raw(token1(), U256::from(90u64)),
        );
        assert!(matches!(result, Err(EntityError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_exact_input_bounds() {
        let trade = Trade::new(
            route_0_1(),
            TradeType::ExactInput,
            CurrencyAmount::from_raw(token0(), U256::from(100u64)),
            CurrencyAmount::from_raw(token1(), U256::from(90u64)),
        )
        .unwrap();

        let max_in = trade.maximum_amount_in(&one_percent()).unwrap();
        let min_out = trade.minimum_amount_out(&one_percent()).unwrap();
        assert_eq!(max_in.raw, U256::from(100u64));
        assert_eq!(min_out.raw, U256::from(89u64));
    }

    #[test]
    fn test_exact_output_bounds() {
        let trade = Trade::new(
            route_0_1(),
            TradeType::ExactOutput,
            CurrencyAmount::from_raw(token0(), U256::from(112u64)),
            CurrencyAmount::from_raw(token1(), U256::from(100u64)),
        )
        .unwrap();

        let max_in = trade.maximum_amount_in(&one_percent()).unwrap();
        let min_out = trade.minimum_amount_out(&one_percent()).unwrap();
        assert_eq!(max_in.raw, U256::from(113u64));
        assert_eq!(min_out.raw, U256::from(100u64));
    }

    #[test]
    fn test_bounds_are_monotonic_in_slippage() {
        let exact_in = Trade::new(
            route_0_1(),
            TradeType::ExactInput,
            CurrencyAmount::from_raw(token0(), U256::from(1_000_000u64)),
            CurrencyAmount::from_raw(token1(), U256::from(1_000_000u64)),
        )
        .unwrap();
        let exact_out = Trade {
            trade_type: TradeType::ExactOutput,
            ..exact_in.clone()
        };

        let mut last_min_out = exact_in.output_amount.raw;
        let mut last_max_in = exact_out.input_amount.raw;
        for bips in [0u64, 10, 50, 100, 500, 10_000] {
            let slippage = Percent::new(U256::from(bips), U256::from(10_000u64)).unwrap();
            let min_out = exact_in.minimum_amount_out(&slippage).unwrap().raw;
            let max_in = exact_out.maximum_amount_in(&slippage).unwrap().raw;

            assert!(min_out <= last_min_out);
            assert!(max_in >= last_max_in);
            last_min_out = min_out;
            last_max_in = max_in;
        }
    }
}
