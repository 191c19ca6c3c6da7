use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};

use super::address::validate_and_parse_address;
use super::contract::IUniswapV2Router02;
use super::{RouterError, RouterResult};
use crate::entities::{EntityError, Percent, Trade, TradeType};

/// When the swap transaction expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// Seconds from the moment the parameters are built. Must be positive.
    Ttl(i64),
    /// Absolute unix timestamp in seconds.
    At(u64),
}

/// Options for producing the arguments of a router call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeOptions {
    /// How much the execution price may move unfavorably from the trade price.
    pub allowed_slippage: Percent,
    pub deadline: Deadline,
    /// Account that receives the output of the swap.
    pub recipient: String,
    /// Whether any token in the path takes a fee on transfer.
    pub fee_on_transfer: Option<bool>,
}

/// A positional router argument: a single hex value or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SwapArg {
    Hex(String),
    HexList(Vec<String>),
}

/// Method name, hex-encoded arguments and value for a router call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapParameters {
    pub method_name: String,
    pub args: Vec<SwapArg>,
    /// Wei to attach, in hex.
    pub value: String,
}

/// ABI-encoded calldata and the wei value to send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParameters {
    pub calldata: Bytes,
    pub value: U256,
}

/// Which side of the trade, if any, is the chain's native currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyConfig {
    NativeIn,
    NativeOut,
    Neither,
}

/// Router swap entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterMethod {
    SwapExactETHForTokens,
    SwapExactETHForTokensSupportingFeeOnTransferTokens,
    SwapExactTokensForETH,
    SwapExactTokensForETHSupportingFeeOnTransferTokens,
    SwapExactTokensForTokens,
    SwapExactTokensForTokensSupportingFeeOnTransferTokens,
    SwapETHForExactTokens,
    SwapTokensForExactETH,
    SwapTokensForExactTokens,
}

impl RouterMethod {
    pub fn name(self) -> &'static str {
        match self {
            Self::SwapExactETHForTokens => "swapExactETHForTokens",
            Self::SwapExactETHForTokensSupportingFeeOnTransferTokens => {
                "swapExactETHForTokensSupportingFeeOnTransferTokens"
            }
            Self::SwapExactTokensForETH => "swapExactTokensForETH",
            Self::SwapExactTokensForETHSupportingFeeOnTransferTokens => {
                "swapExactTokensForETHSupportingFeeOnTransferTokens"
            }
            Self::SwapExactTokensForTokens => "swapExactTokensForTokens",
            Self::SwapExactTokensForTokensSupportingFeeOnTransferTokens => {
                "swapExactTokensForTokensSupportingFeeOnTransferTokens"
            }
            Self::SwapETHForExactTokens => "swapETHForExactTokens",
            Self::SwapTokensForExactETH => "swapTokensForExactETH",
            Self::SwapTokensForExactTokens => "swapTokensForExactTokens",
        }
    }

    pub fn selector(self) -> [u8; 4] {
        use IUniswapV2Router02::*;
        match self {
            Self::SwapExactETHForTokens => swapExactETHForTokensCall::SELECTOR,
            Self::SwapExactETHForTokensSupportingFeeOnTransferTokens => {
                swapExactETHForTokensSupportingFeeOnTransferTokensCall::SELECTOR
            }
            Self::SwapExactTokensForETH => swapExactTokensForETHCall::SELECTOR,
            Self::SwapExactTokensForETHSupportingFeeOnTransferTokens => {
                swapExactTokensForETHSupportingFeeOnTransferTokensCall::SELECTOR
            }
            Self::SwapExactTokensForTokens => swapExactTokensForTokensCall::SELECTOR,
            Self::SwapExactTokensForTokensSupportingFeeOnTransferTokens => {
                swapExactTokensForTokensSupportingFeeOnTransferTokensCall::SELECTOR
            }
            Self::SwapETHForExactTokens => swapETHForExactTokensCall::SELECTOR,
            Self::SwapTokensForExactETH => swapTokensForExactETHCall::SELECTOR,
            Self::SwapTokensForExactTokens => swapTokensForExactTokensCall::SELECTOR,
        }
    }
}

/// Positional argument layout of a router method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLayout {
    /// `(amountOut, path, to, deadline)`
    OutPath,
    /// `(amountIn, amountOutMin, path, to, deadline)`
    InOutPath,
    /// `(amountOut, amountInMax, path, to, deadline)`
    OutInPath,
}

/// One row of the method selection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRow {
    pub trade_type: TradeType,
    pub config: CurrencyConfig,
    pub method: RouterMethod,
    /// Variant used when the path holds fee-on-transfer tokens, if the router has one.
    pub fee_on_transfer_method: Option<RouterMethod>,
    pub layout: ArgLayout,
    /// Whether the maximum input amount is sent as call value.
    pub payable: bool,
}

pub static SWAP_TABLE: [SwapRow; 6] = [
    SwapRow {
        trade_type: TradeType::ExactInput,
        config: CurrencyConfig::NativeIn,
        method: RouterMethod::SwapExactETHForTokens,
        fee_on_transfer_method: Some(
            RouterMethod::SwapExactETHForTokensSupportingFeeOnTransferTokens,
        ),
        layout: ArgLayout::OutPath,
        payable: true,
    },
    SwapRow {
        trade_type: TradeType::ExactInput,
        config: CurrencyConfig::NativeOut,
        method: RouterMethod::SwapExactTokensForETH,
        fee_on_transfer_method: Some(
            RouterMethod::SwapExactTokensForETHSupportingFeeOnTransferTokens,
        ),
        layout: ArgLayout::InOutPath,
        payable: false,
    },
    SwapRow {
        trade_type: TradeType::ExactInput,
        config: CurrencyConfig::Neither,
        method: RouterMethod::SwapExactTokensForTokens,
        fee_on_transfer_method: Some(
            RouterMethod::SwapExactTokensForTokensSupportingFeeOnTransferTokens,
        ),
        layout: ArgLayout::InOutPath,
        payable: false,
    },
    SwapRow {
        trade_type: TradeType::ExactOutput,
        config: CurrencyConfig::NativeIn,
        method: RouterMethod::SwapETHForExactTokens,
        fee_on_transfer_method: None,
        layout: ArgLayout::OutPath,
        payable: true,
    },
    SwapRow {
        trade_type: TradeType::ExactOutput,
        config: CurrencyConfig::NativeOut,
        method: RouterMethod::SwapTokensForExactETH,
        fee_on_transfer_method: None,
        layout: ArgLayout::OutInPath,
        payable: false,
    },
    SwapRow {
        trade_type: TradeType::ExactOutput,
        config: CurrencyConfig::Neither,
        method: RouterMethod::SwapTokensForExactTokens,
        fee_on_transfer_method: None,
        layout: ArgLayout::OutInPath,
        payable: false,
    },
];

impl SwapRow {
    /// Look up the row for a trade direction and currency configuration.
    pub fn lookup(trade_type: TradeType, config: CurrencyConfig) -> &'static SwapRow {
        let index = match (trade_type, config) {
            (TradeType::ExactInput, CurrencyConfig::NativeIn) => 0,
            (TradeType::ExactInput, CurrencyConfig::NativeOut) => 1,
            (TradeType::ExactInput, CurrencyConfig::Neither) => 2,
            (TradeType::ExactOutput, CurrencyConfig::NativeIn) => 3,
            (TradeType::ExactOutput, CurrencyConfig::NativeOut) => 4,
            (TradeType::ExactOutput, CurrencyConfig::Neither) => 5,
        };
        &SWAP_TABLE[index]
    }

    pub fn method_for(&self, fee_on_transfer: bool) -> RouterResult<RouterMethod> {
        if !fee_on_transfer {
            return Ok(self.method);
        }
        self.fee_on_transfer_method
            .ok_or(RouterError::FeeOnTransferExactOutputUnsupported)
    }
}

/// A fully resolved router call with typed values, before hex or ABI encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapCall {
    pub method: RouterMethod,
    pub layout: ArgLayout,
    pub amount_in: U256,
    pub amount_out: U256,
    pub path: Vec<Address>,
    pub to: Address,
    pub deadline: U256,
    pub value: U256,
}

impl SwapCall {
    pub fn parameters(&self) -> SwapParameters {
        let amount_in = SwapArg::Hex(to_hex(self.amount_in));
        let amount_out = SwapArg::Hex(to_hex(self.amount_out));
        let path = SwapArg::HexList(self.path.iter().map(|a| a.to_checksum(None)).collect());
        let to = SwapArg::Hex(self.to.to_checksum(None));
        let deadline = SwapArg::Hex(to_hex(self.deadline));

        let args = match self.layout {
            ArgLayout::OutPath => vec![amount_out, path, to, deadline],
            ArgLayout::InOutPath => vec![amount_in, amount_out, path, to, deadline],
            ArgLayout::OutInPath => vec![amount_out, amount_in, path, to, deadline],
        };

        SwapParameters {
            method_name: self.method.name().to_string(),
            args,
            value: to_hex(self.value),
        }
    }

    pub fn calldata(&self) -> Bytes {
        use IUniswapV2Router02::*;

        let path = self.path.clone();
        let (to, deadline) = (self.to, self.deadline);
        let (amount_in, amount_out) = (self.amount_in, self.amount_out);

        let encoded = match self.method {
            RouterMethod::SwapExactETHForTokens => swapExactETHForTokensCall {
                amountOutMin: amount_out,
                path,
                to,
                deadline,
            }
            .abi_encode(),
            RouterMethod::SwapExactETHForTokensSupportingFeeOnTransferTokens => {
                swapExactETHForTokensSupportingFeeOnTransferTokensCall {
                    amountOutMin: amount_out,
                    path,
                    to,
                    deadline,
                }
                .abi_encode()
            }
            RouterMethod::SwapExactTokensForETH => swapExactTokensForETHCall {
                amountIn: amount_in,
                amountOutMin: amount_out,
                path,
                to,
                deadline,
            }
            .abi_encode(),
            RouterMethod::SwapExactTokensForETHSupportingFeeOnTransferTokens => {
                swapExactTokensForETHSupportingFeeOnTransferTokensCall {
                    amountIn: amount_in,
                    amountOutMin: amount_out,
                    path,
                    to,
                    deadline,
                }
                .abi_encode()
            }
            RouterMethod::SwapExactTokensForTokens => swapExactTokensForTokensCall {
                amountIn: amount_in,
                amountOutMin: amount_out,
                path,
                to,
                deadline,
            }
            .abi_encode(),
            RouterMethod::SwapExactTokensForTokensSupportingFeeOnTransferTokens => {
                swapExactTokensForTokensSupportingFeeOnTransferTokensCall {
                    amountIn: amount_in,
                    amountOutMin: amount_out,
                    path,
                    to,
                    deadline,
                }
                .abi_encode()
            }
            RouterMethod::SwapETHForExactTokens => swapETHForExactTokensCall {
                amountOut: amount_out,
                path,
                to,
                deadline,
            }
            .abi_encode(),
            RouterMethod::SwapTokensForExactETH => swapTokensForExactETHCall {
                amountOut: amount_out,
                amountInMax: amount_in,
                path,
                to,
                deadline,
            }
            .abi_encode(),
            RouterMethod::SwapTokensForExactTokens => swapTokensForExactTokensCall {
                amountOut: amount_out,
                amountInMax: amount_in,
                path,
                to,
                deadline,
            }
            .abi_encode(),
        };

        Bytes::from(encoded)
    }
}

/// Builds router call parameters for trades. Holds no state.
pub struct Router;

impl Router {
    /// On-chain method name and hex-encoded arguments for a trade.
    ///
    /// `now` is the current unix time in seconds and is only read when the
    /// options carry a relative deadline.
    pub fn swap_call_parameters(
        trade: &Trade,
        options: &TradeOptions,
        now: u64,
    ) -> RouterResult<SwapParameters> {
        Self::resolve(trade, options, now).map(|call| call.parameters())
    }

    /// ABI-encoded calldata and value for a trade.
    pub fn swap_calldata(
        trade: &Trade,
        options: &TradeOptions,
        now: u64,
    ) -> RouterResult<MethodParameters> {
        let call = Self::resolve(trade, options, now)?;
        Ok(MethodParameters {
            calldata: call.calldata(),
            value: call.value,
        })
    }

    /// Validate the inputs and select the router method for a trade.
    pub fn resolve(trade: &Trade, options: &TradeOptions, now: u64) -> RouterResult<SwapCall> {
        let fee_on_transfer = options.fee_on_transfer.unwrap_or(false);
        if fee_on_transfer && trade.trade_type == TradeType::ExactOutput {
            return Err(RouterError::FeeOnTransferExactOutputUnsupported);
        }

        let ether_in = trade.input_amount.currency.is_native();
        let ether_out = trade.output_amount.currency.is_native();
        let config = match (ether_in, ether_out) {
            (true, true) => return Err(RouterError::NativeInOutConflict),
            (true, false) => CurrencyConfig::NativeIn,
            (false, true) => CurrencyConfig::NativeOut,
            (false, false) => CurrencyConfig::Neither,
        };

        let deadline = match options.deadline {
            Deadline::Ttl(ttl) if ttl <= 0 => return Err(RouterError::InvalidTtl(ttl)),
            Deadline::Ttl(ttl) => now.checked_add(ttl.unsigned_abs()).ok_or(EntityError::Overflow)?,
            Deadline::At(at) => at,
        };

        let to = validate_and_parse_address(&options.recipient)?;

        let row = SwapRow::lookup(trade.trade_type, config);
        let method = row.method_for(fee_on_transfer)?;

        let amount_in = trade.maximum_amount_in(&options.allowed_slippage)?.quotient();
        let amount_out = trade.minimum_amount_out(&options.allowed_slippage)?.quotient();
        let path = trade.route.path.iter().map(|token| token.address).collect();
        let value = if row.payable { amount_in } else { U256::ZERO };

        tracing::debug!(
            method = method.name(),
            trade_type = ?trade.trade_type,
            ?config,
            %amount_in,
            %amount_out,
            deadline,
            "resolved router swap"
        );

        Ok(SwapCall {
            method,
            layout: row.layout,
            amount_in,
            amount_out,
            path,
            to,
            deadline: U256::from(deadline),
            value,
        })
    }
}

/// Lowercase, `0x`-prefixed, minimal-width hex; zero is `0x0`.
fn to_hex(value: U256) -> String {
    format!("0x{value:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_is_minimal() {
        assert_eq!(to_hex(U256::ZERO), "0x0");
        assert_eq!(to_hex(U256::from(255u64)), "0xff");
        assert_eq!(to_hex(U256::from(4096u64)), "0x1000");
    }
}
