use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::entities::TradeType;
use crate::router::SwapArg;
use crate::service::ServiceError;

// Response types that include error handling
#[derive(Debug, JsonSchema, Serialize)]
#[serde(untagged)]
pub enum SwapCallParametersResult {
    Success(SwapCallParametersResponse),
    Error { error: ServiceError },
}

#[derive(Debug, JsonSchema, Serialize)]
#[serde(untagged)]
pub enum ComputePairAddressResult {
    Success(ComputePairAddressResponse),
    Error { error: ServiceError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeTypeParam {
    /// The input amount is fixed, the output is bounded by slippage
    ExactInput,
    /// The output amount is fixed, the input is bounded by slippage
    ExactOutput,
}

impl From<TradeTypeParam> for TradeType {
    fn from(param: TradeTypeParam) -> Self {
        match param {
            TradeTypeParam::ExactInput => TradeType::ExactInput,
            TradeTypeParam::ExactOutput => TradeType::ExactOutput,
        }
    }
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct SwapCallParametersRequest {
    /// Chain id (1 = Ethereum, 250 = Fantom, 4002 = Fantom testnet)
    pub chain_id: u64,

    /// Which side of the trade is fixed
    pub trade_type: TradeTypeParam,

    /// Input currency: "native" for the chain's base asset, or a token address
    pub input_currency: String,

    /// Output currency: "native" for the chain's base asset, or a token address
    pub output_currency: String,

    /// Token addresses the swap traverses, in order. Native currency appears as its wrapped token.
    pub path: Vec<String>,

    /// Quoted input amount in the smallest unit (e.g. wei)
    pub amount_in: String,

    /// Quoted output amount in the smallest unit
    pub amount_out: String,

    /// Recipient of the swap output
    pub recipient: String,

    /// Optional: slippage tolerance in percent (e.g. "0.5" for 0.5%), defaults to the configured value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage_tolerance: Option<String>,

    /// Optional: seconds until the swap expires. Mutually exclusive with `deadline`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,

    /// Optional: absolute unix timestamp the swap expires at. Mutually exclusive with `ttl`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<u64>,

    /// Optional: whether any token in the path takes a fee on transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_on_transfer: Option<bool>,
}

/// A positional router argument in hex
#[derive(Debug, Clone, PartialEq, Eq, JsonSchema, Serialize)]
#[serde(untagged)]
pub enum HexArg {
    Single(String),
    List(Vec<String>),
}

impl From<SwapArg> for HexArg {
    fn from(arg: SwapArg) -> Self {
        match arg {
            SwapArg::Hex(value) => HexArg::Single(value),
            SwapArg::HexList(values) => HexArg::List(values),
        }
    }
}

#[derive(Debug, JsonSchema, Serialize)]
pub struct SwapCallParametersResponse {
    /// Router method to call
    pub method_name: String,

    /// Positional arguments, hex encoded
    pub args: Vec<HexArg>,

    /// Wei to send with the call, hex encoded
    pub value: String,

    /// ABI-encoded calldata for the call
    pub calldata: String,

    /// Router address configured for the chain, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<String>,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ComputePairAddressRequest {
    /// Chain id both tokens live on
    pub chain_id: u64,

    /// First token address (order does not matter)
    pub token_a: String,

    /// Second token address (order does not matter)
    pub token_b: String,

    /// Optional: factory address, defaults to the chain's configured factory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_address: Option<String>,

    /// Optional: pair init code hash, defaults to the chain's configured hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_code_hash: Option<String>,
}

#[derive(Debug, JsonSchema, Serialize)]
pub struct ComputePairAddressResponse {
    /// Checksummed pair address
    pub pair_address: String,

    /// Token that sorts first in the pair
    pub token0: String,

    /// Token that sorts second in the pair
    pub token1: String,

    /// Factory the address was derived from
    pub factory_address: String,

    /// Init code hash the address was derived from
    pub init_code_hash: String,
}
