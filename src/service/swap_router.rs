use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{Json, ServerHandler, tool, tool_handler, tool_router};
use tracing::instrument;

use crate::config::Config;
use crate::entities::{CurrencyAmount, Route, Trade};
use crate::router::{
    Router, TradeOptions, derive_pair, parse_code_hash, validate_and_parse_address,
};
use crate::service::types::{
    ComputePairAddressRequest, ComputePairAddressResponse, ComputePairAddressResult,
    SwapCallParametersRequest, SwapCallParametersResponse, SwapCallParametersResult,
};
use crate::service::utils::{
    parse_currency, parse_path, parse_raw_amount, parse_slippage, parse_token, resolve_deadline,
    unix_now,
};
use crate::service::{ServiceError, ServiceResult};

pub struct SwapRouterService {
    tool_router: ToolRouter<Self>,
    config: Config,
}

// MCP Tool Layer
#[tool_router]
impl SwapRouterService {
    pub fn new(config: &Config) -> Self {
        tracing::info!(
            "Router service configured for chains: {:?}",
            config
                .deployments
                .iter()
                .map(|d| d.chain_id)
                .collect::<Vec<_>>()
        );

        Self {
            tool_router: Self::tool_router(),
            config: config.clone(),
        }
    }

    #[instrument(skip(self))]
    #[tool(
        description = "Build the router method name, hex arguments, value and calldata for a swap"
    )]
    pub async fn swap_call_parameters(
        &self,
        Parameters(req): Parameters<SwapCallParametersRequest>,
    ) -> Json<SwapCallParametersResult> {
        match self.swap_call_parameters_impl(req) {
            Ok(response) => Json(SwapCallParametersResult::Success(response)),
            Err(e) => {
                tracing::error!("Failed to build swap call parameters: {e}");
                Json(SwapCallParametersResult::Error { error: e })
            }
        }
    }

    #[instrument(skip(self))]
    #[tool(description = "Compute the deterministic address of a two-token liquidity pair")]
    pub async fn compute_pair_address(
        &self,
        Parameters(req): Parameters<ComputePairAddressRequest>,
    ) -> Json<ComputePairAddressResult> {
        match self.compute_pair_address_impl(req) {
            Ok(response) => Json(ComputePairAddressResult::Success(response)),
            Err(e) => {
                tracing::error!("Failed to compute pair address: {e}");
                Json(ComputePairAddressResult::Error { error: e })
            }
        }
    }
}

// Business Logic - Core implementation
impl SwapRouterService {
    #[instrument(skip(self), err)]
    fn swap_call_parameters_impl(
        &self,
        req: SwapCallParametersRequest,
    ) -> ServiceResult<SwapCallParametersResponse> {
        let chain_id = req.chain_id;

        let input = parse_currency(chain_id, &req.input_currency)?;
        let output = parse_currency(chain_id, &req.output_currency)?;
        let path = parse_path(chain_id, &req.path)?;
        let amount_in = parse_raw_amount(&req.amount_in)?;
        let amount_out = parse_raw_amount(&req.amount_out)?;

        let route = Route::new(path, input.clone(), output.clone())?;
        let trade = Trade::new(
            route,
            req.trade_type.into(),
            CurrencyAmount::from_raw(input, amount_in),
            CurrencyAmount::from_raw(output, amount_out),
        )?;

        let slippage = req
            .slippage_tolerance
            .as_deref()
            .unwrap_or(&self.config.trade.slippage_tolerance);

        let options = TradeOptions {
            allowed_slippage: parse_slippage(slippage)?,
            deadline: resolve_deadline(req.ttl, req.deadline, self.config.trade.ttl)?,
            recipient: req.recipient,
            fee_on_transfer: req.fee_on_transfer,
        };

        let now = unix_now()?;
        let call = Router::resolve(&trade, &options, now)?;
        let parameters = call.parameters();

        let router = self.configured_router(chain_id);

        tracing::info!(
            "Swap call parameters built: method={}, value={}",
            parameters.method_name,
            parameters.value
        );

        Ok(SwapCallParametersResponse {
            method_name: parameters.method_name,
            args: parameters.args.into_iter().map(Into::into).collect(),
            value: parameters.value,
            calldata: call.calldata().to_string(),
            router,
        })
    }

    #[instrument(skip(self), err)]
    fn compute_pair_address_impl(
        &self,
        req: ComputePairAddressRequest,
    ) -> ServiceResult<ComputePairAddressResponse> {
        let chain_id = req.chain_id;
        let deployment = self.config.deployment(chain_id);

        let factory = req
            .factory_address
            .as_deref()
            .or(deployment.map(|d| d.factory.as_str()))
            .ok_or(ServiceError::DeploymentNotConfigured(chain_id))?;
        let code_hash = req
            .init_code_hash
            .as_deref()
            .or(deployment.map(|d| d.init_code_hash.as_str()))
            .ok_or(ServiceError::DeploymentNotConfigured(chain_id))?;

        let factory = validate_and_parse_address(factory)?;
        let code_hash = parse_code_hash(code_hash)?;

        let token_a = parse_token(chain_id, &req.token_a)?;
        let token_b = parse_token(chain_id, &req.token_b)?;
        let pair = derive_pair(factory, &token_a, &token_b, code_hash)?;

        tracing::info!(
            "Pair address for {}/{}: {}",
            pair.token0,
            pair.token1,
            pair.address
        );

        Ok(ComputePairAddressResponse {
            pair_address: pair.address.to_checksum(None),
            token0: pair.token0.checksummed(),
            token1: pair.token1.checksummed(),
            factory_address: factory.to_checksum(None),
            init_code_hash: format!("{code_hash:#x}"),
        })
    }

    /// Checksummed router address for the chain. The address is informational,
    /// so a missing or malformed entry leaves it out instead of failing the swap.
    fn configured_router(&self, chain_id: u64) -> Option<String> {
        let Some(deployment) = self.config.deployment(chain_id) else {
            tracing::warn!("No router deployment configured for chain {chain_id}");
            return None;
        };
        match validate_and_parse_address(&deployment.router) {
            Ok(router) => Some(router.to_checksum(None)),
            Err(e) => {
                tracing::warn!("Ignoring router configured for chain {chain_id}: {e}");
                None
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for SwapRouterService {}
