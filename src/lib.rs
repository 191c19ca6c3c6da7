pub mod app;
pub mod config;
pub mod constants;
pub mod entities;
pub mod middleware;
pub mod router;
pub mod service;

pub use app::build_app;

// Re-export commonly used types for tests
pub use router::{
    Deadline, Router, RouterError, SwapParameters, TradeOptions, compute_pair_address,
    compute_pair_address_str, validate_and_parse_address,
};
pub use service::{
    ComputePairAddressRequest, ComputePairAddressResponse, SwapCallParametersRequest,
    SwapCallParametersResponse, SwapRouterService,
};
