pub mod address;
pub mod contract;
pub mod error;
pub mod pair;
pub mod swap;


pub use address::validate_and_parse_address;
pub use error::RouterError;
pub use pair::{
    Pair, compute_pair_address, compute_pair_address_str, derive_pair, parse_code_hash,
};
pub use swap::{
    ArgLayout, CurrencyConfig, Deadline, MethodParameters, Router, RouterMethod, SWAP_TABLE,
    SwapArg, SwapCall, SwapParameters, SwapRow, TradeOptions,
};

pub type RouterResult<T> = std::result::Result<T, RouterError>;
