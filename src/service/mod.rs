pub mod error;
pub mod swap_router;
pub mod types;
pub mod utils;


pub use error::ServiceError;
pub use swap_router::SwapRouterService;
pub use types::*;

pub(crate) type ServiceResult<T> = std::result::Result<T, ServiceError>;
