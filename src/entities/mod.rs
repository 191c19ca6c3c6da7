//! Value types consumed by the router layer.
//!
//! These are the currency, amount and trade types a caller builds before asking
//! for swap parameters or a pair address. All of them are immutable once built.

pub mod currency;
pub mod error;
pub mod fraction;
pub mod token;
pub mod trade;

pub use currency::{ChainId, Currency, CurrencyAmount, NativeCurrency};
pub use error::EntityError;
pub use fraction::{Fraction, Percent};
pub use token::Token;
pub use trade::{Route, Trade, TradeType};

pub(crate) type EntityResult<T> = std::result::Result<T, EntityError>;
