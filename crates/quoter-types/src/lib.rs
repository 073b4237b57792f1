//! Shared value types for the quote aggregation system.
//!
//! Everything in this crate is an immutable value object: currencies,
//! exact-precision amounts, rational percentages and prices, swap
//! requests and candidate trades. Arithmetic is exact; floating point
//! never appears in any comparison path.

pub mod amount;
pub mod common;
pub mod currency;
pub mod errors;
pub mod percent;
pub mod platform;
pub mod price;
pub mod request;
pub mod trade;

pub use amount::*;
pub use common::*;
pub use currency::*;
pub use errors::*;
pub use percent::*;
pub use platform::*;
pub use price::*;
pub use request::*;
pub use trade::*;
