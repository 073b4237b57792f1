//! Exact execution prices.

use crate::amount::CurrencyAmount;
use crate::common::{U256, U512};
use crate::errors::TradeError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The exact rational price of a candidate trade: raw output units per raw
/// input unit.
///
/// Ordering and equality cross-multiply the two fractions in 512-bit space;
/// `3/2` and `6/4` are the same price. Conversion to floating point is
/// never performed, so near-equal quotes cannot be misranked by rounding.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct ExecutionPrice {
	/// Raw output amount.
	numerator: U256,
	/// Raw input amount.
	denominator: U256,
}

/// Unvalidated wire form; conversion runs the [`ExecutionPrice::from_raw`]
/// checks so deserialized data cannot carry a zero leg.
#[derive(Deserialize)]
struct RawPrice {
	numerator: U256,
	denominator: U256,
}

impl TryFrom<RawPrice> for ExecutionPrice {
	type Error = TradeError;

	fn try_from(raw: RawPrice) -> Result<Self, TradeError> {
		Self::from_raw(raw.numerator, raw.denominator)
	}
}

impl ExecutionPrice {
	/// Builds the price of a trade from its two legs.
	///
	/// Both legs must be strictly positive; a zero-output candidate must be
	/// reported as "no route" by its adapter instead of being priced.
	pub fn from_amounts(
		output: &CurrencyAmount,
		input: &CurrencyAmount,
	) -> Result<Self, TradeError> {
		Self::from_raw(output.raw(), input.raw())
	}

	pub fn from_raw(output: U256, input: U256) -> Result<Self, TradeError> {
		if output.is_zero() {
			return Err(TradeError::ZeroAmount("output"));
		}
		if input.is_zero() {
			return Err(TradeError::ZeroAmount("input"));
		}
		Ok(Self {
			numerator: output,
			denominator: input,
		})
	}

	pub fn numerator(&self) -> U256 {
		self.numerator
	}

	pub fn denominator(&self) -> U256 {
		self.denominator
	}
}

impl PartialEq for ExecutionPrice {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl PartialOrd for ExecutionPrice {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ExecutionPrice {
	fn cmp(&self, other: &Self) -> Ordering {
		let left = U512::from(self.numerator) * U512::from(other.denominator);
		let right = U512::from(other.numerator) * U512::from(self.denominator);
		left.cmp(&right)
	}
}

impl fmt::Display for ExecutionPrice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.numerator, self.denominator)
	}
}
