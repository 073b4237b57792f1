//! Exact rational percentages.

use crate::amount::CurrencyAmount;
use crate::common::{U256, U512};
use crate::errors::AmountError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An exact rational fraction, used for slippage tolerances.
///
/// Comparison and equality are value-based via cross-multiplication, so
/// `1/200` and `50/10000` are the same percent. No floating point is
/// involved anywhere.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPercent")]
pub struct Percent {
	numerator: U256,
	denominator: U256,
}

/// Unvalidated wire form; conversion enforces the denominator invariant so
/// deserialized data cannot bypass [`Percent::new`].
#[derive(Deserialize)]
struct RawPercent {
	numerator: U256,
	denominator: U256,
}

impl TryFrom<RawPercent> for Percent {
	type Error = String;

	fn try_from(raw: RawPercent) -> Result<Self, Self::Error> {
		if raw.denominator.is_zero() {
			return Err("percent denominator must be non-zero".to_string());
		}
		Ok(Self::new(raw.numerator, raw.denominator))
	}
}

impl Percent {
	/// Builds a fraction `numerator / denominator`.
	///
	/// A zero denominator is a programmer error.
	pub fn new(numerator: U256, denominator: U256) -> Self {
		assert!(!denominator.is_zero(), "percent denominator must be non-zero");
		Self {
			numerator,
			denominator,
		}
	}

	/// Convenience constructor: `bps` basis points (1 bps = 0.01%).
	pub fn from_basis_points(bps: u64) -> Self {
		Self::new(U256::from(bps), U256::from(10_000u64))
	}

	pub fn zero() -> Self {
		Self::new(U256::ZERO, U256::from(1u64))
	}

	pub fn numerator(&self) -> U256 {
		self.numerator
	}

	pub fn denominator(&self) -> U256 {
		self.denominator
	}

	pub fn is_zero(&self) -> bool {
		self.numerator.is_zero()
	}

	/// `amount / (1 + self)`, rounded down.
	///
	/// This is the minimum an exact-input trade may deliver while staying
	/// within this slippage tolerance.
	pub fn discount(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount, AmountError> {
		let numer = U512::from(amount.raw()) * U512::from(self.denominator);
		let denom = U512::from(self.denominator) + U512::from(self.numerator);
		let raw = narrow_to_u256(numer / denom)?;
		Ok(CurrencyAmount::new(amount.currency().clone(), raw))
	}

	/// `amount * (1 + self)`, rounded up.
	///
	/// This is the maximum an exact-output trade may spend while staying
	/// within this slippage tolerance.
	pub fn markup(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount, AmountError> {
		let factor = U512::from(self.denominator) + U512::from(self.numerator);
		let numer = U512::from(amount.raw())
			.checked_mul(factor)
			.ok_or(AmountError::AmountOverflow)?;
		let denom = U512::from(self.denominator);
		let quotient = numer / denom;
		let ceil = if (numer % denom).is_zero() {
			quotient
		} else {
			quotient + U512::from(1u64)
		};
		let raw = narrow_to_u256(ceil)?;
		Ok(CurrencyAmount::new(amount.currency().clone(), raw))
	}
}

/// Narrows a widened intermediate back to 256 bits.
fn narrow_to_u256(value: U512) -> Result<U256, AmountError> {
	if value > U512::from(U256::MAX) {
		return Err(AmountError::AmountOverflow);
	}
	Ok(value.wrapping_to::<U256>())
}

impl PartialEq for Percent {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl PartialOrd for Percent {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Percent {
	fn cmp(&self, other: &Self) -> Ordering {
		let left = U512::from(self.numerator) * U512::from(other.denominator);
		let right = U512::from(other.numerator) * U512::from(self.denominator);
		left.cmp(&right)
	}
}

impl fmt::Display for Percent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.numerator, self.denominator)
	}
}
