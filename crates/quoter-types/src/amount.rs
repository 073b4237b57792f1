//! Exact currency amounts.

use crate::common::U256;
use crate::currency::Currency;
use crate::errors::AmountError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A non-negative integer amount of a specific currency, in raw base units.
///
/// Arithmetic is exact and decimals-aware through the attached currency;
/// combining amounts of different currencies is an error, never a silent
/// coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
	currency: Currency,
	raw: U256,
}

impl CurrencyAmount {
	pub fn new(currency: Currency, raw: U256) -> Self {
		Self { currency, raw }
	}

	/// Builds an amount from whole units, scaled by the currency's decimals.
	pub fn from_units(currency: Currency, units: u64) -> Self {
		let scale = U256::from(10u64).pow(U256::from(currency.decimals()));
		let raw = U256::from(units) * scale;
		Self { currency, raw }
	}

	pub fn currency(&self) -> &Currency {
		&self.currency
	}

	pub fn raw(&self) -> U256 {
		self.raw
	}

	pub fn is_zero(&self) -> bool {
		self.raw.is_zero()
	}

	fn ensure_same_currency(&self, other: &Self) -> Result<(), AmountError> {
		if self.currency != other.currency {
			return Err(AmountError::CurrencyMismatch {
				expected: self.currency.to_string(),
				found: other.currency.to_string(),
			});
		}
		Ok(())
	}

	pub fn checked_add(&self, other: &Self) -> Result<Self, AmountError> {
		self.ensure_same_currency(other)?;
		let raw = self
			.raw
			.checked_add(other.raw)
			.ok_or(AmountError::AmountOverflow)?;
		Ok(Self::new(self.currency.clone(), raw))
	}

	pub fn checked_sub(&self, other: &Self) -> Result<Self, AmountError> {
		self.ensure_same_currency(other)?;
		let raw = self
			.raw
			.checked_sub(other.raw)
			.ok_or(AmountError::NegativeAmount)?;
		Ok(Self::new(self.currency.clone(), raw))
	}

	/// Exact comparison of two amounts of the same currency.
	pub fn cmp_amount(&self, other: &Self) -> Result<Ordering, AmountError> {
		self.ensure_same_currency(other)?;
		Ok(self.raw.cmp(&other.raw))
	}

	/// Renders the amount in decimal units, e.g. `1.5 ETH` for 15e17 raw.
	pub fn to_decimal_string(&self) -> String {
		let scale = U256::from(10u64).pow(U256::from(self.currency.decimals()));
		let whole = self.raw / scale;
		let frac = self.raw % scale;
		if frac.is_zero() {
			format!("{} {}", whole, self.currency.symbol())
		} else {
			let digits = format!(
				"{:0>width$}",
				frac.to_string(),
				width = self.currency.decimals() as usize
			);
			format!(
				"{}.{} {}",
				whole,
				digits.trim_end_matches('0'),
				self.currency.symbol()
			)
		}
	}
}

impl fmt::Display for CurrencyAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_decimal_string())
	}
}
