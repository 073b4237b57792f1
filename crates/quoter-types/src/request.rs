//! Swap requests.

use crate::amount::CurrencyAmount;
use crate::common::{Address, ChainId};
use crate::currency::Currency;
use crate::errors::RequestError;
use crate::percent::Percent;
use serde::{Deserialize, Serialize};

/// A caller's request to swap one currency for another.
///
/// Exactly one side of the trade is fixed: either the input amount
/// (exact-input) or the output amount (exact-output). The two cases are a
/// tagged variant rather than a pair of optionals so that an impossible
/// "both fixed" or "neither fixed" request cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SwapRequest {
	ExactInput {
		amount_in: CurrencyAmount,
		currency_out: Currency,
		max_slippage: Percent,
		receiver: Option<Address>,
		trader: Option<Address>,
	},
	ExactOutput {
		amount_out: CurrencyAmount,
		currency_in: Currency,
		max_slippage: Percent,
		receiver: Option<Address>,
		trader: Option<Address>,
	},
}

impl SwapRequest {
	pub fn exact_input(
		amount_in: CurrencyAmount,
		currency_out: Currency,
		max_slippage: Percent,
	) -> Self {
		Self::ExactInput {
			amount_in,
			currency_out,
			max_slippage,
			receiver: None,
			trader: None,
		}
	}

	pub fn exact_output(
		amount_out: CurrencyAmount,
		currency_in: Currency,
		max_slippage: Percent,
	) -> Self {
		Self::ExactOutput {
			amount_out,
			currency_in,
			max_slippage,
			receiver: None,
			trader: None,
		}
	}

	pub fn currency_in(&self) -> &Currency {
		match self {
			Self::ExactInput { amount_in, .. } => amount_in.currency(),
			Self::ExactOutput { currency_in, .. } => currency_in,
		}
	}

	pub fn currency_out(&self) -> &Currency {
		match self {
			Self::ExactInput { currency_out, .. } => currency_out,
			Self::ExactOutput { amount_out, .. } => amount_out.currency(),
		}
	}

	/// Chain this request is scoped to, taken from the fixed leg.
	pub fn chain_id(&self) -> ChainId {
		match self {
			Self::ExactInput { amount_in, .. } => amount_in.currency().chain_id(),
			Self::ExactOutput { amount_out, .. } => amount_out.currency().chain_id(),
		}
	}

	pub fn max_slippage(&self) -> &Percent {
		match self {
			Self::ExactInput { max_slippage, .. } | Self::ExactOutput { max_slippage, .. } => {
				max_slippage
			}
		}
	}

	pub fn receiver(&self) -> Option<Address> {
		match self {
			Self::ExactInput { receiver, .. } | Self::ExactOutput { receiver, .. } => *receiver,
		}
	}

	pub fn trader(&self) -> Option<Address> {
		match self {
			Self::ExactInput { trader, .. } | Self::ExactOutput { trader, .. } => *trader,
		}
	}

	/// The fixed-side amount.
	pub fn fixed_amount(&self) -> &CurrencyAmount {
		match self {
			Self::ExactInput { amount_in, .. } => amount_in,
			Self::ExactOutput { amount_out, .. } => amount_out,
		}
	}

	/// Fail-fast structural validation, performed before any dispatch.
	pub fn validate(&self) -> Result<(), RequestError> {
		if self.fixed_amount().is_zero() {
			return Err(RequestError::ZeroAmount);
		}
		if self.currency_in() == self.currency_out() {
			return Err(RequestError::SameCurrency);
		}
		let input_chain = self.currency_in().chain_id();
		let output_chain = self.currency_out().chain_id();
		if input_chain != output_chain {
			return Err(RequestError::ChainMismatch {
				input: input_chain,
				output: output_chain,
			});
		}
		Ok(())
	}
}
