//! Candidate trades.

use crate::amount::CurrencyAmount;
use crate::errors::TradeError;
use crate::percent::Percent;
use crate::platform::PlatformDescriptor;
use crate::price::ExecutionPrice;
use crate::request::SwapRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The slippage-adjusted execution bound of a trade.
///
/// An exact-input trade guarantees a minimum delivered output; an
/// exact-output trade caps the input it may consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeLimit {
	MinimumOutput(CurrencyAmount),
	MaximumInput(CurrencyAmount),
}

/// One platform's proposed trade for a swap request.
///
/// Immutable once constructed. The execution price is the exact rational
/// `output / input`, expressed in raw units of the output currency per raw
/// unit of the input currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
	platform: PlatformDescriptor,
	input_amount: CurrencyAmount,
	output_amount: CurrencyAmount,
	execution_price: ExecutionPrice,
	maximum_slippage: Percent,
	limit: TradeLimit,
	/// Human-readable hop descriptions, e.g. pool identifiers or symbols.
	route: Vec<String>,
	fee_amount: Option<CurrencyAmount>,
}

impl Trade {
	/// Builds a candidate for `request` out of the two quoted legs.
	///
	/// Enforces the candidate invariants: the legs must carry the request's
	/// currency pair and both must be strictly positive. The slippage bound
	/// is derived from the request's tolerance and the fixed side of the
	/// request.
	pub fn from_request(
		platform: PlatformDescriptor,
		request: &SwapRequest,
		input_amount: CurrencyAmount,
		output_amount: CurrencyAmount,
		route: Vec<String>,
		fee_amount: Option<CurrencyAmount>,
	) -> Result<Self, TradeError> {
		if input_amount.currency() != request.currency_in() {
			return Err(TradeError::CurrencyMismatch(format!(
				"input leg is {}, request wants {}",
				input_amount.currency(),
				request.currency_in()
			)));
		}
		if output_amount.currency() != request.currency_out() {
			return Err(TradeError::CurrencyMismatch(format!(
				"output leg is {}, request wants {}",
				output_amount.currency(),
				request.currency_out()
			)));
		}

		let execution_price = ExecutionPrice::from_amounts(&output_amount, &input_amount)?;

		let maximum_slippage = request.max_slippage().clone();
		let limit = match request {
			SwapRequest::ExactInput { .. } => {
				TradeLimit::MinimumOutput(maximum_slippage.discount(&output_amount)?)
			}
			SwapRequest::ExactOutput { .. } => {
				TradeLimit::MaximumInput(maximum_slippage.markup(&input_amount)?)
			}
		};

		Ok(Self {
			platform,
			input_amount,
			output_amount,
			execution_price,
			maximum_slippage,
			limit,
			route,
			fee_amount,
		})
	}

	pub fn platform(&self) -> &PlatformDescriptor {
		&self.platform
	}

	pub fn input_amount(&self) -> &CurrencyAmount {
		&self.input_amount
	}

	pub fn output_amount(&self) -> &CurrencyAmount {
		&self.output_amount
	}

	pub fn execution_price(&self) -> &ExecutionPrice {
		&self.execution_price
	}

	pub fn maximum_slippage(&self) -> &Percent {
		&self.maximum_slippage
	}

	pub fn limit(&self) -> &TradeLimit {
		&self.limit
	}

	pub fn route(&self) -> &[String] {
		&self.route
	}

	pub fn fee_amount(&self) -> Option<&CurrencyAmount> {
		self.fee_amount.as_ref()
	}
}

impl fmt::Display for Trade {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: {} -> {} (price {})",
			self.platform,
			self.input_amount,
			self.output_amount,
			self.execution_price
		)
	}
}
