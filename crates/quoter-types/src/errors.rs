//! Error types for value-level arithmetic and construction.

use thiserror::Error;

/// Errors raised by exact amount arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
	/// Two amounts with different currencies were combined or compared.
	#[error("currency mismatch: {expected} vs {found}")]
	CurrencyMismatch { expected: String, found: String },
	/// The result does not fit in 256 bits.
	#[error("amount overflow")]
	AmountOverflow,
	/// A subtraction would have produced a negative amount.
	#[error("negative amount")]
	NegativeAmount,
}

/// Errors raised while constructing a candidate trade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
	/// Candidate amounts do not match the request's currency pair.
	#[error("candidate currency mismatch: {0}")]
	CurrencyMismatch(String),
	/// A trade must move a strictly positive amount on both legs.
	#[error("zero-amount trade leg: {0}")]
	ZeroAmount(&'static str),
	/// Slippage arithmetic overflowed.
	#[error(transparent)]
	Amount(#[from] AmountError),
}

/// Fail-fast validation errors for a swap request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
	/// The fixed side of the request is zero.
	#[error("swap amount must be positive")]
	ZeroAmount,
	/// Input and output currency are the same asset.
	#[error("input and output currency are identical")]
	SameCurrency,
	/// Input and output currencies live on different chains.
	#[error("currencies are on different chains ({input} vs {output})")]
	ChainMismatch { input: u64, output: u64 },
}
