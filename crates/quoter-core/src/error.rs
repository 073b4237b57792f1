// quoter-core/src/error.rs

use crate::selection::NoRouteFound;
use quoter_types::RequestError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to callers of the aggregation service.
///
/// Per-source failures never appear here; they are recovered inside the
/// aggregation call and reported as diagnostic records instead.
#[derive(Debug, Error)]
pub enum AggregatorError {
	/// The request failed fail-fast validation; nothing was dispatched.
	#[error("invalid request: {0}")]
	InvalidRequest(#[from] RequestError),
	/// The service was assembled from an inconsistent configuration.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),
	/// No platform produced a usable candidate. A normal outcome the
	/// caller must handle, carrying the per-platform diagnostics.
	#[error(transparent)]
	NoRouteFound(#[from] NoRouteFound),
}

/// Why a single platform contributed no candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum FailureKind {
	/// The source has no liquidity for the requested pair.
	#[error("no route")]
	NoRoute,
	/// The source did not respond within its deadline.
	#[error("timed out")]
	Timeout,
	/// The source's computation failed.
	#[error("adapter error: {0}")]
	Adapter(String),
}
