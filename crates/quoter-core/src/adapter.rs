//! The external collaborator boundary: one adapter per liquidity source.

use async_trait::async_trait;
use quoter_types::{PlatformDescriptor, SwapRequest, Trade};
use thiserror::Error;

/// Errors an adapter may report for a single quote computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
	/// The source has no liquidity for the requested pair. This is the
	/// required way to report a zero-output quote.
	#[error("no route for the requested pair")]
	NoRoute,
	/// The underlying RPC/subgraph/API call failed.
	#[error("network error: {0}")]
	Network(String),
	/// The adapter is misconfigured for this chain or pair.
	#[error("invalid adapter configuration: {0}")]
	InvalidConfiguration(String),
}

/// Trait implemented once per liquidity source.
///
/// Implementations must be safely invocable concurrently with other
/// adapters and must stop outbound work promptly when their future is
/// dropped: the aggregation call owns and cancels its in-flight units.
/// How a candidate is computed (pool math, on-chain calls, multi-hop
/// search) is entirely the adapter's business; the aggregation core only
/// consumes the resulting trade.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
	/// Static description of this source: name and supported chains.
	fn descriptor(&self) -> PlatformDescriptor;

	/// Computes at most one candidate trade for the request.
	async fn compute_trade(&self, request: &SwapRequest) -> Result<Trade, AdapterError>;
}
