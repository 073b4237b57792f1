//! Quote aggregation core.
//!
//! Fans a swap request out to every chain-compatible liquidity source
//! concurrently, collects candidates under a shared deadline, normalizes
//! them to exact rational execution prices and selects the best executable
//! trade. Per-source failures are diagnostics, never fatal; the only
//! "empty" outcome a caller sees is a typed [`NoRouteFound`].
//!
//! ## Key components
//!
//! - [`SourceAdapter`]: the external collaborator boundary, one per source
//! - [`PlatformRegistry`]: static, ordered set of registered platforms
//! - [`Aggregator`]: concurrent fan-out/fan-in with deadline handling
//! - [`select_best`] / [`select_ranked`]: best-execution selection
//! - [`AggregatorService`]: the caller-facing facade over all of the above

use quoter_config::{AggregationSettings, QuoterConfig};
use quoter_types::{SwapRequest, Trade};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub mod adapter;
pub mod aggregation;
pub mod compare;
pub mod error;
pub mod ranking;
pub mod registry;
pub mod selection;

pub use adapter::{AdapterError, SourceAdapter};
pub use aggregation::{AggregationResult, Aggregator, AttemptOutcome, PlatformAttempt};
pub use compare::best_price_first;
pub use error::{AggregatorError, FailureKind};
pub use ranking::sorted_insert;
pub use registry::{PlatformRegistry, RegisteredPlatform};
pub use selection::{select_best, select_ranked, NoRouteFound};

/// Caller-facing aggregation service.
///
/// Immutable once built: the registry is fixed, every call is independent
/// and no state is carried between calls.
pub struct AggregatorService {
	registry: PlatformRegistry,
	aggregator: Aggregator,
	max_results: usize,
}

impl AggregatorService {
	pub fn builder() -> AggregatorServiceBuilder {
		AggregatorServiceBuilder::new()
	}

	pub fn registry(&self) -> &PlatformRegistry {
		&self.registry
	}

	/// Runs one full aggregation pass and returns the raw result with its
	/// per-platform diagnostics, candidates unranked in registration order.
	///
	/// Caller-input errors fail fast here, before anything is dispatched.
	pub async fn aggregate(
		&self,
		request: &SwapRequest,
		platform_filter: Option<&[&str]>,
		timeout: Option<Duration>,
	) -> Result<AggregationResult, AggregatorError> {
		request.validate()?;
		let selected = self.registry.select(request.chain_id(), platform_filter);
		Ok(self.aggregator.aggregate(request, selected, timeout).await)
	}

	/// Quotes the request everywhere and returns the best executable trade.
	pub async fn get_best_trade(
		&self,
		request: &SwapRequest,
		platform_filter: Option<&[&str]>,
		timeout: Option<Duration>,
	) -> Result<Trade, AggregatorError> {
		let result = self.aggregate(request, platform_filter, timeout).await?;
		Ok(select_best(result)?)
	}

	/// Quotes the request everywhere and returns up to `n` candidates in
	/// ranked order, for callers wanting alternatives. `None` uses the
	/// configured default. A fresh call re-queries all sources.
	pub async fn get_ranked_trades(
		&self,
		request: &SwapRequest,
		n: Option<usize>,
		platform_filter: Option<&[&str]>,
		timeout: Option<Duration>,
	) -> Result<Vec<Trade>, AggregatorError> {
		let result = self.aggregate(request, platform_filter, timeout).await?;
		Ok(select_ranked(&result, n.unwrap_or(self.max_results)))
	}
}

/// Builder assembling an [`AggregatorService`] from adapters and
/// configuration.
pub struct AggregatorServiceBuilder {
	adapters: Vec<Arc<dyn SourceAdapter>>,
	config: QuoterConfig,
}

impl AggregatorServiceBuilder {
	pub fn new() -> Self {
		Self {
			adapters: Vec::new(),
			config: QuoterConfig::default(),
		}
	}

	/// Registers a source adapter. Registration order is the stable
	/// tie-break order used everywhere downstream.
	pub fn with_adapter(mut self, adapter: Arc<dyn SourceAdapter>) -> Self {
		self.adapters.push(adapter);
		self
	}

	pub fn with_config(mut self, config: QuoterConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_settings(mut self, settings: AggregationSettings) -> Self {
		self.config.aggregation = settings;
		self
	}

	/// Validates the configuration and freezes the registry.
	///
	/// Platforms disabled in the configuration are dropped here; platforms
	/// with a configured chain list have their descriptor narrowed to it.
	pub fn build(self) -> Result<AggregatorService, AggregatorError> {
		quoter_config::validate_config(&self.config)
			.map_err(|e| AggregatorError::InvalidConfiguration(e.to_string()))?;

		let mut entries = Vec::with_capacity(self.adapters.len());
		for adapter in self.adapters {
			let mut descriptor = adapter.descriptor();
			if let Some(settings) = self.config.platforms.get(descriptor.name()) {
				if !settings.enabled {
					info!(platform = descriptor.name(), "platform disabled by configuration");
					continue;
				}
				if !settings.chain_ids.is_empty() {
					descriptor = quoter_types::PlatformDescriptor::new(
						descriptor.name(),
						settings.chain_ids.clone(),
					);
				}
			}
			entries.push(RegisteredPlatform::new(descriptor, adapter));
		}

		let registry = PlatformRegistry::new(entries)?;
		info!(platforms = registry.len(), "aggregator service ready");

		Ok(AggregatorService {
			registry,
			aggregator: Aggregator::new(&self.config.aggregation),
			max_results: self.config.aggregation.max_results,
		})
	}
}

impl Default for AggregatorServiceBuilder {
	fn default() -> Self {
		Self::new()
	}
}
