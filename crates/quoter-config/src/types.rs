//! Configuration types for the quoter.

use quoter_types::ChainId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Complete quoter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuoterConfig {
	/// Aggregation timing and ranking settings.
	#[serde(default)]
	pub aggregation: AggregationSettings,
	/// Per-platform settings, keyed by platform name. Ordered so that the
	/// configuration file is reproducible.
	#[serde(default)]
	pub platforms: BTreeMap<String, PlatformSettings>,
}

/// Timing and ranking settings for one aggregation call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AggregationSettings {
	/// Shared deadline for a whole aggregation call, in milliseconds.
	#[serde(default = "default_global_timeout_ms")]
	pub global_timeout_ms: u64,
	/// Soft per-source timeout, in milliseconds.
	#[serde(default = "default_source_timeout_ms")]
	pub source_timeout_ms: u64,
	/// Bounded grace period granted past the deadline for tasks to wind
	/// down before they are aborted, in milliseconds.
	#[serde(default = "default_grace_period_ms")]
	pub grace_period_ms: u64,
	/// Default number of ranked alternatives returned to callers.
	#[serde(default = "default_max_results")]
	pub max_results: usize,
}

/// Settings for a single platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformSettings {
	/// Disabled platforms stay registered in the file but are never
	/// dispatched to.
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	/// Chains this deployment should quote on. Empty means "whatever the
	/// adapter declares".
	#[serde(default)]
	pub chain_ids: Vec<ChainId>,
}

fn default_global_timeout_ms() -> u64 {
	5_000
}

fn default_source_timeout_ms() -> u64 {
	3_000
}

fn default_grace_period_ms() -> u64 {
	250
}

fn default_max_results() -> usize {
	3
}

fn default_enabled() -> bool {
	true
}

impl Default for AggregationSettings {
	fn default() -> Self {
		Self {
			global_timeout_ms: default_global_timeout_ms(),
			source_timeout_ms: default_source_timeout_ms(),
			grace_period_ms: default_grace_period_ms(),
			max_results: default_max_results(),
		}
	}
}

impl Default for PlatformSettings {
	fn default() -> Self {
		Self {
			enabled: default_enabled(),
			chain_ids: Vec::new(),
		}
	}
}

impl AggregationSettings {
	pub fn global_timeout(&self) -> Duration {
		Duration::from_millis(self.global_timeout_ms)
	}

	pub fn source_timeout(&self) -> Duration {
		Duration::from_millis(self.source_timeout_ms)
	}

	pub fn grace_period(&self) -> Duration {
		Duration::from_millis(self.grace_period_ms)
	}
}

impl Default for QuoterConfig {
	fn default() -> Self {
		Self {
			aggregation: AggregationSettings::default(),
			platforms: BTreeMap::new(),
		}
	}
}
