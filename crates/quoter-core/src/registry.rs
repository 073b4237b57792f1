//! Static registry of liquidity platforms.

use crate::adapter::SourceAdapter;
use crate::error::AggregatorError;
use quoter_types::{ChainId, PlatformDescriptor};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// One registered platform: its descriptor and the adapter that quotes it.
///
/// The descriptor is held separately from the adapter so deployment
/// configuration can narrow the chains a source is used on without
/// touching the adapter itself.
#[derive(Clone)]
pub struct RegisteredPlatform {
	descriptor: PlatformDescriptor,
	adapter: Arc<dyn SourceAdapter>,
}

impl RegisteredPlatform {
	pub fn new(descriptor: PlatformDescriptor, adapter: Arc<dyn SourceAdapter>) -> Self {
		Self {
			descriptor,
			adapter,
		}
	}

	pub fn descriptor(&self) -> &PlatformDescriptor {
		&self.descriptor
	}

	pub fn adapter(&self) -> &Arc<dyn SourceAdapter> {
		&self.adapter
	}
}

impl std::fmt::Debug for RegisteredPlatform {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RegisteredPlatform")
			.field("descriptor", &self.descriptor)
			.finish_non_exhaustive()
	}
}

/// Ordered, immutable set of platforms, fixed at service construction.
///
/// Registration order is deterministic and is the stable tie-break used
/// by everything downstream: candidates come back in this order before
/// ranking.
#[derive(Debug, Default)]
pub struct PlatformRegistry {
	entries: Vec<RegisteredPlatform>,
}

impl PlatformRegistry {
	/// Builds a registry, rejecting duplicate platform names.
	pub fn new(entries: Vec<RegisteredPlatform>) -> Result<Self, AggregatorError> {
		let mut seen = HashSet::new();
		for entry in &entries {
			if !seen.insert(entry.descriptor.name().to_string()) {
				return Err(AggregatorError::InvalidConfiguration(format!(
					"duplicate platform name: {}",
					entry.descriptor.name()
				)));
			}
		}
		Ok(Self { entries })
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn descriptors(&self) -> impl Iterator<Item = &PlatformDescriptor> + '_ {
		self.entries.iter().map(|e| &e.descriptor)
	}

	/// Platforms supporting `chain_id`, in registration order. Pure filter.
	pub fn platforms_for(&self, chain_id: ChainId) -> Vec<RegisteredPlatform> {
		self.entries
			.iter()
			.filter(|e| e.descriptor.supports_chain(chain_id))
			.cloned()
			.collect()
	}

	/// Chain filter intersected with an optional caller-supplied name
	/// filter. Unknown names in the filter simply match nothing.
	pub fn select(&self, chain_id: ChainId, names: Option<&[&str]>) -> Vec<RegisteredPlatform> {
		let selected: Vec<RegisteredPlatform> = self
			.entries
			.iter()
			.filter(|e| e.descriptor.supports_chain(chain_id))
			.filter(|e| match names {
				Some(names) => names.contains(&e.descriptor.name()),
				None => true,
			})
			.cloned()
			.collect();
		debug!(
			chain_id,
			selected = selected.len(),
			registered = self.entries.len(),
			"selected platforms for request"
		);
		selected
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::adapter::AdapterError;
	use async_trait::async_trait;
	use quoter_types::{SwapRequest, Trade};

	struct StubAdapter(PlatformDescriptor);

	#[async_trait]
	impl SourceAdapter for StubAdapter {
		fn descriptor(&self) -> PlatformDescriptor {
			self.0.clone()
		}

		async fn compute_trade(&self, _request: &SwapRequest) -> Result<Trade, AdapterError> {
			Err(AdapterError::NoRoute)
		}
	}

	fn entry(name: &str, chains: Vec<ChainId>) -> RegisteredPlatform {
		let descriptor = PlatformDescriptor::new(name, chains);
		RegisteredPlatform::new(descriptor.clone(), Arc::new(StubAdapter(descriptor)))
	}

	#[test]
	fn test_duplicate_names_are_rejected() {
		let err = PlatformRegistry::new(vec![entry("a", vec![1]), entry("a", vec![1])])
			.err()
			.unwrap();
		assert!(matches!(err, AggregatorError::InvalidConfiguration(_)));
	}

	#[test]
	fn test_chain_filter_preserves_registration_order() {
		let registry = PlatformRegistry::new(vec![
			entry("first", vec![1, 10]),
			entry("second", vec![137]),
			entry("third", vec![1]),
		])
		.unwrap();

		let names: Vec<String> = registry
			.platforms_for(1)
			.iter()
			.map(|e| e.descriptor().name().to_string())
			.collect();
		assert_eq!(names, vec!["first", "third"]);
	}

	#[test]
	fn test_name_filter_intersects_chain_filter() {
		let registry = PlatformRegistry::new(vec![
			entry("first", vec![1]),
			entry("second", vec![1]),
		])
		.unwrap();

		let selected = registry.select(1, Some(&["second", "unknown"]));
		assert_eq!(selected.len(), 1);
		assert_eq!(selected[0].descriptor().name(), "second");
	}
}
