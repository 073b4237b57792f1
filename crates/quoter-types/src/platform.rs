//! Platform descriptors.

use crate::common::ChainId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static description of one liquidity source: its name and the chains it
/// can quote on. Constructed once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
	name: String,
	chain_ids: Vec<ChainId>,
}

impl PlatformDescriptor {
	pub fn new(name: impl Into<String>, chain_ids: Vec<ChainId>) -> Self {
		Self {
			name: name.into(),
			chain_ids,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn chain_ids(&self) -> &[ChainId] {
		&self.chain_ids
	}

	/// Pure, side-effect-free chain support predicate.
	pub fn supports_chain(&self, chain_id: ChainId) -> bool {
		self.chain_ids.contains(&chain_id)
	}
}

impl fmt::Display for PlatformDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name)
	}
}
