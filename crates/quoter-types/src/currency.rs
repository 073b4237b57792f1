//! Currency identities.

use crate::common::{Address, ChainId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A chain-scoped asset: either the chain's native coin or a fungible token.
///
/// Equality and hashing identify a currency by `(chain_id, address)` for
/// tokens and by `chain_id` alone for native assets. Symbol and decimals are
/// descriptive metadata and deliberately excluded.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Currency {
	Native {
		chain_id: ChainId,
		symbol: String,
		decimals: u8,
	},
	Token {
		chain_id: ChainId,
		address: Address,
		symbol: String,
		decimals: u8,
	},
}

impl Currency {
	pub fn native(chain_id: ChainId, symbol: impl Into<String>, decimals: u8) -> Self {
		Self::Native {
			chain_id,
			symbol: symbol.into(),
			decimals,
		}
	}

	pub fn token(
		chain_id: ChainId,
		address: Address,
		symbol: impl Into<String>,
		decimals: u8,
	) -> Self {
		Self::Token {
			chain_id,
			address,
			symbol: symbol.into(),
			decimals,
		}
	}

	pub fn chain_id(&self) -> ChainId {
		match self {
			Self::Native { chain_id, .. } | Self::Token { chain_id, .. } => *chain_id,
		}
	}

	pub fn symbol(&self) -> &str {
		match self {
			Self::Native { symbol, .. } | Self::Token { symbol, .. } => symbol,
		}
	}

	pub fn decimals(&self) -> u8 {
		match self {
			Self::Native { decimals, .. } | Self::Token { decimals, .. } => *decimals,
		}
	}

	/// Token contract address, if this is a token.
	pub fn address(&self) -> Option<Address> {
		match self {
			Self::Native { .. } => None,
			Self::Token { address, .. } => Some(*address),
		}
	}
}

impl PartialEq for Currency {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Native { chain_id: a, .. }, Self::Native { chain_id: b, .. }) => a == b,
			(
				Self::Token {
					chain_id: a,
					address: addr_a,
					..
				},
				Self::Token {
					chain_id: b,
					address: addr_b,
					..
				},
			) => a == b && addr_a == addr_b,
			_ => false,
		}
	}
}

impl Hash for Currency {
	fn hash<H: Hasher>(&self, state: &mut H) {
		match self {
			Self::Native { chain_id, .. } => {
				state.write_u8(0);
				chain_id.hash(state);
			}
			Self::Token {
				chain_id, address, ..
			} => {
				state.write_u8(1);
				chain_id.hash(state);
				address.hash(state);
			}
		}
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}@{}", self.symbol(), self.chain_id())
	}
}
