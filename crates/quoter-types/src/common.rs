//! Common types used throughout the quoter system.

// Re-export commonly used ethereum types
pub use alloy::primitives::{Address, U256, U512};

/// Network identifier. Every other entity is implicitly scoped to one chain.
pub type ChainId = u64;
