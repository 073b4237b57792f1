// quoter-config/src/lib.rs

//! Configuration loading for the quote aggregator.
//!
//! Loads a TOML file, substitutes `${VAR}` environment references, applies
//! `QUOTER_`-prefixed environment overrides and validates the result.

use std::env;
use std::path::Path;
use thiserror::Error;

pub mod types;

pub use types::{AggregationSettings, PlatformSettings, QuoterConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Configuration loader with environment variable substitution.
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "QUOTER_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<QuoterConfig, ConfigError> {
		let mut config = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			return Err(ConfigError::FileNotFound(
				"No configuration file specified".to_string(),
			));
		};

		self.apply_env_overrides(&mut config)?;
		validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &str) -> Result<QuoterConfig, ConfigError> {
		let content = tokio::fs::read_to_string(file_path).await?;

		let substituted_content = self.substitute_env_vars(&content)?;

		let config: QuoterConfig = toml::from_str(&substituted_content)
			.map_err(|e| ConfigError::ParseError(e.to_string()))?;

		Ok(config)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut QuoterConfig) -> Result<(), ConfigError> {
		if let Ok(timeout) = env::var(format!("{}GLOBAL_TIMEOUT_MS", self.env_prefix)) {
			config.aggregation.global_timeout_ms = timeout.parse().map_err(|e| {
				ConfigError::ValidationError(format!("Invalid global timeout: {}", e))
			})?;
		}

		if let Ok(timeout) = env::var(format!("{}SOURCE_TIMEOUT_MS", self.env_prefix)) {
			config.aggregation.source_timeout_ms = timeout.parse().map_err(|e| {
				ConfigError::ValidationError(format!("Invalid source timeout: {}", e))
			})?;
		}

		if let Ok(max_results) = env::var(format!("{}MAX_RESULTS", self.env_prefix)) {
			config.aggregation.max_results = max_results
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid max results: {}", e)))?;
		}

		Ok(())
	}
}

/// Structural validation shared by file loading and programmatic configs.
pub fn validate_config(config: &QuoterConfig) -> Result<(), ConfigError> {
	if config.aggregation.global_timeout_ms == 0 {
		return Err(ConfigError::ValidationError(
			"Global timeout must be positive".to_string(),
		));
	}

	if config.aggregation.source_timeout_ms == 0 {
		return Err(ConfigError::ValidationError(
			"Source timeout must be positive".to_string(),
		));
	}

	if config.aggregation.max_results == 0 {
		return Err(ConfigError::ValidationError(
			"Max results must be positive".to_string(),
		));
	}

	if !config.platforms.is_empty() && !config.platforms.values().any(|p| p.enabled) {
		return Err(ConfigError::ValidationError(
			"At least one platform must be enabled".to_string(),
		));
	}

	Ok(())
}
