// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Basira server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`BASIRA_SERVER_*`)
//!
//! Loading is deliberately lenient: [`load_config`] succeeds with whatever
//! is present, and [`validate_config`] reports every missing required
//! variable in one message. The health endpoint re-runs validation at
//! request time, so a partially configured deployment still boots and
//! reports what it is missing.
//!
//! # Usage
//!
//! ```ignore
//! use basira_server_config::{load_config, validate_config};
//!
//! let config = load_config()?;
//! if let Err(e) = validate_config(&config) {
//!     tracing::warn!(error = %e, "configuration incomplete");
//! }
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub auth: AuthConfig,
	pub llm: LlmConfig,
	pub database: DatabaseConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`BASIRA_SERVER_*`)
/// 2. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];

	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let auth = layer.auth.unwrap_or_default().finalize();
	let llm = layer.llm.unwrap_or_default().finalize();
	let database = layer.database.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	let config = ServerConfig {
		http,
		auth,
		llm,
		database,
		logging,
	};

	info!(
		host = %config.http.host,
		port = config.http.port,
		llm_model = %config.llm.model,
		llm_configured = config.llm.openai_api_key.is_some(),
		database_configured = !config.database.url.is_empty(),
		auth_configured = config.auth.secret_key.is_some(),
		"Server configuration loaded"
	);

	Ok(config)
}

/// Validate that every required variable is present, and that cross-field
/// rules hold.
///
/// Missing variables are reported together, named by their environment
/// keys, so a deployment can be fixed in one pass.
pub fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
	let mut missing = Vec::new();

	if config.llm.openai_api_key.is_none() {
		missing.push("BASIRA_SERVER_OPENAI_API_KEY");
	}
	if config.database.url.is_empty() {
		missing.push("BASIRA_SERVER_SUPABASE_URL");
	}
	if config.database.anon_key.is_none() {
		missing.push("BASIRA_SERVER_SUPABASE_ANON_KEY");
	}
	if config.database.service_role_key.is_none() {
		missing.push("BASIRA_SERVER_SUPABASE_SERVICE_ROLE_KEY");
	}
	if config.auth.publishable_key.is_empty() {
		missing.push("BASIRA_SERVER_CLERK_PUBLISHABLE_KEY");
	}
	if config.auth.secret_key.is_none() {
		missing.push("BASIRA_SERVER_CLERK_SECRET_KEY");
	}
	if config.auth.webhook_secret.is_none() {
		missing.push("BASIRA_SERVER_CLERK_WEBHOOK_SECRET");
	}

	if !missing.is_empty() {
		return Err(ConfigError::MissingRequired(missing.join(", ")));
	}

	if config.auth.dev_mode && config.auth.environment == "production" {
		return Err(ConfigError::Validation(
			"BASIRA_SERVER_AUTH_DEV_MODE=1 is set while BASIRA_SERVER_ENV=production. \
			 This is a security risk. Remove BASIRA_SERVER_AUTH_DEV_MODE or set \
			 BASIRA_SERVER_ENV to a non-production value."
				.to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use basira_common_config::Secret;

	fn complete_config() -> ServerConfig {
		ServerConfig {
			auth: AuthConfig {
				publishable_key: "pk_test_abc".to_string(),
				secret_key: Some(Secret::new("sk_test_abc".to_string())),
				webhook_secret: Some(Secret::new("whsec_abc".to_string())),
				..Default::default()
			},
			llm: LlmConfig {
				openai_api_key: Some(Secret::new("sk-openai".to_string())),
				..LlmConfigLayer::default().finalize()
			},
			database: DatabaseConfig {
				url: "https://project.supabase.co".to_string(),
				anon_key: Some(Secret::new("anon".to_string())),
				service_role_key: Some(Secret::new("service".to_string())),
			},
			..Default::default()
		}
	}

	#[test]
	fn complete_config_validates() {
		assert!(validate_config(&complete_config()).is_ok());
	}

	#[test]
	fn missing_variables_are_reported_together() {
		let config = ServerConfig::default();
		let error = validate_config(&config).unwrap_err();
		let message = error.to_string();
		assert!(message.contains("BASIRA_SERVER_OPENAI_API_KEY"));
		assert!(message.contains("BASIRA_SERVER_SUPABASE_URL"));
		assert!(message.contains("BASIRA_SERVER_CLERK_WEBHOOK_SECRET"));
	}

	#[test]
	fn dev_mode_in_production_is_rejected() {
		let mut config = complete_config();
		config.auth.dev_mode = true;
		config.auth.environment = "production".to_string();
		let result = validate_config(&config);
		assert!(result.is_err());
		assert!(result.unwrap_err().to_string().contains("security risk"));
	}

	#[test]
	fn dev_mode_in_development_is_ok() {
		let mut config = complete_config();
		config.auth.dev_mode = true;
		config.auth.environment = "development".to_string();
		assert!(validate_config(&config).is_ok());
	}

	#[test]
	fn socket_addr_joins_host_and_port() {
		let config = ServerConfig::default();
		assert_eq!(config.socket_addr(), "127.0.0.1:3001");
	}
}
