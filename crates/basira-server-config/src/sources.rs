// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources and their precedence.
//!
//! The original deployment is environment-only, so the shipped sources
//! are built-in defaults and `BASIRA_SERVER_*` environment variables; a
//! file source slots into the same trait if one is ever needed.

use basira_common_config::load_secret_env;

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	AuthConfigLayer, DatabaseConfigLayer, HttpConfigLayer, LlmConfigLayer, LoggingConfigLayer,
};

/// Merge order; higher merges later and wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 0,
	Env = 1,
}

/// One provider of configuration values.
pub trait ConfigSource {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults. Contributes an empty layer; the concrete default
/// values live in each section's `finalize`.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer::default())
	}
}

/// `BASIRA_SERVER_*` environment variables.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"env"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Env
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer {
			http: Some(load_http()?),
			auth: Some(load_auth()?),
			llm: Some(load_llm()?),
			database: Some(load_database()?),
			logging: Some(load_logging()),
		})
	}
}

fn var(key: &str) -> Option<String> {
	std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn parsed_var<T: std::str::FromStr>(key: &str, expected: &str) -> Result<Option<T>, ConfigError> {
	match var(key) {
		Some(raw) => raw.parse::<T>().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: key.to_string(),
			message: format!("expected {expected}, got {raw:?}"),
		}),
		None => Ok(None),
	}
}

fn secret_var(key: &str) -> Result<Option<basira_common_config::SecretString>, ConfigError> {
	load_secret_env(key).map_err(|e| ConfigError::Secret(e.to_string()))
}

fn load_http() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: var("BASIRA_SERVER_HOST"),
		port: parsed_var("BASIRA_SERVER_PORT", "a port number")?,
		base_url: var("BASIRA_SERVER_BASE_URL"),
	})
}

fn load_auth() -> Result<AuthConfigLayer, ConfigError> {
	Ok(AuthConfigLayer {
		publishable_key: var("BASIRA_SERVER_CLERK_PUBLISHABLE_KEY"),
		secret_key: secret_var("BASIRA_SERVER_CLERK_SECRET_KEY")?,
		webhook_secret: secret_var("BASIRA_SERVER_CLERK_WEBHOOK_SECRET")?,
		api_url: var("BASIRA_SERVER_CLERK_API_URL"),
		dev_mode: parsed_var("BASIRA_SERVER_AUTH_DEV_MODE", "a boolean")?,
		environment: var("BASIRA_SERVER_ENV"),
	})
}

fn load_llm() -> Result<LlmConfigLayer, ConfigError> {
	Ok(LlmConfigLayer {
		openai_api_key: secret_var("BASIRA_SERVER_OPENAI_API_KEY")?,
		openai_model: var("BASIRA_SERVER_OPENAI_MODEL"),
		openai_embedding_model: var("BASIRA_SERVER_OPENAI_EMBEDDING_MODEL"),
		openai_max_tokens: parsed_var("BASIRA_SERVER_OPENAI_MAX_TOKENS", "an integer")?,
		openai_temperature: parsed_var("BASIRA_SERVER_OPENAI_TEMPERATURE", "a number")?,
	})
}

fn load_database() -> Result<DatabaseConfigLayer, ConfigError> {
	Ok(DatabaseConfigLayer {
		url: var("BASIRA_SERVER_SUPABASE_URL"),
		anon_key: secret_var("BASIRA_SERVER_SUPABASE_ANON_KEY")?,
		service_role_key: secret_var("BASIRA_SERVER_SUPABASE_SERVICE_ROLE_KEY")?,
	})
}

fn load_logging() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: var("BASIRA_SERVER_LOG_LEVEL"),
		json: var("BASIRA_SERVER_LOG_JSON").map(|value| value == "1" || value == "true"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_source_is_empty() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.http.is_none());
		assert!(layer.auth.is_none());
	}

	#[test]
	fn precedence_orders_env_after_defaults() {
		assert!(DefaultsSource.precedence() < EnvSource.precedence());
	}

	// Environment mutation is process-global; everything env-touching
	// lives in this single test to avoid races between parallel tests.
	#[test]
	fn env_source_reads_and_validates() {
		std::env::set_var("BASIRA_SERVER_HOST", "0.0.0.0");
		std::env::set_var("BASIRA_SERVER_PORT", "9000");
		std::env::set_var("BASIRA_SERVER_OPENAI_MODEL", "gpt-4o");
		std::env::set_var("BASIRA_SERVER_CLERK_SECRET_KEY", "sk_test_abc");

		let layer = EnvSource.load().unwrap();
		let http = layer.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("0.0.0.0"));
		assert_eq!(http.port, Some(9000));
		assert_eq!(layer.llm.unwrap().openai_model.as_deref(), Some("gpt-4o"));
		assert_eq!(
			layer.auth.unwrap().secret_key.unwrap().expose(),
			"sk_test_abc"
		);

		std::env::set_var("BASIRA_SERVER_PORT", "not-a-port");
		let result = EnvSource.load();
		assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

		for key in [
			"BASIRA_SERVER_HOST",
			"BASIRA_SERVER_PORT",
			"BASIRA_SERVER_OPENAI_MODEL",
			"BASIRA_SERVER_CLERK_SECRET_KEY",
		] {
			std::env::remove_var(key);
		}
	}
}
