// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity-provider (Clerk) configuration section.

use basira_common_config::SecretString;

/// Auth configuration layer (for merging).
#[derive(Clone, Default)]
pub struct AuthConfigLayer {
	pub publishable_key: Option<String>,
	pub secret_key: Option<SecretString>,
	pub webhook_secret: Option<SecretString>,
	pub api_url: Option<String>,
	pub dev_mode: Option<bool>,
	pub environment: Option<String>,
}

impl std::fmt::Debug for AuthConfigLayer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthConfigLayer")
			.field("publishable_key", &self.publishable_key)
			.field("secret_key", &self.secret_key)
			.field("webhook_secret", &self.webhook_secret)
			.field("api_url", &self.api_url)
			.field("dev_mode", &self.dev_mode)
			.field("environment", &self.environment)
			.finish()
	}
}

impl AuthConfigLayer {
	/// Merges another layer on top of this one.
	pub fn merge(&mut self, other: AuthConfigLayer) {
		if other.publishable_key.is_some() {
			self.publishable_key = other.publishable_key;
		}
		if other.secret_key.is_some() {
			self.secret_key = other.secret_key;
		}
		if other.webhook_secret.is_some() {
			self.webhook_secret = other.webhook_secret;
		}
		if other.api_url.is_some() {
			self.api_url = other.api_url;
		}
		if other.dev_mode.is_some() {
			self.dev_mode = other.dev_mode;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
	}

	/// Resolves this layer into a runtime configuration.
	///
	/// Keys may finalize as absent; [`crate::validate_config`] is where
	/// required keys are enforced, so every missing variable can be
	/// reported at once.
	pub fn finalize(self) -> AuthConfig {
		AuthConfig {
			publishable_key: self.publishable_key.unwrap_or_default(),
			secret_key: self.secret_key,
			webhook_secret: self.webhook_secret,
			api_url: self
				.api_url
				.unwrap_or_else(|| "https://api.clerk.com".to_string()),
			dev_mode: self.dev_mode.unwrap_or(false),
			environment: self
				.environment
				.unwrap_or_else(|| "development".to_string()),
		}
	}
}

/// Auth configuration (runtime, resolved).
#[derive(Clone)]
pub struct AuthConfig {
	pub publishable_key: String,
	pub secret_key: Option<SecretString>,
	pub webhook_secret: Option<SecretString>,
	pub api_url: String,
	pub dev_mode: bool,
	pub environment: String,
}

impl Default for AuthConfig {
	fn default() -> Self {
		AuthConfigLayer::default().finalize()
	}
}

impl std::fmt::Debug for AuthConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthConfig")
			.field("publishable_key", &self.publishable_key)
			.field("secret_key", &self.secret_key)
			.field("webhook_secret", &self.webhook_secret)
			.field("api_url", &self.api_url)
			.field("dev_mode", &self.dev_mode)
			.field("environment", &self.environment)
			.finish()
	}
}
