// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hosted data-store (Supabase) configuration section.

use basira_common_config::SecretString;

/// Data-store configuration layer (for merging).
#[derive(Clone, Default)]
pub struct DatabaseConfigLayer {
	pub url: Option<String>,
	pub anon_key: Option<SecretString>,
	pub service_role_key: Option<SecretString>,
}

impl std::fmt::Debug for DatabaseConfigLayer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DatabaseConfigLayer")
			.field("url", &self.url)
			.field("anon_key", &self.anon_key)
			.field("service_role_key", &self.service_role_key)
			.finish()
	}
}

impl DatabaseConfigLayer {
	/// Merges another layer on top of this one.
	pub fn merge(&mut self, other: DatabaseConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.anon_key.is_some() {
			self.anon_key = other.anon_key;
		}
		if other.service_role_key.is_some() {
			self.service_role_key = other.service_role_key;
		}
	}

	/// Resolves this layer into a runtime configuration.
	pub fn finalize(self) -> DatabaseConfig {
		DatabaseConfig {
			url: self.url.unwrap_or_default(),
			anon_key: self.anon_key,
			service_role_key: self.service_role_key,
		}
	}
}

/// Data-store configuration (runtime, resolved).
///
/// The store is hosted; this is an HTTP endpoint plus keys, not a
/// connection string.
#[derive(Clone, Default)]
pub struct DatabaseConfig {
	pub url: String,
	pub anon_key: Option<SecretString>,
	pub service_role_key: Option<SecretString>,
}

impl std::fmt::Debug for DatabaseConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DatabaseConfig")
			.field("url", &self.url)
			.field("anon_key", &self.anon_key)
			.field("service_role_key", &self.service_role_key)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use basira_common_config::Secret;

	#[test]
	fn finalize_defaults_are_absent() {
		let config = DatabaseConfigLayer::default().finalize();
		assert!(config.url.is_empty());
		assert!(config.anon_key.is_none());
		assert!(config.service_role_key.is_none());
	}

	#[test]
	fn merge_overlay_wins() {
		let mut base = DatabaseConfigLayer {
			url: Some("https://base.supabase.co".to_string()),
			..Default::default()
		};
		base.merge(DatabaseConfigLayer {
			url: Some("https://overlay.supabase.co".to_string()),
			service_role_key: Some(Secret::new("service-key".to_string())),
			..Default::default()
		});
		assert_eq!(base.url.as_deref(), Some("https://overlay.supabase.co"));
		assert!(base.service_role_key.is_some());
	}

	#[test]
	fn debug_redacts_keys() {
		let config = DatabaseConfigLayer {
			anon_key: Some(Secret::new("anon-super-secret".to_string())),
			service_role_key: Some(Secret::new("service-super-secret".to_string())),
			..Default::default()
		}
		.finalize();
		let output = format!("{config:?}");
		assert!(!output.contains("anon-super-secret"));
		assert!(!output.contains("service-super-secret"));
	}
}
