// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP listener configuration section.

use serde::Deserialize;

/// HTTP configuration layer (for merging).
///
/// All fields are optional to support layered configuration from
/// multiple sources (defaults, environment).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	pub host: Option<String>,
	pub port: Option<u16>,
	pub base_url: Option<String>,
}

impl HttpConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: HttpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	/// Resolves this layer into a runtime configuration.
	pub fn finalize(self) -> HttpConfig {
		let host = self.host.unwrap_or_else(|| "127.0.0.1".to_string());
		let port = self.port.unwrap_or(3001);
		let base_url = self
			.base_url
			.unwrap_or_else(|| format!("http://{host}:{port}"));
		HttpConfig {
			host,
			port,
			base_url,
		}
	}
}

/// HTTP configuration (runtime, resolved).
#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
	pub base_url: String,
}

impl Default for HttpConfig {
	fn default() -> Self {
		HttpConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn finalize_defaults() {
		let config = HttpConfigLayer::default().finalize();
		assert_eq!(config.host, "127.0.0.1");
		assert_eq!(config.port, 3001);
		assert_eq!(config.base_url, "http://127.0.0.1:3001");
	}

	#[test]
	fn base_url_follows_overridden_host_and_port() {
		let layer = HttpConfigLayer {
			host: Some("0.0.0.0".to_string()),
			port: Some(8080),
			base_url: None,
		};
		let config = layer.finalize();
		assert_eq!(config.base_url, "http://0.0.0.0:8080");
	}

	#[test]
	fn merge_overlay_wins() {
		let mut base = HttpConfigLayer {
			host: Some("127.0.0.1".to_string()),
			port: Some(3001),
			base_url: None,
		};
		base.merge(HttpConfigLayer {
			host: None,
			port: Some(9000),
			base_url: Some("https://api.basira.app".to_string()),
		});
		assert_eq!(base.host.as_deref(), Some("127.0.0.1"));
		assert_eq!(base.port, Some(9000));
		assert_eq!(base.base_url.as_deref(), Some("https://api.basira.app"));
	}
}
