// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for sensitive configuration values.
//!
//! A [`Secret`] never leaks its contents through `Debug` or `Display`;
//! access requires an explicit [`Secret::expose`] call at the use site.
//! The inner value is zeroized on drop.

use std::fmt;

use serde::{Deserialize, Deserializer};
use zeroize::Zeroize;

/// Placeholder emitted wherever a secret would otherwise be printed.
pub const REDACTED: &str = "[REDACTED]";

/// A sensitive value that redacts itself in `Debug` and `Display` output.
pub struct Secret<T: Zeroize>(T);

/// The common case: a secret string (API keys, tokens, webhook secrets).
pub type SecretString = Secret<String>;

impl<T: Zeroize> Secret<T> {
	/// Wrap a sensitive value.
	pub fn new(value: T) -> Self {
		Self(value)
	}

	/// Expose the inner value. Call sites of this method are the audit
	/// surface for secret usage.
	pub fn expose(&self) -> &T {
		&self.0
	}
}

impl SecretString {
	/// Whether the wrapped string is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<T: Zeroize> Drop for Secret<T> {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

impl<T: Zeroize + Clone> Clone for Secret<T> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T: Zeroize> fmt::Display for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl<'de, T: Zeroize + Deserialize<'de>> Deserialize<'de> for Secret<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		T::deserialize(deserializer).map(Secret::new)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SecretString::new("sk-super-secret".to_string());
		let output = format!("{secret:?}");
		assert!(!output.contains("sk-super-secret"));
		assert_eq!(output, REDACTED);
	}

	#[test]
	fn display_is_redacted() {
		let secret = SecretString::new("sk-super-secret".to_string());
		assert_eq!(secret.to_string(), REDACTED);
	}

	#[test]
	fn expose_returns_inner_value() {
		let secret = SecretString::new("token-value".to_string());
		assert_eq!(secret.expose(), "token-value");
	}

	#[test]
	fn clone_preserves_value() {
		let secret = SecretString::new("abc".to_string());
		let clone = secret.clone();
		assert_eq!(clone.expose(), "abc");
	}

	#[test]
	fn deserializes_from_plain_string() {
		let secret: SecretString = serde_json::from_str("\"whsec_abc\"").unwrap();
		assert_eq!(secret.expose(), "whsec_abc");
	}
}
