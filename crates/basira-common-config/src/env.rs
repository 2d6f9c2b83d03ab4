// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret loading from the environment.
//!
//! Secrets are read from `KEY`, or from the file named by `KEY_FILE` when
//! the direct variable is unset. The `*_FILE` indirection keeps secret
//! material out of process listings and unit files.

use std::path::PathBuf;

use thiserror::Error;

use crate::secret::SecretString;

/// Errors from reading a secret out of the environment.
#[derive(Debug, Error)]
pub enum SecretEnvError {
	/// `KEY_FILE` was set but the file could not be read.
	#[error("failed to read secret file {path} for {key}: {source}")]
	Unreadable {
		key: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The variable (or file) was present but empty after trimming.
	#[error("secret {key} is present but empty")]
	Empty { key: String },
}

/// Error for secrets that must be present.
#[derive(Debug, Error)]
pub enum RequiredSecretError {
	/// Neither `KEY` nor `KEY_FILE` is set.
	#[error("missing required environment variable: {key}")]
	Missing { key: String },

	#[error(transparent)]
	Env(#[from] SecretEnvError),
}

/// Load an optional secret from `key` or `key_FILE`.
///
/// Returns `Ok(None)` when neither variable is set. Whitespace (including
/// the trailing newline most secret files carry) is trimmed.
pub fn load_secret_env(key: &str) -> Result<Option<SecretString>, SecretEnvError> {
	if let Ok(value) = std::env::var(key) {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Err(SecretEnvError::Empty {
				key: key.to_string(),
			});
		}
		return Ok(Some(SecretString::new(trimmed.to_string())));
	}

	let file_key = format!("{key}_FILE");
	if let Ok(path) = std::env::var(&file_key) {
		let path = PathBuf::from(path);
		let contents =
			std::fs::read_to_string(&path).map_err(|source| SecretEnvError::Unreadable {
				key: key.to_string(),
				path: path.clone(),
				source,
			})?;
		let trimmed = contents.trim();
		if trimmed.is_empty() {
			return Err(SecretEnvError::Empty {
				key: key.to_string(),
			});
		}
		return Ok(Some(SecretString::new(trimmed.to_string())));
	}

	Ok(None)
}

/// Load a secret that must be present, from `key` or `key_FILE`.
pub fn require_secret_env(key: &str) -> Result<SecretString, RequiredSecretError> {
	match load_secret_env(key)? {
		Some(secret) => Ok(secret),
		None => Err(RequiredSecretError::Missing {
			key: key.to_string(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	// Environment mutation is process-global, so each test uses a key
	// unique to that test.

	#[test]
	fn absent_variable_is_none() {
		assert!(load_secret_env("BASIRA_TEST_ABSENT").unwrap().is_none());
	}

	#[test]
	fn direct_variable_is_loaded_and_trimmed() {
		std::env::set_var("BASIRA_TEST_DIRECT", "  sk-value\n");
		let secret = load_secret_env("BASIRA_TEST_DIRECT").unwrap().unwrap();
		assert_eq!(secret.expose(), "sk-value");
		std::env::remove_var("BASIRA_TEST_DIRECT");
	}

	#[test]
	fn empty_variable_is_an_error() {
		std::env::set_var("BASIRA_TEST_EMPTY", "   ");
		let result = load_secret_env("BASIRA_TEST_EMPTY");
		assert!(matches!(result, Err(SecretEnvError::Empty { .. })));
		std::env::remove_var("BASIRA_TEST_EMPTY");
	}

	#[test]
	fn file_indirection_is_loaded() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "whsec_filesecret").unwrap();
		std::env::set_var("BASIRA_TEST_INDIRECT_FILE", file.path());
		let secret = load_secret_env("BASIRA_TEST_INDIRECT").unwrap().unwrap();
		assert_eq!(secret.expose(), "whsec_filesecret");
		std::env::remove_var("BASIRA_TEST_INDIRECT_FILE");
	}

	#[test]
	fn unreadable_file_is_an_error() {
		std::env::set_var("BASIRA_TEST_MISSING_FILE_FILE", "/nonexistent/secret");
		let result = load_secret_env("BASIRA_TEST_MISSING_FILE");
		assert!(matches!(result, Err(SecretEnvError::Unreadable { .. })));
		std::env::remove_var("BASIRA_TEST_MISSING_FILE_FILE");
	}

	#[test]
	fn require_reports_missing() {
		let result = require_secret_env("BASIRA_TEST_REQUIRED_ABSENT");
		assert!(matches!(result, Err(RequiredSecretError::Missing { .. })));
	}
}
