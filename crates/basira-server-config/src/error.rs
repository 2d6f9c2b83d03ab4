// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use thiserror::Error;

/// Errors from loading or validating server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// One or more required variables are unset. The message lists every
	/// missing key so a deployment can be fixed in one pass.
	#[error("Missing required environment variables: {0}")]
	MissingRequired(String),

	/// A variable is set but unusable.
	#[error("Invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },

	/// A secret could not be loaded.
	#[error("Secret error: {0}")]
	Secret(String),

	/// Cross-field validation failed.
	#[error("Validation error: {0}")]
	Validation(String),
}
