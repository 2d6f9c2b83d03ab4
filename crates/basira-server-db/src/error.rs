// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the data-store client.

use basira_common_http::RetryableError;
use thiserror::Error;

/// Errors that can occur when interacting with the data store.
#[derive(Debug, Error)]
pub enum DbError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The service key was rejected.
	#[error("Data store rejected the service key")]
	Unauthorized,

	/// Invalid or unparseable response from the store.
	#[error("Invalid response from data store: {0}")]
	InvalidResponse(String),

	/// The store returned an error status.
	#[error("Data store error: {status} - {message}")]
	ApiError { status: u16, message: String },
}

impl RetryableError for DbError {
	fn is_retryable(&self) -> bool {
		match self {
			DbError::Network(e) => e.is_retryable(),
			DbError::Timeout => true,
			DbError::Unauthorized => false,
			DbError::InvalidResponse(_) => false,
			DbError::ApiError { status, .. } => *status >= 500,
		}
	}
}
