// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Clerk API client.

use basira_common_http::RetryableError;
use thiserror::Error;

/// Errors that can occur when interacting with the Clerk API.
#[derive(Debug, Error)]
pub enum ClerkError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// The session token is invalid, expired, or revoked.
	#[error("Authentication required")]
	Unauthorized,

	/// Invalid or unparseable response from Clerk.
	#[error("Invalid response from Clerk: {0}")]
	InvalidResponse(String),

	/// Clerk API returned an error status.
	#[error("Clerk API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}

impl RetryableError for ClerkError {
	fn is_retryable(&self) -> bool {
		match self {
			ClerkError::Network(e) => e.is_retryable(),
			ClerkError::Timeout => true,
			ClerkError::RateLimited => true,
			ClerkError::Unauthorized => false,
			ClerkError::InvalidResponse(_) => false,
			ClerkError::ApiError { status, .. } => *status >= 500,
		}
	}
}
