// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the OpenAI API client.

use basira_common_http::RetryableError;
use thiserror::Error;

/// Errors that can occur when interacting with the OpenAI API.
#[derive(Debug, Error)]
pub enum OpenAIError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// Invalid API key.
	#[error("Invalid API key")]
	Unauthorized,

	/// Invalid or unparseable response from OpenAI.
	#[error("Invalid response from OpenAI: {0}")]
	InvalidResponse(String),

	/// OpenAI API returned an error status.
	#[error("OpenAI API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}

impl RetryableError for OpenAIError {
	fn is_retryable(&self) -> bool {
		match self {
			OpenAIError::Network(e) => e.is_retryable(),
			OpenAIError::Timeout => true,
			OpenAIError::RateLimited => true,
			OpenAIError::Unauthorized => false,
			OpenAIError::InvalidResponse(_) => false,
			OpenAIError::ApiError { status, .. } => *status >= 500,
		}
	}
}
