// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Clerk API client implementation.

use std::time::Duration;

use basira_common_config::SecretString;
use basira_common_http::{retry, RetryConfig};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::error::ClerkError;
use crate::types::VerifiedSession;

const DEFAULT_BASE_URL: &str = "https://api.clerk.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Clerk Backend API.
#[derive(Debug, Clone)]
pub struct ClerkClient {
	http_client: Client,
	secret_key: SecretString,
	base_url: String,
	retry_config: RetryConfig,
}

#[derive(Debug, Serialize)]
struct VerifyTokenRequest<'a> {
	token: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
	id: String,
	user_id: String,
	status: String,
}

impl ClerkClient {
	/// Creates a new client with the given Backend API secret key.
	pub fn new(secret_key: impl Into<SecretString>) -> Self {
		let http_client = basira_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			secret_key: secret_key.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
			retry_config: RetryConfig::default(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets a custom retry configuration.
	pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
		self.retry_config = retry_config;
		self
	}

	/// Verifies a session token against the provider.
	///
	/// The provider does all the work; locally this is a single POST and
	/// a status check. Anything other than an active session maps to
	/// [`ClerkError::Unauthorized`].
	#[instrument(skip(self, session_token))]
	pub async fn verify_session(&self, session_token: &str) -> Result<VerifiedSession, ClerkError> {
		retry(&self.retry_config, || self.verify_session_inner(session_token)).await
	}

	async fn verify_session_inner(
		&self,
		session_token: &str,
	) -> Result<VerifiedSession, ClerkError> {
		let url = format!("{}/v1/tokens/verify", self.base_url);
		debug!(url = %url, "Verifying session token with Clerk");

		let response = self
			.http_client
			.post(&url)
			.bearer_auth(self.secret_key.expose())
			.json(&VerifyTokenRequest {
				token: session_token,
			})
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return ClerkError::Timeout;
				}
				error!(error = %e, "Network error during Clerk request");
				ClerkError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Clerk");

		if !status.is_success() {
			let status_code = status.as_u16();

			// 4xx from the verify endpoint means the token did not pass;
			// that is an auth failure, not a server fault.
			if (400..500).contains(&status_code) && status_code != 429 {
				return Err(ClerkError::Unauthorized);
			}
			if status_code == 429 {
				error!(status = status_code, "Rate limit exceeded");
				return Err(ClerkError::RateLimited);
			}

			let body = response.text().await.unwrap_or_default();
			error!(status = status_code, body = %body, "Clerk API error");
			return Err(ClerkError::ApiError {
				status: status_code,
				message: body,
			});
		}

		let session: SessionResponse = response.json().await.map_err(|e| {
			error!(error = %e, "Failed to parse Clerk response");
			ClerkError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		if session.status != "active" {
			debug!(status = %session.status, "Session is not active");
			return Err(ClerkError::Unauthorized);
		}

		Ok(VerifiedSession {
			user_id: session.user_id,
			session_id: Some(session.id),
		})
	}
}
