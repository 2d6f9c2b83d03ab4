// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAI API client implementation.

use std::time::Duration;

use basira_common_http::{retry, RetryConfig};
use reqwest::Client;
use tracing::{debug, error, instrument};

use crate::error::OpenAIError;
use crate::types::{
	GenerateOptions, OpenAIConfig, OpenAIErrorBody, OpenAIMessage, OpenAIRequest, OpenAIResponse,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the OpenAI chat-completions API.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
	http_client: Client,
	config: OpenAIConfig,
	retry_config: RetryConfig,
}

impl OpenAIClient {
	/// Creates a new client from a resolved configuration.
	pub fn new(config: OpenAIConfig) -> Self {
		let http_client = basira_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			config,
			retry_config: RetryConfig::default(),
		}
	}

	/// Sets a custom retry configuration.
	pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
		self.retry_config = retry_config;
		self
	}

	/// The configured default model.
	pub fn model(&self) -> &str {
		&self.config.model
	}

	/// Generates text from a single user prompt.
	///
	/// One non-streaming completion call; the first choice's content is
	/// returned, or the empty string when the provider returns none.
	#[instrument(skip(self, prompt), fields(model = %options.model.as_deref().unwrap_or(&self.config.model)))]
	pub async fn generate_text(
		&self,
		prompt: &str,
		options: &GenerateOptions,
	) -> Result<String, OpenAIError> {
		let request = OpenAIRequest {
			model: options
				.model
				.clone()
				.unwrap_or_else(|| self.config.model.clone()),
			messages: vec![OpenAIMessage::user(prompt)],
			max_tokens: Some(options.max_tokens.unwrap_or(self.config.max_tokens)),
			temperature: Some(options.temperature.unwrap_or(self.config.temperature)),
		};

		let response = retry(&self.retry_config, || self.chat_completion(&request)).await?;
		Ok(response.first_content())
	}

	/// Performs one chat-completion request.
	pub async fn chat_completion(
		&self,
		request: &OpenAIRequest,
	) -> Result<OpenAIResponse, OpenAIError> {
		let url = format!("{}/chat/completions", self.config.base_url);
		debug!(url = %url, model = %request.model, "Sending chat completion request to OpenAI");

		let response = self
			.http_client
			.post(&url)
			.bearer_auth(self.config.api_key.expose())
			.json(request)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return OpenAIError::Timeout;
				}
				error!(error = %e, "Network error during OpenAI request");
				OpenAIError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from OpenAI");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			let message = serde_json::from_str::<OpenAIErrorBody>(&body)
				.map(|e| e.error.message)
				.unwrap_or(body);

			if status_code == 401 || status_code == 403 {
				error!(status = status_code, "Unauthorized request");
				return Err(OpenAIError::Unauthorized);
			}
			if status_code == 429 {
				error!(status = status_code, "Rate limit exceeded");
				return Err(OpenAIError::RateLimited);
			}

			error!(status = status_code, message = %message, "OpenAI API error");
			return Err(OpenAIError::ApiError {
				status: status_code,
				message,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			OpenAIError::Network(e)
		})?;

		serde_json::from_str::<OpenAIResponse>(&body).map_err(|e| {
			error!(error = %e, "Failed to parse OpenAI response");
			OpenAIError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let client = OpenAIClient::new(OpenAIConfig::new("sk-test"));
		assert_eq!(client.config.base_url, "https://api.openai.com/v1");
		assert_eq!(client.model(), "gpt-5-mini");
	}

	#[test]
	fn test_with_base_url() {
		let client =
			OpenAIClient::new(OpenAIConfig::new("sk-test").with_base_url("https://proxy.local/v1"));
		assert_eq!(client.config.base_url, "https://proxy.local/v1");
	}

	#[test]
	fn test_with_retry_config() {
		let retry_config = RetryConfig {
			max_attempts: 5,
			..Default::default()
		};
		let client = OpenAIClient::new(OpenAIConfig::new("sk-test")).with_retry_config(retry_config);
		assert_eq!(client.retry_config.max_attempts, 5);
	}
}
