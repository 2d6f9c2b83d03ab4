// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAI-specific API types.

use basira_common_config::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI client.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
	pub api_key: SecretString,
	pub base_url: String,
	pub model: String,
	pub max_tokens: u32,
	pub temperature: f32,
}

impl OpenAIConfig {
	pub fn new(api_key: impl Into<SecretString>) -> Self {
		Self {
			api_key: api_key.into(),
			base_url: "https://api.openai.com/v1".to_string(),
			model: "gpt-5-mini".to_string(),
			max_tokens: 1000,
			temperature: 0.7,
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_model(mut self, model: impl Into<String>) -> Self {
		self.model = model.into();
		self
	}

	pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
		self.max_tokens = max_tokens;
		self
	}

	pub fn with_temperature(mut self, temperature: f32) -> Self {
		self.temperature = temperature;
		self
	}
}

/// Per-call overrides for [`crate::OpenAIClient::generate_text`]; absent
/// fields fall back to the client configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
	pub model: Option<String>,
	pub max_tokens: Option<u32>,
	pub temperature: Option<f32>,
}

/// OpenAI chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIRequest {
	pub model: String,
	pub messages: Vec<OpenAIMessage>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_tokens: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub temperature: Option<f32>,
}

/// OpenAI message format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIMessage {
	pub role: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
}

impl OpenAIMessage {
	pub fn user(content: impl Into<String>) -> Self {
		Self {
			role: "user".to_string(),
			content: Some(content.into()),
		}
	}
}

/// OpenAI chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponse {
	pub id: String,
	pub object: String,
	pub created: u64,
	pub model: String,
	pub choices: Vec<OpenAIChoice>,
	#[serde(default)]
	pub usage: Option<OpenAIUsage>,
}

impl OpenAIResponse {
	/// The first choice's text, or the empty string when the response
	/// carries none.
	pub fn first_content(&self) -> String {
		self.choices
			.first()
			.and_then(|choice| choice.message.content.clone())
			.unwrap_or_default()
	}
}

/// OpenAI response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
	pub index: u32,
	pub message: OpenAIMessage,
	pub finish_reason: Option<String>,
}

/// OpenAI usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIUsage {
	pub prompt_tokens: u32,
	pub completion_tokens: u32,
	pub total_tokens: u32,
}

/// OpenAI API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIErrorBody {
	pub error: OpenAIErrorDetail,
}

/// OpenAI error details.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIErrorDetail {
	pub message: String,
	#[serde(rename = "type")]
	pub error_type: Option<String>,
	pub code: Option<String>,
}
