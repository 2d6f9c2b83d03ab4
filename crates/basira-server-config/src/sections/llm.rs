// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! LLM (OpenAI) configuration section.

use basira_common_config::SecretString;

/// LLM configuration layer (for merging).
///
/// All fields are optional to support layered configuration from
/// multiple sources (defaults, environment).
#[derive(Clone, Default)]
pub struct LlmConfigLayer {
	pub openai_api_key: Option<SecretString>,
	pub openai_model: Option<String>,
	pub openai_embedding_model: Option<String>,
	pub openai_max_tokens: Option<u32>,
	pub openai_temperature: Option<f32>,
}

impl std::fmt::Debug for LlmConfigLayer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LlmConfigLayer")
			.field("openai_api_key", &self.openai_api_key)
			.field("openai_model", &self.openai_model)
			.field("openai_embedding_model", &self.openai_embedding_model)
			.field("openai_max_tokens", &self.openai_max_tokens)
			.field("openai_temperature", &self.openai_temperature)
			.finish()
	}
}

impl LlmConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: LlmConfigLayer) {
		if other.openai_api_key.is_some() {
			self.openai_api_key = other.openai_api_key;
		}
		if other.openai_model.is_some() {
			self.openai_model = other.openai_model;
		}
		if other.openai_embedding_model.is_some() {
			self.openai_embedding_model = other.openai_embedding_model;
		}
		if other.openai_max_tokens.is_some() {
			self.openai_max_tokens = other.openai_max_tokens;
		}
		if other.openai_temperature.is_some() {
			self.openai_temperature = other.openai_temperature;
		}
	}

	/// Resolves this layer into a runtime configuration.
	pub fn finalize(self) -> LlmConfig {
		LlmConfig {
			openai_api_key: self.openai_api_key,
			model: self.openai_model.unwrap_or_else(|| "gpt-5-mini".to_string()),
			embedding_model: self
				.openai_embedding_model
				.unwrap_or_else(|| "text-embedding-3-small".to_string()),
			max_tokens: self.openai_max_tokens.unwrap_or(1000),
			temperature: self.openai_temperature.unwrap_or(0.7),
		}
	}
}

/// LLM configuration (runtime, resolved).
#[derive(Clone)]
pub struct LlmConfig {
	pub openai_api_key: Option<SecretString>,
	pub model: String,
	pub embedding_model: String,
	pub max_tokens: u32,
	pub temperature: f32,
}

impl Default for LlmConfig {
	fn default() -> Self {
		LlmConfigLayer::default().finalize()
	}
}

impl std::fmt::Debug for LlmConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LlmConfig")
			.field("openai_api_key", &self.openai_api_key)
			.field("model", &self.model)
			.field("embedding_model", &self.embedding_model)
			.field("max_tokens", &self.max_tokens)
			.field("temperature", &self.temperature)
			.finish()
	}
}
