// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAI chat-completions client for Basira.
//!
//! This crate provides a typed Rust client for the OpenAI API,
//! encapsulating HTTP communication and response parsing. Insight
//! generation is a single non-streaming completion call; there is no
//! prompt engineering here, the caller supplies the full prompt.

pub mod client;
pub mod error;
pub mod types;

pub use basira_common_http::RetryConfig;
pub use client::OpenAIClient;
pub use error::OpenAIError;
pub use types::{GenerateOptions, OpenAIConfig};
