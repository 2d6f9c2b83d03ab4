// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections, one module per concern.

mod auth;
mod database;
mod http;
mod llm;
mod logging;

pub use auth::{AuthConfig, AuthConfigLayer};
pub use database::{DatabaseConfig, DatabaseConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use llm::{LlmConfig, LlmConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
