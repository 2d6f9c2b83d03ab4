// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP server for the Basira insight platform.
//!
//! Thin by design: routes validate configuration and sessions, then make
//! single pass-through calls to the vendor services (text generation,
//! identity provider, hosted data store). The localized landing surface
//! is driven by `basira-common-i18n`'s locale resolver.

pub mod api;
pub mod auth_middleware;
pub mod error;
pub mod i18n;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
