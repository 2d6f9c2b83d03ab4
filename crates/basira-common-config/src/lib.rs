// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Common configuration primitives for Basira.
//!
//! This crate provides shared types and helpers for configuration across
//! all Basira crates, including:
//!
//! - [`Secret<T>`]: A wrapper type that prevents accidental logging of
//!   sensitive values
//! - [`load_secret_env`]: Helper for loading secrets from environment
//!   variables with `*_FILE` support

pub mod env;
pub mod secret;

pub use env::{load_secret_env, require_secret_env, RequiredSecretError, SecretEnvError};
pub use secret::{Secret, SecretString, REDACTED};
