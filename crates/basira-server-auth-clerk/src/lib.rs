// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Clerk identity-provider integration for Basira.
//!
//! Two thin surfaces, both pass-throughs to the provider:
//!
//! - [`ClerkClient`]: session-token verification against the provider's
//!   API. No token cryptography happens locally; an invalid or expired
//!   session is simply the provider saying no.
//! - [`WebhookVerifier`]: signature verification and payload typing for
//!   the provider's user-lifecycle webhooks (`user.created`,
//!   `user.updated`, `user.deleted`).
//!
//! # Security Notes
//!
//! - Session tokens arrive as `Authorization: Bearer` values and are
//!   never logged
//! - Webhook payloads are untrusted until the timestamped signature
//!   verifies against the endpoint secret

pub mod client;
pub mod error;
pub mod types;
pub mod webhook;

pub use client::ClerkClient;
pub use error::ClerkError;
pub use types::{UserEventData, VerifiedSession, WebhookEvent, WebhookEventKind};
pub use webhook::{
	WebhookError, WebhookVerifier, SVIX_ID_HEADER, SVIX_SIGNATURE_HEADER, SVIX_TIMESTAMP_HEADER,
};
