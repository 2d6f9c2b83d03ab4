// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Retry with exponential backoff for transient failures.
//!
//! Only errors whose [`RetryableError::is_retryable`] returns `true` are
//! retried; everything else surfaces immediately. Backoff doubles per
//! attempt up to a cap, with jitter to avoid thundering herds.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

/// Classifies errors as transient (worth retrying) or permanent.
pub trait RetryableError {
	fn is_retryable(&self) -> bool;
}

impl RetryableError for reqwest::Error {
	fn is_retryable(&self) -> bool {
		self.is_timeout() || self.is_connect()
	}
}

/// Retry behavior knobs.
#[derive(Debug, Clone)]
pub struct RetryConfig {
	/// Total attempts, including the first.
	pub max_attempts: u32,
	/// Backoff before the second attempt.
	pub initial_backoff: Duration,
	/// Upper bound on any single backoff.
	pub max_backoff: Duration,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_attempts: 3,
			initial_backoff: Duration::from_millis(500),
			max_backoff: Duration::from_secs(8),
		}
	}
}

/// Runs `operation` until it succeeds, returns a non-retryable error, or
/// exhausts `config.max_attempts`.
pub async fn retry<T, E, F, Fut>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
	E: RetryableError + std::fmt::Display,
	F: FnMut() -> Fut,
	Fut: Future<Output = Result<T, E>>,
{
	let mut backoff = config.initial_backoff;
	let mut attempt = 1;

	loop {
		match operation().await {
			Ok(value) => return Ok(value),
			Err(error) if error.is_retryable() && attempt < config.max_attempts => {
				let jittered = jitter(backoff);
				warn!(
					attempt,
					max_attempts = config.max_attempts,
					backoff_ms = jittered.as_millis() as u64,
					error = %error,
					"transient error, retrying"
				);
				tokio::time::sleep(jittered).await;
				backoff = (backoff * 2).min(config.max_backoff);
				attempt += 1;
			}
			Err(error) => {
				debug!(attempt, error = %error, "giving up");
				return Err(error);
			}
		}
	}
}

/// Scales a backoff by a random factor in [0.5, 1.0].
fn jitter(backoff: Duration) -> Duration {
	backoff.mul_f64(0.5 + fastrand::f64() * 0.5)
}
