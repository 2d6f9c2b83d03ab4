// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User-row operations against the store's REST surface.

use std::time::Duration;

use basira_common_config::SecretString;
use basira_common_http::{retry, RetryConfig};
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, error, instrument};

use crate::error::DbError;
use crate::types::{NewUser, UserRecord, UserUpdate};

const TABLE: &str = "auth_users";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Repository for rows in the `auth_users` table.
///
/// Uses the service-role key: server-side operations bypass the store's
/// row-level security, as the original deployment did.
#[derive(Debug, Clone)]
pub struct UserRepository {
	http_client: Client,
	base_url: String,
	service_role_key: SecretString,
	retry_config: RetryConfig,
}

impl UserRepository {
	/// Creates a repository for the store at `base_url`.
	pub fn new(base_url: impl Into<String>, service_role_key: impl Into<SecretString>) -> Self {
		let http_client = basira_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			service_role_key: service_role_key.into(),
			retry_config: RetryConfig::default(),
		}
	}

	/// Sets a custom retry configuration.
	pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
		self.retry_config = retry_config;
		self
	}

	fn table_url(&self) -> String {
		format!("{}/rest/v1/{TABLE}", self.base_url)
	}

	fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
		builder
			.header("apikey", self.service_role_key.expose())
			.bearer_auth(self.service_role_key.expose())
	}

	/// Fetch a user by the identity provider's id.
	#[instrument(skip(self))]
	pub async fn get_by_clerk_id(&self, clerk_id: &str) -> Result<Option<UserRecord>, DbError> {
		retry(&self.retry_config, || self.get_by_clerk_id_inner(clerk_id)).await
	}

	async fn get_by_clerk_id_inner(&self, clerk_id: &str) -> Result<Option<UserRecord>, DbError> {
		let request = self
			.authed(self.http_client.get(self.table_url()))
			.query(&[("clerk_id", format!("eq.{clerk_id}")), ("select", "*".to_string())]);

		let rows: Vec<UserRecord> = self.send_expecting_rows(request).await?;
		Ok(rows.into_iter().next())
	}

	/// Insert a user row, returning the stored representation.
	#[instrument(skip(self, user), fields(clerk_id = %user.clerk_id))]
	pub async fn create(&self, user: &NewUser) -> Result<UserRecord, DbError> {
		let request = self
			.authed(self.http_client.post(self.table_url()))
			.header("Prefer", "return=representation")
			.json(user);

		let rows: Vec<UserRecord> = self.send_expecting_rows(request).await?;
		rows.into_iter().next().ok_or_else(|| {
			DbError::InvalidResponse("insert returned no representation".to_string())
		})
	}

	/// Update the row for `clerk_id`, returning the new representation
	/// when the row exists.
	#[instrument(skip(self, update))]
	pub async fn update(
		&self,
		clerk_id: &str,
		update: &UserUpdate,
	) -> Result<Option<UserRecord>, DbError> {
		let request = self
			.authed(self.http_client.patch(self.table_url()))
			.query(&[("clerk_id", format!("eq.{clerk_id}"))])
			.header("Prefer", "return=representation")
			.json(update);

		let rows: Vec<UserRecord> = self.send_expecting_rows(request).await?;
		Ok(rows.into_iter().next())
	}

	/// Delete the row for `clerk_id`. Deleting an absent row is a no-op,
	/// matching the store's semantics.
	#[instrument(skip(self))]
	pub async fn delete(&self, clerk_id: &str) -> Result<(), DbError> {
		let request = self
			.authed(self.http_client.delete(self.table_url()))
			.query(&[("clerk_id", format!("eq.{clerk_id}"))]);

		let response = request.send().await.map_err(map_send_error)?;
		let status = response.status();
		if !status.is_success() {
			return Err(error_for_status(status, response.text().await.unwrap_or_default()));
		}
		debug!("user row deleted");
		Ok(())
	}

	async fn send_expecting_rows(
		&self,
		request: RequestBuilder,
	) -> Result<Vec<UserRecord>, DbError> {
		let response = request.send().await.map_err(map_send_error)?;

		let status = response.status();
		debug!(status = %status, "Received response from data store");

		if !status.is_success() {
			return Err(error_for_status(status, response.text().await.unwrap_or_default()));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			DbError::Network(e)
		})?;

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse data store response");
			DbError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

fn map_send_error(e: reqwest::Error) -> DbError {
	if e.is_timeout() {
		error!("Request timed out");
		return DbError::Timeout;
	}
	error!(error = %e, "Network error during data store request");
	DbError::Network(e)
}

fn error_for_status(status: StatusCode, body: String) -> DbError {
	let status_code = status.as_u16();
	if status_code == 401 || status_code == 403 {
		error!(status = status_code, "Data store rejected the service key");
		return DbError::Unauthorized;
	}
	error!(status = status_code, body = %body, "Data store error");
	DbError::ApiError {
		status: status_code,
		message: body,
	}
}
