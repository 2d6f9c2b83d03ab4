// Copyright (c) 2025 Basira Labs. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Basira platform server binary.

use clap::{Parser, Subcommand};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Basira server - HTTP server for the Basira insight platform.
#[derive(Parser, Debug)]
#[command(name = "basira-server", about = "Basira insight platform server", version)]
struct Args {
	/// Subcommands for basira-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("basira-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = basira_server_config::load_config()?;

	// Setup tracing
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| config.logging.level.clone().into());
	if config.logging.json {
		tracing_subscriber::fmt().with_env_filter(filter).json().init();
	} else {
		tracing_subscriber::fmt().with_env_filter(filter).init();
	}

	// A partially configured deployment still boots; /api/health reports
	// exactly what is missing.
	if let Err(error) = basira_server_config::validate_config(&config) {
		tracing::warn!(error = %error, "configuration incomplete, some routes will fail");
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		model = %config.llm.model,
		"starting basira-server"
	);

	let addr = config.socket_addr();
	let state = basira_server::create_app_state(config);
	let app = basira_server::create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let listener = tokio::net::TcpListener::bind(&addr).await?;
	tracing::info!(addr = %addr, "listening");
	axum::serve(listener, app).await?;

	Ok(())
}
