//! Users API HTTP Server Binary
//!
//! Main entry point for the users REST API server. It makes the one-time
//! store connection attempt, sets up the HTTP router, and starts serving.
//! If the store is unreachable the server stays up and answers 503 on every
//! route until restarted.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) repository (default)
//! cargo run --bin users-server
//!
//! # Run against MongoDB
//! MONGO_URI=mongodb://localhost:27017 \
//!   cargo run --bin users-server --features "mongo-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `MONGO_URI`: MongoDB connection string (required for mongo-repo)
//! - `MONGO_DATABASE` / `MONGO_COLLECTION`: store names (defaults apply)
//! - `REPOSITORY_TYPE`: `mongo` | `local` (inferred from MONGO_URI if unset)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use users_api::db;
use users_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting users API server");

    // One connection attempt, no retry. A failure leaves the process
    // serving 503 on every route until it is restarted.
    let state = match db::connect_from_env().await {
        Ok(repository) => {
            info!("Store connection established");
            AppState::ready(repository)
        }
        Err(e) => {
            error!(error = %e, "Store connection failed; serving unready until restart");
            AppState::uninitialized()
        }
    };

    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
