//! # Noodle Vote
//!
//! A two-option poll served over HTTP: jjajangmyeon vs jjamppong.
//!
//! Visitors get the vote form at `/vote`, submit a choice, and the running
//! tally is persisted to a JSON file on disk. `/result` shows the totals.
//! A 24-hour cookie marks a client that has already voted; it is the only
//! abuse deterrent, by design.
//!
//! Run with `PORT` and `DATA_FILE` environment variables, or rely on the
//! defaults (3000, `data/votes.json`).

use std::sync::Arc;

use axum::{Router, routing::get};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod store;

use routes::{index_handler, result_handler, submit_vote_handler, vote_page_handler};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/vote", get(vote_page_handler).post(submit_vote_handler))
        .route("/result", get(result_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();
    let port = state.config.port;

    info!("Starting server...");
    let app = app(state);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");
    info!("Vote page: http://localhost:{port}/vote");
    info!("Result page: http://localhost:{port}/result");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
