//! Inbound webhook.
//!
//! `POST /` accepts one JSON message per delivery, acknowledges it right
//! away and dispatches it in the background. Bodies that do not decode are
//! rejected by the extractor and never reach the dispatcher.

use crate::error::ServeError;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use quip_core::Message;
use quip_std::Dispatcher;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Body returned for every accepted delivery.
pub const ACK: &str = "OK";

/// Build the webhook routes around a dispatcher.
pub fn router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/", post(receive))
        .route("/health", get(|| async { StatusCode::OK }))
        .with_state(dispatcher)
}

async fn receive(State(dispatcher): State<Dispatcher>, Json(message): Json<Message>) -> &'static str {
    tokio::spawn(async move {
        dispatcher.dispatch(&message).await;
    });
    ACK
}

/// Serve the webhook on an already bound listener.
pub async fn serve(listener: TcpListener, dispatcher: Dispatcher) -> Result<(), ServeError> {
    axum::serve(listener, router(dispatcher)).await?;
    Ok(())
}

/// Bind `addr` and serve the webhook.
pub async fn listen(addr: SocketAddr, dispatcher: Dispatcher) -> Result<(), ServeError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    tracing::info!(%addr, features = dispatcher.registry().len(), "listening for messages");
    serve(listener, dispatcher).await
}
