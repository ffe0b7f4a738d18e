//! HTTP surface for the receipt service.
//!
//! | Method | Path                    | Response                     |
//! |--------|-------------------------|------------------------------|
//! | POST   | `/receipts/process`     | `201 {"id": "<uuid>"}`       |
//! | GET    | `/receipts/{id}/points` | `200 {"points": <integer>}`  |
//! | GET    | `/health`               | `200 OK`                     |
//!
//! Bodies are written as 4-space indented JSON.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::core::service::ReceiptService;
use crate::core::{Receipt, ReceiptStore};
use crate::domain::model::{Points, ProcessedReceipt};
use crate::utils::error::{ReceiptError, Result};

const JSON_INDENT: &[u8] = b"    ";

/// JSON response body with a status code, pretty-printed.
pub struct IndentedJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let mut body = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(JSON_INDENT));

        match self.1.serialize(&mut serializer) {
            Ok(()) => (
                self.0,
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                error!(?e, "Failed to encode response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = match &self {
            ReceiptError::NotFound { .. } => StatusCode::NOT_FOUND,
            ReceiptError::InvalidReceipt { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        IndentedJson(
            status,
            ErrorBody {
                message: self.user_friendly_message(),
            },
        )
        .into_response()
    }
}

pub fn build_router<S: ReceiptStore + 'static>(service: Arc<ReceiptService<S>>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt::<S>))
        .route("/receipts/{id}/points", get(receipt_points::<S>))
        .route("/health", get(health_handler))
        .with_state(service)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, router: Router) -> Result<()> {
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await.map_err(|e| ReceiptError::ServerError {
        message: format!("Failed to bind to {}: {}", bind_addr, e),
    })?;

    info!(addr = %bind_addr, "Receipt server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ReceiptError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(?e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Receipt server shutting down");
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

async fn process_receipt<S: ReceiptStore + 'static>(
    State(service): State<Arc<ReceiptService<S>>>,
    payload: std::result::Result<Json<Receipt>, JsonRejection>,
) -> Result<IndentedJson<ProcessedReceipt>> {
    let Json(receipt) = payload.map_err(|rejection| ReceiptError::InvalidReceipt {
        message: rejection.body_text(),
    })?;

    let id = service.process(receipt).await?;
    Ok(IndentedJson(StatusCode::CREATED, ProcessedReceipt { id }))
}

async fn receipt_points<S: ReceiptStore + 'static>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Points>> {
    let points = service.points(&id).await?;
    Ok(IndentedJson(StatusCode::OK, Points { points }))
}
