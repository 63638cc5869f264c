//! 交易哈希 API

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::{
    api::{
        parse_network_hint,
        response::{success_response, ApiResponse},
    },
    app_state::AppState,
    domain::results::{TransactionValidationResult, TransactionVerificationResult},
    error::AppError,
    metrics,
    utils::tx_hash_validator::validate_transaction_hash,
};

#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub hash: String,
    pub network: Option<String>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transaction/validate", post(validate))
        .route("/transaction/verify", post(verify))
}

/// POST /api/v1/transaction/validate
pub async fn validate(
    Json(req): Json<TransactionRequest>,
) -> Result<Json<ApiResponse<TransactionValidationResult>>, AppError> {
    let hint = parse_network_hint(req.network.as_deref())?;
    let result = validate_transaction_hash(&req.hash, hint);
    metrics::count_validation(result.is_valid);
    success_response(result)
}

/// POST /api/v1/transaction/verify
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransactionRequest>,
) -> Result<Json<ApiResponse<TransactionVerificationResult>>, AppError> {
    let hint = parse_network_hint(req.network.as_deref())?;
    success_response(state.transaction_verifier.verify(&req.hash, hint).await)
}
