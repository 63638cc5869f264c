//! 地址 API
//! 供提现表单校验与地址格式徽标使用

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{
        parse_network_hint,
        response::{success_response, ApiResponse},
    },
    app_state::AppState,
    domain::{
        explorer::explorer_url_for_id,
        network::{supported_blockchains, SupportedBlockchain},
        results::{AddressValidationResult, AddressVerificationResult},
    },
    error::AppError,
    metrics,
    utils::address_validator::{validate_address, validate_address_as},
};

/// 单次批量核验上限
const MAX_BATCH_SIZE: usize = 50;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 请求/响应模型
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    pub address: String,
    /// 可选网络提示（ID或别名）
    pub network: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchAddressRequest {
    pub addresses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExplorerUrlResponse {
    pub network: String,
    pub address: String,
    pub explorer_url: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Routes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/blockchains", get(list_blockchains))
        .route("/address/validate", post(validate))
        .route("/address/verify", post(verify))
        .route("/address/verify-batch", post(verify_batch))
        .route("/explorer/:network/:address", get(explorer))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Handlers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// GET /api/v1/blockchains
pub async fn list_blockchains() -> Result<Json<ApiResponse<Vec<SupportedBlockchain>>>, AppError> {
    success_response(supported_blockchains())
}

/// POST /api/v1/address/validate
///
/// 格式错误以 `isValid=false` 返回，不作为 HTTP 错误
pub async fn validate(
    Json(req): Json<AddressRequest>,
) -> Result<Json<ApiResponse<AddressValidationResult>>, AppError> {
    let result = match parse_network_hint(req.network.as_deref())? {
        Some(network) => validate_address_as(&req.address, network),
        None => validate_address(&req.address),
    };
    metrics::count_validation(result.is_valid);
    success_response(result)
}

/// POST /api/v1/address/verify
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddressRequest>,
) -> Result<Json<ApiResponse<AddressVerificationResult>>, AppError> {
    let result = match parse_network_hint(req.network.as_deref())? {
        Some(network) => state.address_verifier.verify_as(&req.address, network).await,
        None => state.address_verifier.verify(&req.address).await,
    };
    success_response(result)
}

/// POST /api/v1/address/verify-batch
pub async fn verify_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchAddressRequest>,
) -> Result<Json<ApiResponse<Vec<AddressVerificationResult>>>, AppError> {
    if req.addresses.len() > MAX_BATCH_SIZE {
        return Err(AppError::bad_request(format!(
            "At most {} addresses per request",
            MAX_BATCH_SIZE
        )));
    }
    success_response(state.address_verifier.verify_many(&req.addresses).await)
}

/// GET /api/v1/explorer/:network/:address
pub async fn explorer(
    Path((network, address)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ExplorerUrlResponse>>, AppError> {
    let explorer_url = explorer_url_for_id(&network, &address);
    success_response(ExplorerUrlResponse {
        network,
        address,
        explorer_url,
    })
}
