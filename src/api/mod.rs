//! HTTP API
//!
//! 只暴露校验/核验能力，不涉及持久化与认证

use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{app_state::AppState, domain::network::NetworkId, error::AppError};

pub mod address_api;
pub mod response;
pub mod transaction_api;

#[derive(Debug, Serialize)]
pub struct Healthz {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn healthz() -> Result<Json<response::ApiResponse<Healthz>>, AppError> {
    response::success_response(Healthz {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 构建完整路由
pub fn routes(state: Arc<AppState>) -> Router {
    let v1 = Router::new()
        .merge(address_api::routes())
        .merge(transaction_api::routes());

    Router::new()
        .nest("/api/v1", v1)
        .route("/healthz", get(healthz))
        .route(
            "/metrics",
            get(|| async { crate::metrics::render_prometheus().into_response() }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// 解析可选网络提示；提供了但无法识别时返回 400
pub(crate) fn parse_network_hint(hint: Option<&str>) -> Result<Option<NetworkId>, AppError> {
    match hint.map(str::trim).filter(|h| !h.is_empty()) {
        Some(h) => h
            .parse::<NetworkId>()
            .map(Some)
            .map_err(|e| AppError::chain_not_supported(e.to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_hint() {
        assert_eq!(parse_network_hint(None).unwrap(), None);
        assert_eq!(parse_network_hint(Some("  ")).unwrap(), None);
        assert_eq!(parse_network_hint(Some("ETH")).unwrap(), Some(NetworkId::Ethereum));
        assert!(parse_network_hint(Some("avalanche")).is_err());
    }
}
