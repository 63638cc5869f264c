//! 测试辅助模块
//! 本地模拟账本索引服务，供核验器在无外网环境下走真实 HTTP

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use ironverify::{
    config::{Config, LoggingConfig, ServerConfig, VerifierConfig},
    InconclusiveVerificationPolicy, NetworkId,
};
use serde_json::json;

/// `/keyed/eth` 要求的 API Key
pub const ETHERSCAN_TEST_KEY: &str = "SECRETKEY";

/// 模拟服务句柄
pub struct MockLedger {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockLedger {
    /// 已收到的请求数
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// 拼接端点模板
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn counted(State(hits): State<Arc<AtomicUsize>>) -> Arc<AtomicUsize> {
    hits.fetch_add(1, Ordering::SeqCst);
    hits
}

fn ok_json(body: serde_json::Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// 启动模拟服务（绑定随机端口）
pub async fn start_mock_ledger() -> MockLedger {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        // 地址接口
        .route(
            "/ok/btc/:address",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"final_balance": 150000000u64, "n_tx": 7}))
            }),
        )
        .route(
            "/ok/eth",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"status": "1", "message": "OK", "result": "2500000000000000000"}))
            }),
        )
        .route(
            "/ok/eth-unused",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"status": "0", "message": "NOTOK", "result": "0"}))
            }),
        )
        .route(
            "/ok/blockcypher/:address",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"final_balance": 250000000u64, "n_tx": 3}))
            }),
        )
        .route(
            "/ok/tron",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"balance": 12500000u64}))
            }),
        )
        .route(
            "/ok/tron-empty",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({}))
            }),
        )
        // 交易接口
        .route(
            "/ok/rawtx/:hash",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"block_height": 800000u64}))
            }),
        )
        .route(
            "/ok/rawtx-pending/:hash",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"hash": "pending"}))
            }),
        )
        .route(
            "/ok/receipt",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"status": "1", "message": "OK", "result": {"status": "1"}}))
            }),
        )
        .route(
            "/ok/receipt-reverted",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"status": "1", "message": "OK", "result": {"status": "0"}}))
            }),
        )
        // 异常场景
        .route(
            "/missing/:id",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                (StatusCode::NOT_FOUND, "not found").into_response()
            }),
        )
        .route(
            "/unavailable/:id",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response()
            }),
        )
        .route(
            "/garbage/:id",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                (StatusCode::OK, "<html>oops</html>").into_response()
            }),
        )
        .route(
            "/oversized/:id",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                ok_json(json!({"final_balance": "7922816251426433759354395033599999999", "n_tx": 1}))
            }),
        )
        .route(
            "/keyed/eth",
            get(
                |s: State<Arc<AtomicUsize>>, Query(params): Query<HashMap<String, String>>| async move {
                    counted(s).await;
                    if params.get("apikey").map(String::as_str) == Some(ETHERSCAN_TEST_KEY) {
                        ok_json(json!({"status": "1", "message": "OK", "result": "1000000000000000000"}))
                    } else {
                        (StatusCode::UNAUTHORIZED, "missing api key").into_response()
                    }
                },
            ),
        )
        .route(
            "/slow/:id",
            get(|s: State<Arc<AtomicUsize>>| async move {
                counted(s).await;
                tokio::time::sleep(Duration::from_secs(3)).await;
                ok_json(json!({"final_balance": 1u64, "n_tx": 1}))
            }),
        )
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock ledger");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    MockLedger {
        base_url: format!("http://{}", addr),
        hits,
    }
}

/// 返回一个当前没有监听者的本地地址（连接会被拒绝）
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// 测试用核验配置（1秒超时）
pub fn verifier_config(
    address_endpoints: Vec<(NetworkId, String)>,
    tx_endpoints: Vec<(NetworkId, String)>,
) -> VerifierConfig {
    VerifierConfig {
        timeout_secs: 1,
        user_agent: "ironverify-tests".into(),
        default_headers: HashMap::from([("Accept".to_string(), "application/json".to_string())]),
        inconclusive_policy: InconclusiveVerificationPolicy::AssumeValid,
        etherscan_api_key: None,
        address_endpoints: address_endpoints.into_iter().collect(),
        tx_endpoints: tx_endpoints.into_iter().collect(),
    }
}

/// 测试用完整配置
pub fn test_config(verifier: VerifierConfig) -> Config {
    Config {
        server: ServerConfig {
            bind_addr: "127.0.0.1:0".into(),
        },
        logging: LoggingConfig {
            level: "debug".into(),
            format: "text".into(),
        },
        verifier,
    }
}
