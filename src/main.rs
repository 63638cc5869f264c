//! IronVerify 主入口
//! 地址/交易核验 HTTP 服务

use std::sync::Arc;

use anyhow::Result;
use ironverify::{api, app_state::AppState, config::Config, infrastructure::logging};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载环境变量
    dotenvy::dotenv().ok();

    // 2. 加载配置
    let config = Arc::new(Config::from_env()?);

    // 3. 初始化日志
    logging::init_logging(&config.logging)?;

    tracing::info!(
        timeout_secs = config.verifier.timeout_secs,
        policy = config.verifier.inconclusive_policy.as_str(),
        "Starting IronVerify"
    );

    // 4. 初始化应用状态（显式构造出站客户端）
    let state = Arc::new(AppState::new(config.clone())?);

    // 5. 启动服务器
    let app = api::routes(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;

    tracing::info!("Server listening on http://{}", config.server.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
