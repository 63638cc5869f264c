//! 应用状态
//! 核验器在启动时显式构造，通过 `Arc<AppState>` 共享给各路由

use std::sync::Arc;

use anyhow::Result;

use crate::{
    config::Config,
    infrastructure::upstream::LedgerClient,
    service::{AddressVerifier, TransactionVerifier},
};

pub struct AppState {
    pub config: Arc<Config>,
    pub address_verifier: Arc<AddressVerifier>,
    pub transaction_verifier: Arc<TransactionVerifier>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        // 两个核验器共用同一个出站客户端（共享连接池，不共享任何核验状态）
        let client = LedgerClient::new(&config.verifier)?;
        let address_verifier = Arc::new(AddressVerifier::with_client(
            client.clone(),
            &config.verifier,
        ));
        let transaction_verifier = Arc::new(TransactionVerifier::with_client(
            client,
            &config.verifier,
        ));

        Ok(Self {
            config,
            address_verifier,
            transaction_verifier,
        })
    }
}
