//! IronVerify - 多链地址/交易识别与核验引擎
//!
//! 本地识别完全离线；远程核验失败时按策略降级，不阻塞提现等用户操作

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use app_state::AppState;
pub use domain::{
    detect_blockchain, detect_blockchain_as, explorer_url, format_blockchain_name,
    supported_blockchains, tx_explorer_url, NetworkId,
};
pub use error::{AppError, AppErrorCode, UpstreamError};
pub use service::{AddressVerifier, InconclusiveVerificationPolicy, TransactionVerifier};
pub use utils::{validate_address, validate_address_as, validate_transaction_hash};

pub mod prelude {
    pub use crate::{
        domain::{
            AddressValidationResult, AddressVerificationResult, NetworkId,
            TransactionValidationResult, TransactionVerificationResult,
        },
        service::{AddressVerifier, InconclusiveVerificationPolicy, TransactionVerifier},
        utils::{validate_address, validate_transaction_hash},
    };
}
