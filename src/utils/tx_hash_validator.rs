//! 交易哈希验证模块
//!
//! 与地址校验对称；额外支持网络提示：指定网络时只检查该网络的格式，
//! 不匹配即报错，不再回退到全表识别。

use crate::domain::{
    network::NetworkId,
    results::TransactionValidationResult,
    tx_patterns::{detect_transaction_network, matches_transaction_network},
};

pub const ERR_EMPTY_HASH: &str = "Transaction hash is empty";
pub const ERR_UNKNOWN_HASH: &str = "Unknown or invalid transaction hash format";

/// 校验交易哈希
pub fn validate_transaction_hash(
    raw: &str,
    hint: Option<NetworkId>,
) -> TransactionValidationResult {
    let hash = raw.trim();
    if hash.is_empty() {
        return TransactionValidationResult::invalid(String::new(), ERR_EMPTY_HASH);
    }

    match hint {
        Some(network) => {
            if matches_transaction_network(hash, network) {
                TransactionValidationResult::valid(network, hash.to_string())
            } else {
                TransactionValidationResult::invalid(
                    hash.to_string(),
                    format!("Invalid {} transaction hash format", network),
                )
            }
        }
        None => match detect_transaction_network(hash) {
            Some(network) => TransactionValidationResult::valid(network, hash.to_string()),
            None => TransactionValidationResult::invalid(hash.to_string(), ERR_UNKNOWN_HASH),
        },
    }
}
