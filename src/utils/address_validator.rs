//! 地址验证模块
//!
//! 统一的本地地址校验：去空白、判空、格式识别、子格式细分。
//! 纯函数，不做任何 I/O，所有失败都体现在返回结果中，不会返回 Err 或 panic。

use crate::domain::{
    address_patterns::{detect_blockchain, detect_blockchain_as, refine_sub_format},
    network::NetworkId,
    results::AddressValidationResult,
};

pub const ERR_EMPTY_ADDRESS: &str = "Address is empty";
pub const ERR_UNKNOWN_ADDRESS: &str = "Unknown or invalid address format";

/// 地址验证器
pub struct AddressValidator;

impl AddressValidator {
    /// 自动识别网络并校验
    pub fn validate(raw: &str) -> AddressValidationResult {
        let address = raw.trim();
        if address.is_empty() {
            return AddressValidationResult::invalid(String::new(), ERR_EMPTY_ADDRESS);
        }

        match detect_blockchain(address) {
            Some(network) => AddressValidationResult::valid(
                network,
                address.to_string(),
                refine_sub_format(network, address),
            ),
            None => {
                tracing::debug!(
                    address = %crate::infrastructure::log_redact::redact_address(address),
                    "address did not match any known format"
                );
                AddressValidationResult::invalid(address.to_string(), ERR_UNKNOWN_ADDRESS)
            }
        }
    }

    /// 按指定网络校验
    pub fn validate_as(raw: &str, network: NetworkId) -> AddressValidationResult {
        let address = raw.trim();
        if address.is_empty() {
            return AddressValidationResult::invalid(String::new(), ERR_EMPTY_ADDRESS);
        }

        match detect_blockchain_as(address, network) {
            Some(network) => AddressValidationResult::valid(
                network,
                address.to_string(),
                refine_sub_format(network, address),
            ),
            None => AddressValidationResult::invalid(
                address.to_string(),
                format!("Invalid {} address format", network),
            ),
        }
    }
}

/// 校验地址（自动识别网络）
pub fn validate_address(raw: &str) -> AddressValidationResult {
    AddressValidator::validate(raw)
}

/// 校验地址（指定网络）
pub fn validate_address_as(raw: &str, network: NetworkId) -> AddressValidationResult {
    AddressValidator::validate_as(raw, network)
}
