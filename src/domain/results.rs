//! 校验/核验结果类型
//!
//! 每次调用新建、不可变、不持久化

use serde::Serialize;

use crate::domain::network::NetworkId;

/// 地址本地校验结果
///
/// 不变式：`is_valid == true` 时 `network` 必有值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidationResult {
    pub is_valid: bool,
    pub network: Option<NetworkId>,
    /// 去除首尾空白后的地址
    pub address: String,
    pub sub_format: Option<String>,
    /// 语法错误（硬失败）
    pub error: Option<String>,
}

impl AddressValidationResult {
    pub fn valid(network: NetworkId, address: String, sub_format: &str) -> Self {
        Self {
            is_valid: true,
            network: Some(network),
            address,
            sub_format: Some(sub_format.to_string()),
            error: None,
        }
    }

    pub fn invalid(address: String, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            network: None,
            address,
            sub_format: None,
            error: Some(error.into()),
        }
    }
}

/// 地址远程核验结果
///
/// 不变式：`is_valid == false` 时 `exists == false`，且未发出任何请求。
/// 这里的 `error` 表示核验不确定（软失败），与语法错误区分。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressVerificationResult {
    pub is_valid: bool,
    pub network: Option<NetworkId>,
    pub address: String,
    pub sub_format: Option<String>,
    pub exists: bool,
    pub balance: Option<String>,
    pub transaction_count: Option<u64>,
    pub explorer_url: Option<String>,
    pub error: Option<String>,
}

impl AddressVerificationResult {
    /// 语法无效：直接短路
    pub fn rejected(validation: AddressValidationResult) -> Self {
        Self {
            is_valid: false,
            network: validation.network,
            address: validation.address,
            sub_format: validation.sub_format,
            exists: false,
            balance: None,
            transaction_count: None,
            explorer_url: None,
            error: validation.error,
        }
    }

    /// 以本地校验结果为基础，填充存在性
    pub fn from_validation(
        validation: AddressValidationResult,
        exists: bool,
        explorer_url: String,
    ) -> Self {
        Self {
            is_valid: validation.is_valid,
            network: validation.network,
            address: validation.address,
            sub_format: validation.sub_format,
            exists,
            balance: None,
            transaction_count: None,
            explorer_url: Some(explorer_url),
            error: None,
        }
    }
}

/// 交易哈希本地校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionValidationResult {
    pub is_valid: bool,
    pub network: Option<NetworkId>,
    pub hash: String,
    pub error: Option<String>,
}

impl TransactionValidationResult {
    pub fn valid(network: NetworkId, hash: String) -> Self {
        Self {
            is_valid: true,
            network: Some(network),
            hash,
            error: None,
        }
    }

    pub fn invalid(hash: String, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            network: None,
            hash,
            error: Some(error.into()),
        }
    }
}

/// 交易远程核验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionVerificationResult {
    pub is_valid: bool,
    pub network: Option<NetworkId>,
    pub hash: String,
    pub exists: bool,
    pub confirmed: bool,
    pub block_height: Option<u64>,
    pub explorer_url: Option<String>,
    pub error: Option<String>,
}

impl TransactionVerificationResult {
    pub fn rejected(validation: TransactionValidationResult) -> Self {
        Self {
            is_valid: false,
            network: validation.network,
            hash: validation.hash,
            exists: false,
            confirmed: false,
            block_height: None,
            explorer_url: None,
            error: validation.error,
        }
    }

    pub fn from_validation(
        validation: TransactionValidationResult,
        exists: bool,
        confirmed: bool,
        explorer_url: String,
    ) -> Self {
        Self {
            is_valid: validation.is_valid,
            network: validation.network,
            hash: validation.hash,
            exists,
            confirmed,
            block_height: None,
            explorer_url: Some(explorer_url),
            error: None,
        }
    }
}
