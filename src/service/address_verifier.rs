//! 地址远程核验服务
//!
//! 流程：本地校验 → 选择网络适配器 → 单次查询公共账本索引接口 → 归一化响应。
//!
//! 结论分四类：
//! - 语法无效：`exists=false`，不发请求
//! - 远端明确不存在（404）：`exists=false`
//! - 远端不可用/超时/响应异常：按 [`InconclusiveVerificationPolicy`] 降级，默认 `exists=true` 并填充 `error`
//! - 无适配器：`exists=true`，不填 `error`

use std::collections::HashMap;

use futures::future::join_all;
use serde_json::Value;

use crate::{
    config::VerifierConfig,
    domain::{
        explorer::explorer_url,
        network::NetworkId,
        results::{AddressValidationResult, AddressVerificationResult},
    },
    error::UpstreamError,
    infrastructure::{
        log_redact::{redact_address, redact_url},
        upstream::{render_endpoint, LedgerClient, LedgerResponse},
    },
    metrics::{self, VerificationOutcome},
    service::policy::InconclusiveVerificationPolicy,
    utils::{
        address_validator::{validate_address, validate_address_as},
        amount_format::format_units,
    },
};

const ADDRESS_PLACEHOLDER: &str = "{address}";

/// 响应解析方式（各接口返回结构不同）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddressParser {
    /// blockchain.info rawaddr：`final_balance`（聪）+ `n_tx`
    BlockchainInfo,
    /// Etherscan balance：`status` + `result`（wei）
    Etherscan,
    /// BlockCypher balance：`final_balance` + `n_tx`
    BlockCypher { symbol: &'static str },
    /// Tronscan account：可选 `balance`（sun）
    Tronscan,
}

struct AddressAdapter {
    network: NetworkId,
    endpoint: &'static str,
    parser: AddressParser,
}

/// 适配器表；未列出的网络只做格式校验
const ADDRESS_ADAPTERS: &[AddressAdapter] = &[
    AddressAdapter {
        network: NetworkId::Bitcoin,
        endpoint: "https://blockchain.info/rawaddr/{address}?limit=0",
        parser: AddressParser::BlockchainInfo,
    },
    AddressAdapter {
        network: NetworkId::Ethereum,
        endpoint: "https://api.etherscan.io/api?module=account&action=balance&address={address}&tag=latest",
        parser: AddressParser::Etherscan,
    },
    AddressAdapter {
        network: NetworkId::Litecoin,
        endpoint: "https://api.blockcypher.com/v1/ltc/main/addrs/{address}/balance",
        parser: AddressParser::BlockCypher { symbol: "LTC" },
    },
    AddressAdapter {
        network: NetworkId::Dogecoin,
        endpoint: "https://api.blockcypher.com/v1/doge/main/addrs/{address}/balance",
        parser: AddressParser::BlockCypher { symbol: "DOGE" },
    },
    AddressAdapter {
        network: NetworkId::Tron,
        endpoint: "https://apilist.tronscanapi.com/api/account?address={address}",
        parser: AddressParser::Tronscan,
    },
];

fn find_adapter(network: NetworkId) -> Option<&'static AddressAdapter> {
    ADDRESS_ADAPTERS.iter().find(|a| a.network == network)
}

/// 归一化后的查询结论
#[derive(Debug, Clone, PartialEq, Eq)]
enum AddressLookup {
    NotFound,
    Found {
        balance: Option<String>,
        transaction_count: Option<u64>,
    },
}

/// 地址核验器
pub struct AddressVerifier {
    client: LedgerClient,
    policy: InconclusiveVerificationPolicy,
    endpoints: HashMap<NetworkId, String>,
    etherscan_api_key: Option<String>,
}

impl AddressVerifier {
    pub fn new(config: &VerifierConfig) -> anyhow::Result<Self> {
        let client = LedgerClient::new(config)?;
        Ok(Self::with_client(client, config))
    }

    /// 使用外部构造的客户端
    pub fn with_client(client: LedgerClient, config: &VerifierConfig) -> Self {
        Self {
            client,
            policy: config.inconclusive_policy,
            endpoints: config.address_endpoints.clone(),
            etherscan_api_key: config.etherscan_api_key.clone(),
        }
    }

    /// 自动识别网络并核验
    pub async fn verify(&self, raw: &str) -> AddressVerificationResult {
        self.verify_validated(validate_address(raw)).await
    }

    /// 按指定网络核验
    pub async fn verify_as(&self, raw: &str, network: NetworkId) -> AddressVerificationResult {
        self.verify_validated(validate_address_as(raw, network)).await
    }

    /// 并发核验多个地址，结果顺序与输入一致
    pub async fn verify_many<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<AddressVerificationResult> {
        join_all(inputs.iter().map(|raw| self.verify(raw.as_ref()))).await
    }

    async fn verify_validated(&self, validation: AddressValidationResult) -> AddressVerificationResult {
        metrics::count_validation(validation.is_valid);

        let network = match (validation.is_valid, validation.network) {
            (true, Some(network)) => network,
            _ => {
                metrics::count_verification("address", "unknown", VerificationOutcome::Rejected);
                return AddressVerificationResult::rejected(validation);
            }
        };

        let address = validation.address.clone();
        let explorer = explorer_url(network, &address);

        let Some(adapter) = find_adapter(network) else {
            metrics::count_verification("address", network.as_str(), VerificationOutcome::Unsupported);
            return AddressVerificationResult::from_validation(validation, true, explorer);
        };

        let mut result = AddressVerificationResult::from_validation(validation, true, explorer);

        match self.lookup(adapter, &address).await {
            Ok(AddressLookup::NotFound) => {
                tracing::info!(
                    network = %network,
                    address = %redact_address(&address),
                    "address not found on ledger"
                );
                metrics::count_verification("address", network.as_str(), VerificationOutcome::NotFound);
                result.exists = false;
            }
            Ok(AddressLookup::Found {
                balance,
                transaction_count,
            }) => {
                tracing::info!(
                    network = %network,
                    address = %redact_address(&address),
                    "address verified on ledger"
                );
                metrics::count_verification("address", network.as_str(), VerificationOutcome::Exists);
                result.balance = balance;
                result.transaction_count = transaction_count;
            }
            Err(e) => {
                tracing::warn!(
                    network = %network,
                    address = %redact_address(&address),
                    error = %e,
                    error_kind = e.kind(),
                    policy = self.policy.as_str(),
                    "address verification inconclusive"
                );
                metrics::count_verification(
                    "address",
                    network.as_str(),
                    VerificationOutcome::Inconclusive,
                );
                result.exists = self.policy.assumed_exists();
                result.error = Some(format!("Verification inconclusive: {}", e));
            }
        }

        result
    }

    async fn lookup(
        &self,
        adapter: &AddressAdapter,
        address: &str,
    ) -> Result<AddressLookup, UpstreamError> {
        let template = self
            .endpoints
            .get(&adapter.network)
            .map(String::as_str)
            .unwrap_or(adapter.endpoint);
        let url = render_endpoint(template, ADDRESS_PLACEHOLDER, address);
        tracing::debug!(network = %adapter.network, url = %redact_url(&url, address), "querying ledger");

        let url = match (&adapter.parser, &self.etherscan_api_key) {
            (AddressParser::Etherscan, Some(key)) => format!("{}&apikey={}", url, key),
            _ => url,
        };

        let resp = self.client.get(&url).await?;
        parse_address_response(adapter.parser, &resp)
    }
}

fn parse_address_response(
    parser: AddressParser,
    resp: &LedgerResponse,
) -> Result<AddressLookup, UpstreamError> {
    match parser {
        AddressParser::BlockchainInfo => {
            if resp.is_not_found() {
                return Ok(AddressLookup::NotFound);
            }
            let body = resp.json()?;
            let sats = base_units(body, "final_balance")?;
            Ok(AddressLookup::Found {
                balance: Some(format_amount(sats, 8, 8, "BTC")?),
                transaction_count: body.get("n_tx").and_then(Value::as_u64),
            })
        }
        AddressParser::Etherscan => {
            let body = resp.json()?;
            let status = body
                .get("status")
                .and_then(Value::as_str)
                .ok_or_else(|| UpstreamError::Decode("missing status field".into()))?;
            if status != "1" {
                // 无链上记录不代表地址无效
                return Ok(AddressLookup::Found {
                    balance: None,
                    transaction_count: None,
                });
            }
            let wei = base_units(body, "result")?;
            Ok(AddressLookup::Found {
                balance: Some(format_amount(wei, 18, 6, "ETH")?),
                transaction_count: None,
            })
        }
        AddressParser::BlockCypher { symbol } => {
            if resp.is_not_found() {
                return Ok(AddressLookup::NotFound);
            }
            let body = resp.json()?;
            let units = base_units(body, "final_balance")?;
            Ok(AddressLookup::Found {
                balance: Some(format_amount(units, 8, 8, symbol)?),
                transaction_count: body.get("n_tx").and_then(Value::as_u64),
            })
        }
        AddressParser::Tronscan => {
            let body = resp.json()?;
            let balance = match body.get("balance") {
                Some(Value::Null) | None => None,
                Some(_) => Some(format_amount(base_units(body, "balance")?, 6, 6, "TRX")?),
            };
            Ok(AddressLookup::Found {
                balance,
                transaction_count: None,
            })
        }
    }
}

/// 读取最小单位金额字段（数字或数字字符串）
pub(crate) fn base_units(body: &Value, field: &str) -> Result<u128, UpstreamError> {
    let value = body
        .get(field)
        .ok_or_else(|| UpstreamError::Decode(format!("missing {} field", field)))?;

    let parsed = match value {
        Value::Number(n) => n.as_u64().map(u128::from),
        Value::String(s) => s.trim().parse::<u128>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| UpstreamError::Decode(format!("invalid {} field: {}", field, value)))
}

fn format_amount(
    units: u128,
    decimals: u32,
    display_dp: u32,
    symbol: &str,
) -> Result<String, UpstreamError> {
    format_units(units, decimals, display_dp, symbol)
        .map_err(|e| UpstreamError::Decode(e.to_string()))
}
