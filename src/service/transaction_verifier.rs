//! 交易远程核验服务
//!
//! 与地址核验对称。目前只有 Bitcoin 与 Ethereum 有适配器，
//! 其他网络格式合法即视为已存在且已确认。

use std::collections::HashMap;

use serde_json::Value;

use crate::{
    config::VerifierConfig,
    domain::{
        explorer::tx_explorer_url,
        network::NetworkId,
        results::{TransactionValidationResult, TransactionVerificationResult},
    },
    error::UpstreamError,
    infrastructure::{
        log_redact::redact_hex_string,
        upstream::{render_endpoint, LedgerClient, LedgerResponse},
    },
    metrics::{self, VerificationOutcome},
    service::policy::InconclusiveVerificationPolicy,
    utils::tx_hash_validator::validate_transaction_hash,
};

const HASH_PLACEHOLDER: &str = "{hash}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TxParser {
    /// blockchain.info rawtx：`block_height` 存在即已确认
    BlockchainInfo,
    /// Etherscan gettxreceiptstatus：`result.status`
    EtherscanReceipt,
}

struct TxAdapter {
    network: NetworkId,
    endpoint: &'static str,
    parser: TxParser,
}

const TX_ADAPTERS: &[TxAdapter] = &[
    TxAdapter {
        network: NetworkId::Bitcoin,
        endpoint: "https://blockchain.info/rawtx/{hash}",
        parser: TxParser::BlockchainInfo,
    },
    TxAdapter {
        network: NetworkId::Ethereum,
        endpoint: "https://api.etherscan.io/api?module=transaction&action=gettxreceiptstatus&txhash={hash}",
        parser: TxParser::EtherscanReceipt,
    },
];

fn find_adapter(network: NetworkId) -> Option<&'static TxAdapter> {
    TX_ADAPTERS.iter().find(|a| a.network == network)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TxLookup {
    NotFound,
    Found {
        confirmed: bool,
        block_height: Option<u64>,
    },
}

/// 交易核验器
pub struct TransactionVerifier {
    client: LedgerClient,
    policy: InconclusiveVerificationPolicy,
    endpoints: HashMap<NetworkId, String>,
    etherscan_api_key: Option<String>,
}

impl TransactionVerifier {
    pub fn new(config: &VerifierConfig) -> anyhow::Result<Self> {
        let client = LedgerClient::new(config)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: LedgerClient, config: &VerifierConfig) -> Self {
        Self {
            client,
            policy: config.inconclusive_policy,
            endpoints: config.tx_endpoints.clone(),
            etherscan_api_key: config.etherscan_api_key.clone(),
        }
    }

    /// 核验交易哈希；`hint` 指定时只按该网络格式校验
    pub async fn verify(
        &self,
        raw: &str,
        hint: Option<NetworkId>,
    ) -> TransactionVerificationResult {
        let validation = validate_transaction_hash(raw, hint);
        metrics::count_validation(validation.is_valid);
        self.verify_validated(validation).await
    }

    async fn verify_validated(
        &self,
        validation: TransactionValidationResult,
    ) -> TransactionVerificationResult {
        let network = match (validation.is_valid, validation.network) {
            (true, Some(network)) => network,
            _ => {
                metrics::count_verification("transaction", "unknown", VerificationOutcome::Rejected);
                return TransactionVerificationResult::rejected(validation);
            }
        };

        let hash = validation.hash.clone();
        let explorer = tx_explorer_url(network, &hash);

        let Some(adapter) = find_adapter(network) else {
            // 无适配器：乐观放行
            metrics::count_verification(
                "transaction",
                network.as_str(),
                VerificationOutcome::Unsupported,
            );
            return TransactionVerificationResult::from_validation(validation, true, true, explorer);
        };

        let mut result =
            TransactionVerificationResult::from_validation(validation, true, false, explorer);

        match self.lookup(adapter, &hash).await {
            Ok(TxLookup::NotFound) => {
                tracing::info!(network = %network, hash = %redact_hex_string(&hash, 8), "transaction not found");
                metrics::count_verification(
                    "transaction",
                    network.as_str(),
                    VerificationOutcome::NotFound,
                );
                result.exists = false;
            }
            Ok(TxLookup::Found {
                confirmed,
                block_height,
            }) => {
                tracing::info!(
                    network = %network,
                    hash = %redact_hex_string(&hash, 8),
                    confirmed,
                    "transaction verified"
                );
                metrics::count_verification(
                    "transaction",
                    network.as_str(),
                    VerificationOutcome::Exists,
                );
                result.confirmed = confirmed;
                result.block_height = block_height;
            }
            Err(e) => {
                tracing::warn!(
                    network = %network,
                    hash = %redact_hex_string(&hash, 8),
                    error = %e,
                    error_kind = e.kind(),
                    policy = self.policy.as_str(),
                    "transaction verification inconclusive"
                );
                metrics::count_verification(
                    "transaction",
                    network.as_str(),
                    VerificationOutcome::Inconclusive,
                );
                // 确认状态未知，不做乐观假设
                result.exists = self.policy.assumed_exists();
                result.confirmed = false;
                result.error = Some(format!("Verification inconclusive: {}", e));
            }
        }

        result
    }

    async fn lookup(&self, adapter: &TxAdapter, hash: &str) -> Result<TxLookup, UpstreamError> {
        let template = self
            .endpoints
            .get(&adapter.network)
            .map(String::as_str)
            .unwrap_or(adapter.endpoint);
        let url = render_endpoint(template, HASH_PLACEHOLDER, hash);
        let url = match (&adapter.parser, &self.etherscan_api_key) {
            (TxParser::EtherscanReceipt, Some(key)) => format!("{}&apikey={}", url, key),
            _ => url,
        };

        let resp = self.client.get(&url).await?;
        parse_tx_response(adapter.parser, &resp)
    }
}

fn parse_tx_response(parser: TxParser, resp: &LedgerResponse) -> Result<TxLookup, UpstreamError> {
    match parser {
        TxParser::BlockchainInfo => {
            if resp.is_not_found() {
                return Ok(TxLookup::NotFound);
            }
            let body = resp.json()?;
            if !body.is_object() {
                return Err(UpstreamError::Decode("expected a transaction object".into()));
            }
            let block_height = body.get("block_height").and_then(Value::as_u64);
            Ok(TxLookup::Found {
                confirmed: block_height.is_some(),
                block_height,
            })
        }
        TxParser::EtherscanReceipt => {
            let body = resp.json()?;
            let status = body.get("status").and_then(Value::as_str);
            if status != Some("1") {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("missing status field");
                return Err(UpstreamError::Decode(message.to_string()));
            }
            // "1" 成功，"0" 回滚，"" 待打包
            let receipt_status = body
                .get("result")
                .and_then(|r| r.get("status"))
                .and_then(Value::as_str)
                .ok_or_else(|| UpstreamError::Decode("missing result.status field".into()))?;
            Ok(TxLookup::Found {
                confirmed: receipt_status == "1",
                block_height: None,
            })
        }
    }
}
