//! 配置管理模块
//! 只从环境变量加载（不读取配置文件）

use std::{collections::HashMap, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{domain::network::NetworkId, service::policy::InconclusiveVerificationPolicy};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub verifier: VerifierConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

/// 远程核验配置
///
/// 出站 HTTP 客户端由此显式构造并注入核验器
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    pub user_agent: String,
    /// 附加到每个请求的固定请求头
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
    pub inconclusive_policy: InconclusiveVerificationPolicy,
    pub etherscan_api_key: Option<String>,
    /// 地址查询端点覆盖（模板含 `{address}`）
    #[serde(default)]
    pub address_endpoints: HashMap<NetworkId, String>,
    /// 交易查询端点覆盖（模板含 `{hash}`）
    #[serde(default)]
    pub tx_endpoints: HashMap<NetworkId, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8090".into()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        let mut address_endpoints = HashMap::new();
        let mut tx_endpoints = HashMap::new();
        for network in NetworkId::ALL {
            let key = network.as_str().to_uppercase();
            if let Ok(url) = std::env::var(format!("VERIFIER_{}_ADDRESS_URL", key)) {
                address_endpoints.insert(network, url);
            }
            if let Ok(url) = std::env::var(format!("VERIFIER_{}_TX_URL", key)) {
                tx_endpoints.insert(network, url);
            }
        }

        Self {
            timeout_secs: std::env::var("VERIFIER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            user_agent: std::env::var("VERIFIER_USER_AGENT")
                .unwrap_or_else(|_| format!("ironverify/{}", env!("CARGO_PKG_VERSION"))),
            default_headers: HashMap::from([("Accept".to_string(), "application/json".to_string())]),
            inconclusive_policy: std::env::var("VERIFIER_INCONCLUSIVE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            etherscan_api_key: std::env::var("ETHERSCAN_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            address_endpoints,
            tx_endpoints,
        }
    }
}

impl VerifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 校验配置合法性
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("VERIFIER_TIMEOUT_SECS must be greater than 0");
        }
        for (network, url) in &self.address_endpoints {
            if !url.contains("{address}") {
                anyhow::bail!("Address endpoint for {} must contain {{address}}", network);
            }
        }
        for (network, url) in &self.tx_endpoints {
            if !url.contains("{hash}") {
                anyhow::bail!("Transaction endpoint for {} must contain {{hash}}", network);
            }
        }
        Ok(())
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 策略开关写错时直接报错，不回退到默认值
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("VERIFIER_INCONCLUSIVE_POLICY") {
            config.verifier.inconclusive_policy = parse_inconclusive_policy(&raw)?;
        }
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.bind_addr.trim().is_empty() {
            anyhow::bail!("BIND_ADDR cannot be empty");
        }
        if !matches!(self.logging.format.as_str(), "json" | "text") {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }
        self.verifier.validate()
    }
}

fn parse_inconclusive_policy(raw: &str) -> Result<InconclusiveVerificationPolicy> {
    raw.parse()
        .with_context(|| format!("Invalid VERIFIER_INCONCLUSIVE_POLICY: {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> VerifierConfig {
        VerifierConfig {
            timeout_secs: 10,
            user_agent: "test".into(),
            default_headers: HashMap::new(),
            inconclusive_policy: InconclusiveVerificationPolicy::AssumeValid,
            etherscan_api_key: None,
            address_endpoints: HashMap::new(),
            tx_endpoints: HashMap::new(),
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut cfg = verifier();
        assert!(cfg.validate().is_ok());
        cfg.timeout_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_endpoint_placeholders_required() {
        let mut cfg = verifier();
        cfg.address_endpoints
            .insert(NetworkId::Bitcoin, "http://localhost/addr".into());
        assert!(cfg.validate().is_err());

        let mut cfg = verifier();
        cfg.tx_endpoints
            .insert(NetworkId::Ethereum, "http://localhost/tx/{hash}".into());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        assert_eq!(verifier().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_policy_typo_is_rejected() {
        assert_eq!(
            parse_inconclusive_policy("reject").unwrap(),
            InconclusiveVerificationPolicy::Reject
        );
        assert_eq!(
            parse_inconclusive_policy(" assume-valid ").unwrap(),
            InconclusiveVerificationPolicy::AssumeValid
        );

        let err = parse_inconclusive_policy("rejct").unwrap_err();
        assert!(err.to_string().contains("VERIFIER_INCONCLUSIVE_POLICY"));
    }
}
