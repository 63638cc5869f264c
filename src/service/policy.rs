//! 核验不确定时的处理策略
//!
//! 远程核验失败（网络错误、超时、响应格式异常）属于“不确定”，不是“不存在”。
//! 默认 `AssumeValid`：视为存在，同时在 `error` 中说明原因。

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InconclusiveVerificationPolicy {
    /// 视为存在（默认）
    #[default]
    AssumeValid,
    /// 视为不存在；仅用于明确要求强校验的调用方
    Reject,
}

impl InconclusiveVerificationPolicy {
    /// 不确定时返回的 `exists` 值
    pub fn assumed_exists(&self) -> bool {
        matches!(self, Self::AssumeValid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssumeValid => "assume-valid",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for InconclusiveVerificationPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "assume-valid" | "assume_valid" => Ok(Self::AssumeValid),
            "reject" => Ok(Self::Reject),
            other => anyhow::bail!("Unknown inconclusive verification policy: {}", other),
        }
    }
}
