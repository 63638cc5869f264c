//! 支持的链网络定义
//!
//! 封闭集合：进程启动时即确定，运行期间不可增删

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// 链网络标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    Bitcoin,
    Ethereum,
    Litecoin,
    BitcoinCash,
    Dogecoin,
    Ripple,
    Solana,
    Cardano,
    Polkadot,
    Tron,
    Cosmos,
}

impl NetworkId {
    /// 全部网络（与地址格式表的优先级顺序一致）
    pub const ALL: [NetworkId; 11] = [
        NetworkId::Bitcoin,
        NetworkId::Ethereum,
        NetworkId::Litecoin,
        NetworkId::BitcoinCash,
        NetworkId::Dogecoin,
        NetworkId::Ripple,
        NetworkId::Solana,
        NetworkId::Cardano,
        NetworkId::Polkadot,
        NetworkId::Tron,
        NetworkId::Cosmos,
    ];

    /// 规范ID（小写，对外序列化使用）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
            Self::Litecoin => "litecoin",
            Self::BitcoinCash => "bitcoincash",
            Self::Dogecoin => "dogecoin",
            Self::Ripple => "ripple",
            Self::Solana => "solana",
            Self::Cardano => "cardano",
            Self::Polkadot => "polkadot",
            Self::Tron => "tron",
            Self::Cosmos => "cosmos",
        }
    }

    /// 展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bitcoin => "Bitcoin",
            Self::Ethereum => "Ethereum",
            Self::Litecoin => "Litecoin",
            Self::BitcoinCash => "Bitcoin Cash",
            Self::Dogecoin => "Dogecoin",
            Self::Ripple => "Ripple (XRP)",
            Self::Solana => "Solana",
            Self::Cardano => "Cardano",
            Self::Polkadot => "Polkadot",
            Self::Tron => "Tron",
            Self::Cosmos => "Cosmos",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = anyhow::Error;

    /// 接受规范ID、符号或常见别名
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::chain_normalizer::normalize_network_identifier(s)
    }
}

/// 供前端下拉框使用的网络条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedBlockchain {
    pub id: &'static str,
    pub name: &'static str,
}

/// 列出所有支持的网络（按注册表顺序）
pub fn supported_blockchains() -> Vec<SupportedBlockchain> {
    NetworkId::ALL
        .iter()
        .map(|n| SupportedBlockchain {
            id: n.as_str(),
            name: n.display_name(),
        })
        .collect()
}

/// 获取网络展示名称
///
/// 只按规范ID查表（不走别名）；未知ID不会报错，而是首字母大写后原样返回
pub fn format_blockchain_name(id: &str) -> String {
    if let Some(network) = NetworkId::ALL.iter().find(|n| n.as_str() == id) {
        return network.display_name().to_string();
    }

    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
