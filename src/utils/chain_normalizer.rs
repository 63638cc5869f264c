//! 网络标识符标准化模块
//!
//! 统一处理调用方传入的网络提示（规范ID、符号、别名）

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::network::NetworkId;

/// 网络别名配置
#[derive(Debug, Clone)]
struct NetworkAliases {
    network: NetworkId,
    aliases: &'static [&'static str],
}

/// 别名注册表（静态初始化，键统一为小写）
static NETWORK_REGISTRY: Lazy<HashMap<String, NetworkId>> = Lazy::new(|| {
    let entries = vec![
        NetworkAliases {
            network: NetworkId::Bitcoin,
            aliases: &["btc", "xbt"],
        },
        NetworkAliases {
            network: NetworkId::Ethereum,
            aliases: &["eth", "erc20", "erc-20", "mainnet"],
        },
        NetworkAliases {
            network: NetworkId::Litecoin,
            aliases: &["ltc"],
        },
        NetworkAliases {
            network: NetworkId::BitcoinCash,
            aliases: &["bch", "bitcoin-cash", "bitcoin_cash", "bitcoin cash"],
        },
        NetworkAliases {
            network: NetworkId::Dogecoin,
            aliases: &["doge"],
        },
        NetworkAliases {
            network: NetworkId::Ripple,
            aliases: &["xrp"],
        },
        NetworkAliases {
            network: NetworkId::Solana,
            aliases: &["sol"],
        },
        NetworkAliases {
            network: NetworkId::Cardano,
            aliases: &["ada"],
        },
        NetworkAliases {
            network: NetworkId::Polkadot,
            aliases: &["dot"],
        },
        NetworkAliases {
            network: NetworkId::Tron,
            aliases: &["trx", "trc20", "trc-20"],
        },
        NetworkAliases {
            network: NetworkId::Cosmos,
            aliases: &["atom"],
        },
    ];

    let mut registry = HashMap::new();
    for entry in entries {
        registry.insert(entry.network.as_str().to_string(), entry.network);
        for alias in entry.aliases {
            registry.insert(alias.to_string(), entry.network);
        }
    }

    registry
});

/// 标准化网络标识符
///
/// # 示例
/// ```rust
/// # use ironverify::{domain::network::NetworkId, utils::chain_normalizer::normalize_network_identifier};
/// assert_eq!(normalize_network_identifier("BTC").unwrap(), NetworkId::Bitcoin);
/// assert_eq!(normalize_network_identifier(" Ethereum ").unwrap(), NetworkId::Ethereum);
/// ```
pub fn normalize_network_identifier(input: &str) -> anyhow::Result<NetworkId> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        anyhow::bail!("Network identifier cannot be empty");
    }

    NETWORK_REGISTRY
        .get(trimmed.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Unsupported network identifier: {}", trimmed))
}
