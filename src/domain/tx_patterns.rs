//! 交易哈希格式表
//!
//! 与地址格式表同样按顺序匹配。多数网络的交易哈希都是64位十六进制，
//! 自动识别时统一落到 Bitcoin 规则上；其余网络只能通过网络提示命中。

use once_cell::sync::Lazy;

use crate::domain::{address_patterns::PatternRule, network::NetworkId};

static TX_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    const HEX64: &str = "^[0-9a-fA-F]{64}$";
    const PREFIXED_HEX64: &str = "^0x[0-9a-fA-F]{64}$";

    let table: [(NetworkId, &str); 11] = [
        (NetworkId::Ethereum, PREFIXED_HEX64),
        (NetworkId::Bitcoin, HEX64),
        (NetworkId::Solana, "^[1-9A-HJ-NP-Za-km-z]{88}$"),
        (NetworkId::Litecoin, HEX64),
        (NetworkId::Dogecoin, HEX64),
        (NetworkId::BitcoinCash, HEX64),
        (NetworkId::Cardano, HEX64),
        (NetworkId::Tron, HEX64),
        (NetworkId::Cosmos, HEX64),
        (NetworkId::Ripple, HEX64),
        (NetworkId::Polkadot, PREFIXED_HEX64),
    ];

    table
        .iter()
        .map(|(network, pattern)| PatternRule::new(*network, pattern))
        .collect()
});

/// 识别交易哈希所属网络（首个命中）
pub fn detect_transaction_network(raw: &str) -> Option<NetworkId> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    TX_RULES
        .iter()
        .find(|rule| rule.matches(input))
        .map(|rule| rule.network)
}

/// 只按指定网络的规则检查
pub fn matches_transaction_network(raw: &str, network: NetworkId) -> bool {
    let input = raw.trim();
    TX_RULES
        .iter()
        .any(|rule| rule.network == network && rule.matches(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BTC_TX: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
    const ETH_TX: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

    #[test]
    fn test_order() {
        let order: Vec<NetworkId> = TX_RULES.iter().map(|rule| rule.network).collect();
        assert_eq!(order[0], NetworkId::Ethereum);
        assert_eq!(order[1], NetworkId::Bitcoin);
        assert_eq!(order[2], NetworkId::Solana);
        assert_eq!(order.len(), NetworkId::ALL.len());
    }

    #[test]
    fn test_detect() {
        assert_eq!(detect_transaction_network(ETH_TX), Some(NetworkId::Ethereum));
        assert_eq!(detect_transaction_network(BTC_TX), Some(NetworkId::Bitcoin));
        let sol = "5".repeat(88);
        assert_eq!(detect_transaction_network(&sol), Some(NetworkId::Solana));
        assert_eq!(detect_transaction_network("deadbeef"), None);
        assert_eq!(detect_transaction_network(""), None);
    }

    #[test]
    fn test_hint_only_checks_hinted_rule() {
        assert!(matches_transaction_network(BTC_TX, NetworkId::Tron));
        assert!(!matches_transaction_network(BTC_TX, NetworkId::Ethereum));
        assert!(matches_transaction_network(ETH_TX, NetworkId::Polkadot));
        assert!(!matches_transaction_network(ETH_TX, NetworkId::Bitcoin));
    }
}
