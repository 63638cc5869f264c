//! 区块浏览器链接
//!
//! 固定模板替换，不做任何校验；未知网络返回空字符串

use crate::domain::network::NetworkId;

/// (网络, 地址页模板, 交易页模板)
const EXPLORERS: &[(NetworkId, &str, &str)] = &[
    (
        NetworkId::Bitcoin,
        "https://www.blockchain.com/explorer/addresses/btc/{}",
        "https://www.blockchain.com/explorer/transactions/btc/{}",
    ),
    (
        NetworkId::Ethereum,
        "https://etherscan.io/address/{}",
        "https://etherscan.io/tx/{}",
    ),
    (
        NetworkId::Litecoin,
        "https://blockchair.com/litecoin/address/{}",
        "https://blockchair.com/litecoin/transaction/{}",
    ),
    (
        NetworkId::BitcoinCash,
        "https://blockchair.com/bitcoin-cash/address/{}",
        "https://blockchair.com/bitcoin-cash/transaction/{}",
    ),
    (
        NetworkId::Dogecoin,
        "https://blockchair.com/dogecoin/address/{}",
        "https://blockchair.com/dogecoin/transaction/{}",
    ),
    (
        NetworkId::Ripple,
        "https://xrpscan.com/account/{}",
        "https://xrpscan.com/tx/{}",
    ),
    (
        NetworkId::Solana,
        "https://solscan.io/account/{}",
        "https://solscan.io/tx/{}",
    ),
    (
        NetworkId::Cardano,
        "https://cardanoscan.io/address/{}",
        "https://cardanoscan.io/transaction/{}",
    ),
    (
        NetworkId::Polkadot,
        "https://polkadot.subscan.io/account/{}",
        "https://polkadot.subscan.io/extrinsic/{}",
    ),
    (
        NetworkId::Tron,
        "https://tronscan.org/#/address/{}",
        "https://tronscan.org/#/transaction/{}",
    ),
    (
        NetworkId::Cosmos,
        "https://www.mintscan.io/cosmos/address/{}",
        "https://www.mintscan.io/cosmos/tx/{}",
    ),
];

fn lookup(network: NetworkId) -> Option<&'static (NetworkId, &'static str, &'static str)> {
    EXPLORERS.iter().find(|(n, _, _)| *n == network)
}

/// 地址详情页
pub fn explorer_url(network: NetworkId, address: &str) -> String {
    lookup(network)
        .map(|(_, template, _)| template.replace("{}", address))
        .unwrap_or_default()
}

/// 交易详情页
pub fn tx_explorer_url(network: NetworkId, hash: &str) -> String {
    lookup(network)
        .map(|(_, _, template)| template.replace("{}", hash))
        .unwrap_or_default()
}

/// 按字符串ID解析网络后生成地址页链接（供 HTTP 层使用）
pub fn explorer_url_for_id(network_id: &str, address: &str) -> String {
    match network_id.parse::<NetworkId>() {
        Ok(network) => explorer_url(network, address),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_network_has_explorer() {
        for network in NetworkId::ALL {
            assert!(!explorer_url(network, "x").is_empty(), "{}", network);
            assert!(!tx_explorer_url(network, "x").is_empty(), "{}", network);
        }
    }

    #[test]
    fn test_ethereum_url_contains_address() {
        let addr = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb6";
        let url = explorer_url(NetworkId::Ethereum, addr);
        assert!(url.contains(addr));
        assert_eq!(url, format!("https://etherscan.io/address/{}", addr));
    }

    #[test]
    fn test_bitcoin_url_ends_with_address() {
        let addr = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";
        assert!(explorer_url(NetworkId::Bitcoin, addr).ends_with(addr));
    }

    #[test]
    fn test_unknown_id_is_empty() {
        assert_eq!(explorer_url_for_id("avalanche", "abc"), "");
        assert_eq!(
            explorer_url_for_id("SOL", "abc"),
            "https://solscan.io/account/abc"
        );
    }
}
