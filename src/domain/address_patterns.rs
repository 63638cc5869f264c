//! 地址格式注册表与分类器
//!
//! 纯离线识别：根据字符串语法判断所属网络，不访问任何外部服务。
//!
//! 注册表是一个**有序**列表，自上而下逐条匹配，首个命中即为结果。
//! 部分规则（尤其是 Solana 的通用 Base58 规则）足以覆盖排在其后的网络，
//! 因此顺序本身就是分类语义的一部分，调整顺序等同于修改行为：
//!
//! - Bitcoin / Dogecoin / Ripple 排在 Solana 之前，因此不会被 Solana 吞掉；
//! - Tron（`T` + 33位 Base58，共34位）落在 Solana 的 32-44 位区间内，
//!   自动识别时会被判定为 Solana。需要 Tron 时请使用带网络提示的接口
//!   [`detect_blockchain_as`]。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::network::NetworkId;

/// Base58 字符集（去除 0 O I l）
const BASE58: &str = "[1-9A-HJ-NP-Za-km-z]";
/// Bech32 数据部分字符集
const BECH32: &str = "[qpzry9x8gf2tvdw0s3jn54khce6mua7l]";

/// 单条格式规则
#[derive(Debug)]
pub struct PatternRule {
    pub network: NetworkId,
    matcher: Regex,
}

impl PatternRule {
    pub(crate) fn new(network: NetworkId, pattern: &str) -> Self {
        Self {
            network,
            // 所有表达式均为常量拼接，无法编译属于编码错误
            matcher: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern for {}: {}", network, e)),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }
}

/// 地址格式表（优先级顺序）
static ADDRESS_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new(
            NetworkId::Bitcoin,
            &format!("^(?:[13]{BASE58}{{25,33}}|bc1{BECH32}{{39,59}})$"),
        ),
        PatternRule::new(NetworkId::Ethereum, "^0x[0-9a-fA-F]{40}$"),
        PatternRule::new(
            NetworkId::Litecoin,
            &format!("^(?:[LM]{BASE58}{{26,33}}|ltc1{BECH32}{{39,59}})$"),
        ),
        PatternRule::new(NetworkId::BitcoinCash, "^(?:bitcoincash:)?[qp][0-9a-z]{41}$"),
        PatternRule::new(NetworkId::Dogecoin, &format!("^D[5-9A-HJ-NP-U]{BASE58}{{32}}$")),
        PatternRule::new(NetworkId::Ripple, &format!("^r{BASE58}{{24,34}}$")),
        PatternRule::new(NetworkId::Solana, &format!("^{BASE58}{{32,44}}$")),
        PatternRule::new(
            NetworkId::Cardano,
            &format!("^(?:addr1[0-9a-z]{{53,}}|(?:Ae2|DdzFF){BASE58}{{50,}})$"),
        ),
        PatternRule::new(NetworkId::Polkadot, &format!("^1{BASE58}{{46,47}}$")),
        PatternRule::new(NetworkId::Tron, &format!("^T{BASE58}{{33}}$")),
        PatternRule::new(NetworkId::Cosmos, "^cosmos1[0-9a-z]{38}$"),
    ]
});

/// 返回有序规则表（只读）
pub fn address_rules() -> &'static [PatternRule] {
    ADDRESS_RULES.as_slice()
}

/// 识别地址所属网络
///
/// 对去除首尾空白后的字符串逐条匹配，返回第一个命中的网络
pub fn detect_blockchain(raw: &str) -> Option<NetworkId> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    address_rules()
        .iter()
        .find(|rule| rule.matches(input))
        .map(|rule| rule.network)
}

/// 只按指定网络的规则检查
pub fn detect_blockchain_as(raw: &str, network: NetworkId) -> Option<NetworkId> {
    let input = raw.trim();
    address_rules()
        .iter()
        .filter(|rule| rule.network == network)
        .any(|rule| rule.matches(input))
        .then_some(network)
}

/// 细分地址子格式
///
/// 只依据字面前缀，未命中任何规则时返回 "standard"
pub fn refine_sub_format(network: NetworkId, address: &str) -> &'static str {
    match network {
        NetworkId::Bitcoin => {
            if address.starts_with("bc1q") {
                "Bech32 (Native SegWit)"
            } else if address.starts_with("bc1p") {
                "Bech32m (Taproot)"
            } else if address.starts_with('1') {
                "P2PKH (Legacy)"
            } else if address.starts_with('3') {
                "P2SH (SegWit)"
            } else {
                "standard"
            }
        }
        NetworkId::Ethereum => "ERC-20 Compatible",
        _ => "standard",
    }
}
