//! 日志脱敏
//!
//! 地址与交易哈希写入日志前只保留首尾片段

/// 脱敏十六进制字符串（显示前缀和后缀）
pub fn redact_hex_string(hex: &str, show_chars: usize) -> String {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() <= show_chars * 2 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..show_chars].iter().collect();
    let suffix: String = chars[chars.len() - show_chars..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// 脱敏地址（显示前6位和后4位）
pub fn redact_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 10 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// 脱敏URL：地址/哈希作为路径或查询参数出现时替换为脱敏形式
pub fn redact_url(url: &str, secret: &str) -> String {
    if secret.is_empty() {
        return url.to_string();
    }
    url.replace(secret, &redact_address(secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_address() {
        assert_eq!(
            redact_address("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"),
            "bc1qar...5mdq"
        );
        assert_eq!(redact_address("short"), "*****");
    }

    #[test]
    fn test_redact_hex_string() {
        let hash = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
        assert_eq!(redact_hex_string(hash, 8), "4a5e1e4b...fdeda33b");
        assert_eq!(redact_hex_string("abcd", 4), "****");
    }

    #[test]
    fn test_redact_url() {
        let addr = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb6";
        let url = format!("https://api.example.com/address/{}", addr);
        assert_eq!(
            redact_url(&url, addr),
            "https://api.example.com/address/0x742d...bEb6"
        );
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(redact_address("地址地址地址地址地址地址"), "地址地址地址...地址地址");
    }
}
