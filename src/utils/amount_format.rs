//! 链上最小单位金额换算为展示字符串
//!
//! 使用定点十进制，避免 f64 在 1e18 量级上的精度丢失

use rust_decimal::{Decimal, RoundingStrategy};

/// 将最小单位整数换算成带符号的展示金额
///
/// 例：`format_units(150000000, 8, 8, "BTC")` → `"1.50000000 BTC"`。
/// 超出 `Decimal` 表示范围时返回错误，不会 panic。
pub fn format_units(
    units: u128,
    decimals: u32,
    display_dp: u32,
    symbol: &str,
) -> anyhow::Result<String> {
    let divisor = 10u128
        .checked_pow(decimals)
        .ok_or_else(|| anyhow::anyhow!("Unsupported decimals: {}", decimals))?;

    let whole = units / divisor;
    let frac = units % divisor;

    // Decimal 最多 28 位有效数字，整数部分与小数部分分开换算
    let whole = Decimal::from_str_exact(&whole.to_string())
        .map_err(|e| anyhow::anyhow!("Amount out of range: {}", e))?;
    let frac = Decimal::try_from_i128_with_scale(frac as i128, decimals)
        .map_err(|e| anyhow::anyhow!("Amount out of range: {}", e))?;
    let value = whole
        .checked_add(frac)
        .ok_or_else(|| anyhow::anyhow!("Amount out of range: {} units", units))?
        .round_dp_with_strategy(display_dp, RoundingStrategy::MidpointAwayFromZero);

    Ok(format!(
        "{:.*} {}",
        display_dp as usize,
        value,
        symbol
    ))
}
