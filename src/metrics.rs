use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, OnceLock},
};

static METRICS: OnceLock<Mutex<MetricsState>> = OnceLock::new();

/// 核验结论分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerificationOutcome {
    /// 远端确认存在
    Exists,
    /// 远端明确返回不存在
    NotFound,
    /// 远端不可用或响应异常，按策略降级
    Inconclusive,
    /// 该网络没有核验适配器
    Unsupported,
    /// 本地校验未通过，未发出请求
    Rejected,
}

impl VerificationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::NotFound => "not_found",
            Self::Inconclusive => "inconclusive",
            Self::Unsupported => "unsupported",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Default)]
struct MetricsState {
    validations_ok: u64,
    validations_invalid: u64,
    // (kind, network, outcome) -> count，kind 为 address / transaction
    verifications: BTreeMap<(&'static str, &'static str, &'static str), u64>,
    // 上游成功/失败与时延统计（毫秒）
    upstream_ok: u64,
    upstream_err: u64,
    upstream_latency_sum_ms: u128,
    // 简易直方图分桶（毫秒）：<50, <100, <250, <500, <1000, >=1000
    upstream_hist_buckets: [u64; 6],
}

fn state() -> MutexGuard<'static, MetricsState> {
    let lock = METRICS.get_or_init(|| Mutex::new(MetricsState::default()));
    match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(), // 避免因锁污染导致 panic
    }
}

pub fn count_validation(valid: bool) {
    let mut s = state();
    if valid {
        s.validations_ok += 1;
    } else {
        s.validations_invalid += 1;
    }
}

pub fn count_verification(kind: &'static str, network: &'static str, outcome: VerificationOutcome) {
    let mut s = state();
    *s.verifications
        .entry((kind, network, outcome.as_str()))
        .or_insert(0) += 1;
}

pub fn observe_upstream_latency_ms(latency_ms: u128, ok: bool) {
    let mut s = state();
    if ok {
        s.upstream_ok += 1;
    } else {
        s.upstream_err += 1;
    }
    s.upstream_latency_sum_ms += latency_ms;
    let b = if latency_ms < 50 {
        0
    } else if latency_ms < 100 {
        1
    } else if latency_ms < 250 {
        2
    } else if latency_ms < 500 {
        3
    } else if latency_ms < 1000 {
        4
    } else {
        5
    };
    s.upstream_hist_buckets[b] += 1;
}

pub fn render_prometheus() -> String {
    let s = state();
    let mut out = String::new();

    out.push_str("# HELP ironverify_validations_total Local validations by result\n");
    out.push_str("# TYPE ironverify_validations_total counter\n");
    out.push_str(&format!(
        "ironverify_validations_total{{result=\"valid\"}} {}\n",
        s.validations_ok
    ));
    out.push_str(&format!(
        "ironverify_validations_total{{result=\"invalid\"}} {}\n",
        s.validations_invalid
    ));

    out.push_str("# HELP ironverify_verifications_total Remote verifications by outcome\n");
    out.push_str("# TYPE ironverify_verifications_total counter\n");
    for ((kind, network, outcome), v) in s.verifications.iter() {
        out.push_str(&format!(
            "ironverify_verifications_total{{kind=\"{}\",network=\"{}\",outcome=\"{}\"}} {}\n",
            kind, network, outcome, v
        ));
    }

    // 上游统计
    out.push_str("# HELP ironverify_upstream_requests_total Upstream requests\n");
    out.push_str("# TYPE ironverify_upstream_requests_total counter\n");
    out.push_str(&format!(
        "ironverify_upstream_requests_total{{result=\"ok\"}} {}\n",
        s.upstream_ok
    ));
    out.push_str(&format!(
        "ironverify_upstream_requests_total{{result=\"err\"}} {}\n",
        s.upstream_err
    ));

    out.push_str("# HELP ironverify_upstream_latency_ms_sum Sum of upstream latency in ms\n");
    out.push_str("# TYPE ironverify_upstream_latency_ms_sum counter\n");
    out.push_str(&format!(
        "ironverify_upstream_latency_ms_sum {}\n",
        s.upstream_latency_sum_ms
    ));

    out.push_str(
        "# HELP ironverify_upstream_latency_ms_bucket Upstream latency histogram buckets\n",
    );
    out.push_str("# TYPE ironverify_upstream_latency_ms_bucket histogram\n");
    let bounds = [50, 100, 250, 500, 1000];
    // Prometheus 桶为累计值
    let mut cumulative = 0u64;
    for (i, bound) in bounds.iter().enumerate() {
        cumulative += s.upstream_hist_buckets[i];
        out.push_str(&format!(
            "ironverify_upstream_latency_ms_bucket{{le=\"{}\"}} {}\n",
            bound, cumulative
        ));
    }
    out.push_str(&format!(
        "ironverify_upstream_latency_ms_bucket{{le=\"+Inf\"}} {}\n",
        s.upstream_hist_buckets.iter().sum::<u64>()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_counters() {
        count_validation(true);
        count_verification("address", "bitcoin", VerificationOutcome::Inconclusive);
        observe_upstream_latency_ms(30, false);

        let text = render_prometheus();
        assert!(text.contains("ironverify_validations_total{result=\"valid\"}"));
        assert!(text.contains(
            "ironverify_verifications_total{kind=\"address\",network=\"bitcoin\",outcome=\"inconclusive\"}"
        ));
        assert!(text.contains("ironverify_upstream_latency_ms_bucket{le=\"+Inf\"}"));
    }
}
