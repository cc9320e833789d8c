//! 时间工具
//!
//! 所有时间戳以毫秒精度存储，生成时即截断，保证内存值与持久化值一致。

use chrono::{DateTime, SubsecRound, Utc};

/// 当前 UTC 时间（毫秒精度）
pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// 截断调用方给出的时间到毫秒，使返回值与持久化值一致
pub fn truncate(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(3)
}

pub fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

pub fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}

/// 迟交判定：设置了截止时间且提交时间严格晚于截止时间
pub fn is_late(close_at: Option<DateTime<Utc>>, submitted_at: DateTime<Utc>) -> bool {
    close_at.is_some_and(|close| submitted_at > close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_now_is_millisecond_precision() {
        let at = now();
        assert_eq!(from_millis(to_millis(at)), at);
    }

    #[test]
    fn test_is_late_around_close_time() {
        let close = now();
        assert!(!is_late(Some(close), close - Duration::seconds(1)));
        assert!(is_late(Some(close), close + Duration::seconds(1)));
    }

    #[test]
    fn test_is_late_exactly_at_close_time() {
        let close = now();
        assert!(!is_late(Some(close), close));
    }

    #[test]
    fn test_truncate_survives_millis_round_trip() {
        let at = Utc::now() + Duration::nanoseconds(123_456);
        let truncated = truncate(at);
        assert_eq!(from_millis(to_millis(truncated)), truncated);
        assert!(truncated <= at);
    }

    #[test]
    fn test_never_late_without_close_time() {
        assert!(!is_late(None, now() + Duration::days(365)));
    }
}
