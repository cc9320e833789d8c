use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{PlatformError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(PlatformError::invalid_argument("Email format is invalid"));
    }
    Ok(())
}

/// 必填文本字段校验（空白视为缺失）
pub fn require_text(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlatformError::invalid_argument(format!(
            "{field} is required"
        )));
    }
    Ok(())
}

/// 分数/总分校验：必须为有限数且大于 0
pub fn require_positive(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlatformError::invalid_argument(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

/// 时间窗口校验：同时给出时关闭时间必须晚于开放时间
pub fn validate_window(
    open_at: Option<chrono::DateTime<chrono::Utc>>,
    close_at: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<()> {
    match (open_at, close_at) {
        (Some(open), Some(close)) if close <= open => Err(PlatformError::invalid_argument(
            "CloseAt must be later than OpenAt",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_valid_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("first.last+tag@uni.edu.co").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let err = require_text("   ", "Title").unwrap_err();
        assert_eq!(err.message(), "Title is required");
        assert!(require_text("Algebra", "Title").is_ok());
    }

    #[test]
    fn test_positive_points() {
        assert!(require_positive(10.0, "TotalPoints").is_ok());
        assert!(require_positive(0.0, "TotalPoints").is_err());
        assert!(require_positive(f64::NAN, "TotalPoints").is_err());
    }

    #[test]
    fn test_window_order() {
        let open = Utc::now();
        assert!(validate_window(Some(open), Some(open + Duration::hours(1))).is_ok());
        assert!(validate_window(Some(open), Some(open)).is_err());
        assert!(validate_window(None, Some(open)).is_ok());
    }
}
