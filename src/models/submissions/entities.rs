use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "submission.ts")]
pub enum SubmissionStatus {
    Submitted,   // 已提交
    Graded,      // 已评分
    NeedsReview, // 待复核
    Returned,    // 已退回
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<SubmissionStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: submitted, graded, needs_review, returned"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "submitted"),
            SubmissionStatus::Graded => write!(f, "graded"),
            SubmissionStatus::NeedsReview => write!(f, "needs_review"),
            SubmissionStatus::Returned => write!(f, "returned"),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(SubmissionStatus::Submitted),
            "graded" => Ok(SubmissionStatus::Graded),
            "needs_review" => Ok(SubmissionStatus::NeedsReview),
            "returned" => Ok(SubmissionStatus::Returned),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 提交实体
//
// attempt_number 与 is_late 在创建时确定，之后的评分与内容修改都不会改变它们。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct Submission {
    pub id: Uuid,
    pub evaluation_id: Uuid,
    pub student_id: Uuid,
    pub attempt_number: i32,
    pub content: String,
    pub file_url: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub is_late: bool,
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub status: SubmissionStatus,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(Submission, Submission);
