use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// 选课状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "enrollment.ts")]
pub enum EnrollmentStatus {
    Pending,   // 待确认
    Active,    // 在读
    Completed, // 已结课
    Dropped,   // 已退课
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EnrollmentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的选课状态: '{s}'. 支持的状态: pending, active, completed, dropped"
            ))
        })
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Pending => write!(f, "pending"),
            EnrollmentStatus::Active => write!(f, "active"),
            EnrollmentStatus::Completed => write!(f, "completed"),
            EnrollmentStatus::Dropped => write!(f, "dropped"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EnrollmentStatus::Pending),
            "active" => Ok(EnrollmentStatus::Active),
            "completed" => Ok(EnrollmentStatus::Completed),
            "dropped" => Ok(EnrollmentStatus::Dropped),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

// 选课实体：同一 (course, user) 至多一条激活记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct Enrollment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
    pub unenrolled_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(Enrollment, Enrollment);
