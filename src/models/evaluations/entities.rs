use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// 测评实体（作业、测验、考试）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct Evaluation {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub total_points: f64,
    pub open_at: Option<DateTime<Utc>>,
    pub close_at: Option<DateTime<Utc>>,
    pub time_limit_minutes: Option<i32>,
    pub is_published: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

crate::impl_lifecycle!(Evaluation, Evaluation);

impl Evaluation {
    /// 是否接受提交：激活且已发布
    pub fn accepts_submissions(&self) -> bool {
        self.is_active && self.is_published
    }

    /// 给定时刻是否处于开放窗口内（边界包含）
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        self.is_active
            && self.open_at.is_none_or(|open| open <= at)
            && self.close_at.is_none_or(|close| close >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn evaluation(open_at: Option<DateTime<Utc>>, close_at: Option<DateTime<Utc>>) -> Evaluation {
        Evaluation {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            title: "Quiz 1".into(),
            description: None,
            total_points: 10.0,
            open_at,
            close_at,
            time_limit_minutes: None,
            is_published: true,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_open_window_bounds() {
        let now = Utc::now();
        assert!(evaluation(None, None).is_open_at(now));
        assert!(evaluation(Some(now), Some(now)).is_open_at(now));
        assert!(!evaluation(Some(now + Duration::minutes(1)), None).is_open_at(now));
        assert!(!evaluation(None, Some(now - Duration::minutes(1))).is_open_at(now));
    }

    #[test]
    fn test_unpublished_evaluation_rejects_submissions() {
        let mut eval = evaluation(None, None);
        eval.is_published = false;
        assert!(!eval.accepts_submissions());
    }
}
