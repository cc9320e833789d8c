//! 提交实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::utils::time::{from_millis, to_millis};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub evaluation_id: Uuid,
    pub student_id: Uuid,
    pub attempt_number: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub file_url: Option<String>,
    pub submitted_at: i64,
    pub is_late: bool,
    pub score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub status: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluations::Column::Id"
    )]
    Evaluation,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> Submission {
        Submission {
            id: self.id,
            evaluation_id: self.evaluation_id,
            student_id: self.student_id,
            attempt_number: self.attempt_number,
            content: self.content,
            file_url: self.file_url,
            submitted_at: from_millis(self.submitted_at),
            is_late: self.is_late,
            score: self.score,
            feedback: self.feedback,
            status: self
                .status
                .parse::<SubmissionStatus>()
                .unwrap_or(SubmissionStatus::Submitted),
            is_active: self.is_active,
            created_at: from_millis(self.created_at),
            updated_at: self.updated_at.map(from_millis),
        }
    }
}

// 业务模型转换为完整赋值的 ActiveModel（插入与整行更新共用）
impl From<Submission> for ActiveModel {
    fn from(value: Submission) -> Self {
        Self {
            id: Set(value.id),
            evaluation_id: Set(value.evaluation_id),
            student_id: Set(value.student_id),
            attempt_number: Set(value.attempt_number),
            content: Set(value.content),
            file_url: Set(value.file_url),
            submitted_at: Set(to_millis(value.submitted_at)),
            is_late: Set(value.is_late),
            score: Set(value.score),
            feedback: Set(value.feedback),
            status: Set(value.status.to_string()),
            is_active: Set(value.is_active),
            created_at: Set(to_millis(value.created_at)),
            updated_at: Set(value.updated_at.map(to_millis)),
        }
    }
}
