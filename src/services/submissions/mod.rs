//! 提交编排
//!
//! 创建时确定尝试序号与迟交标志；评分和内容修改只做字段合并。

pub mod create;
pub mod grade;
pub mod update;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::Result;
use crate::models::enrollments::entities::Enrollment;
use crate::models::evaluations::entities::Evaluation;
use crate::models::submissions::{
    entities::Submission,
    requests::{CreateSubmissionRequest, GradeSubmissionRequest, UpdateSubmissionRequest},
};
use crate::models::users::entities::User;
use crate::storage::{EntityStore, Field, SortDirection, SortKey, Storage};

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
    submissions: EntityStore<Submission>,
    evaluations: EntityStore<Evaluation>,
    users: EntityStore<User>,
    enrollments: EntityStore<Enrollment>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            submissions: EntityStore::new(storage.clone()),
            evaluations: EntityStore::new(storage.clone()),
            users: EntityStore::new(storage.clone()),
            enrollments: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建提交
    pub async fn create_submission(
        &self,
        request: CreateSubmissionRequest,
        cancel: &CancellationToken,
    ) -> Result<Submission> {
        create::create_submission(self, request, cancel).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        submission_id: Uuid,
        request: GradeSubmissionRequest,
        cancel: &CancellationToken,
    ) -> Result<Submission> {
        grade::grade_submission(self, submission_id, request, cancel).await
    }

    // 修改提交内容
    pub async fn update_submission(
        &self,
        submission_id: Uuid,
        request: UpdateSubmissionRequest,
        cancel: &CancellationToken,
    ) -> Result<Submission> {
        update::update_submission(self, submission_id, request, cancel).await
    }

    /// 学生在该测评下已有的最大尝试序号（包含已停用的提交）
    pub async fn latest_attempt_number(
        &self,
        evaluation_id: Uuid,
        student_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Option<i32>> {
        let latest = self
            .submissions
            .find_one(
                self.submissions
                    .query()
                    .filter(Field::EvaluationId, evaluation_id)
                    .filter(Field::StudentId, student_id)
                    .order_by(SortKey::AttemptNumber, SortDirection::Desc),
                cancel,
            )
            .await?;
        Ok(latest.map(|s| s.attempt_number))
    }

    pub async fn deactivate(&self, submission_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Submission>(
            self.storage(),
            submission_id,
            Transition::Deactivate,
            cancel,
        )
        .await
    }

    pub async fn reactivate(&self, submission_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Submission>(
            self.storage(),
            submission_id,
            Transition::Reactivate,
            cancel,
        )
        .await
    }
}
