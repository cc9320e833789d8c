pub mod create;
pub mod publish;
pub mod update;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::Result;
use crate::models::courses::entities::Course;
use crate::models::evaluations::{
    entities::Evaluation,
    requests::{CreateEvaluationRequest, PublishEvaluationRequest, UpdateEvaluationRequest},
};
use crate::storage::{EntityStore, Storage};

pub struct EvaluationService {
    storage: Arc<dyn Storage>,
    evaluations: EntityStore<Evaluation>,
    courses: EntityStore<Course>,
}

impl EvaluationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            evaluations: EntityStore::new(storage.clone()),
            courses: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建测评（初始未发布）
    pub async fn create_evaluation(
        &self,
        request: CreateEvaluationRequest,
        cancel: &CancellationToken,
    ) -> Result<Evaluation> {
        create::create_evaluation(self, request, cancel).await
    }

    pub async fn update_evaluation(
        &self,
        evaluation_id: Uuid,
        request: UpdateEvaluationRequest,
        cancel: &CancellationToken,
    ) -> Result<Evaluation> {
        update::update_evaluation(self, evaluation_id, request, cancel).await
    }

    // 发布测评，可同时设置开放窗口
    pub async fn publish(
        &self,
        evaluation_id: Uuid,
        request: PublishEvaluationRequest,
        cancel: &CancellationToken,
    ) -> Result<Evaluation> {
        publish::publish_evaluation(self, evaluation_id, request, cancel).await
    }

    // 撤回发布
    pub async fn unpublish(
        &self,
        evaluation_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Evaluation> {
        publish::unpublish_evaluation(self, evaluation_id, cancel).await
    }

    pub async fn deactivate(&self, evaluation_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Evaluation>(
            self.storage(),
            evaluation_id,
            Transition::Deactivate,
            cancel,
        )
        .await
    }

    pub async fn reactivate(&self, evaluation_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Evaluation>(
            self.storage(),
            evaluation_id,
            Transition::Reactivate,
            cancel,
        )
        .await
    }
}
