pub mod create;
pub mod update;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::Result;
use crate::models::courses::{
    entities::Course,
    requests::{CreateCourseRequest, UpdateCourseRequest},
};
use crate::models::users::entities::User;
use crate::storage::{EntityStore, Storage};

pub struct CourseService {
    storage: Arc<dyn Storage>,
    courses: EntityStore<Course>,
    users: EntityStore<User>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            courses: EntityStore::new(storage.clone()),
            users: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建课程
    pub async fn create_course(
        &self,
        request: CreateCourseRequest,
        cancel: &CancellationToken,
    ) -> Result<Course> {
        create::create_course(self, request, cancel).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        course_id: Uuid,
        request: UpdateCourseRequest,
        cancel: &CancellationToken,
    ) -> Result<Course> {
        update::update_course(self, course_id, request, cancel).await
    }

    pub async fn deactivate(&self, course_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Course>(self.storage(), course_id, Transition::Deactivate, cancel)
            .await
    }

    pub async fn reactivate(&self, course_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Course>(self.storage(), course_id, Transition::Reactivate, cancel)
            .await
    }
}
