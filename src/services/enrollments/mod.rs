//! 选课编排

pub mod create;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::Result;
use crate::models::courses::entities::Course;
use crate::models::enrollments::{entities::Enrollment, requests::CreateEnrollmentRequest};
use crate::models::users::entities::User;
use crate::storage::{EntityStore, Field, Storage};

pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
    enrollments: EntityStore<Enrollment>,
    users: EntityStore<User>,
    courses: EntityStore<Course>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            enrollments: EntityStore::new(storage.clone()),
            users: EntityStore::new(storage.clone()),
            courses: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    /// 为用户选课
    ///
    /// 用户与课程都必须存在且处于激活状态，同一 (course, user) 不能已有激活选课。
    /// 去重检查与写入之间没有加锁，并发的两次调用可能同时成功。
    pub async fn create_enrollment(
        &self,
        request: CreateEnrollmentRequest,
        cancel: &CancellationToken,
    ) -> Result<Enrollment> {
        create::create_enrollment(self, request, cancel).await
    }

    /// 查找 (course, user) 的激活选课
    pub async fn find_active(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Option<Enrollment>> {
        self.enrollments
            .find_one(
                self.enrollments
                    .query()
                    .active()
                    .filter(Field::CourseId, course_id)
                    .filter(Field::UserId, user_id),
                cancel,
            )
            .await
    }

    pub async fn deactivate(&self, enrollment_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Enrollment>(
            self.storage(),
            enrollment_id,
            Transition::Deactivate,
            cancel,
        )
        .await
    }

    pub async fn reactivate(&self, enrollment_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Enrollment>(
            self.storage(),
            enrollment_id,
            Transition::Reactivate,
            cancel,
        )
        .await
    }
}
