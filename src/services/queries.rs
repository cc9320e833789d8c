//! 只读查询门面
//!
//! 所有方法均无副作用；关系查询只返回激活记录。

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{PlatformError, Result};
use crate::models::Lifecycle;
use crate::models::course_modules::entities::CourseModule;
use crate::models::courses::entities::{Course, CourseWithContent};
use crate::models::enrollments::entities::Enrollment;
use crate::models::evaluations::entities::Evaluation;
use crate::models::notifications::entities::NotificationRecipient;
use crate::models::resources::entities::Resource;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::User;
use crate::storage::{EntityStore, Field, FieldValue, SortDirection, SortKey, Storage};
use crate::utils::time;

#[derive(Clone)]
pub struct QueryFacade {
    storage: Arc<dyn Storage>,
}

impl QueryFacade {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn store<T: Lifecycle>(&self) -> EntityStore<T> {
        EntityStore::new(self.storage.clone())
    }

    /// 某字段等于给定值的激活记录
    async fn active_where<T: Lifecycle>(
        &self,
        field: Field,
        value: impl Into<FieldValue>,
        cancel: &CancellationToken,
    ) -> Result<Vec<T>> {
        let store = self.store::<T>();
        store
            .find(store.query().active().filter(field, value), cancel)
            .await
    }

    pub async fn list_all<T: Lifecycle>(&self, cancel: &CancellationToken) -> Result<Vec<T>> {
        self.store::<T>().list_all(cancel).await
    }

    pub async fn list_active<T: Lifecycle>(&self, cancel: &CancellationToken) -> Result<Vec<T>> {
        self.store::<T>().list_active(cancel).await
    }

    pub async fn list_inactive<T: Lifecycle>(&self, cancel: &CancellationToken) -> Result<Vec<T>> {
        self.store::<T>().list_inactive(cancel).await
    }

    /// 按 id 获取（任意状态）
    pub async fn get<T: Lifecycle>(&self, id: Uuid, cancel: &CancellationToken) -> Result<T> {
        self.store::<T>()
            .get_by_id_any_state(id, cancel)
            .await?
            .ok_or_else(|| PlatformError::not_found(format!("{} not found", T::KIND.label())))
    }

    pub async fn courses_by_instructor(
        &self,
        instructor_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Course>> {
        self.active_where(Field::InstructorId, instructor_id, cancel)
            .await
    }

    pub async fn published_courses(&self, cancel: &CancellationToken) -> Result<Vec<Course>> {
        self.active_where(Field::IsPublished, true, cancel).await
    }

    /// 课程及其激活的模块、资源和测评
    pub async fn course_with_content(
        &self,
        course_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<CourseWithContent> {
        let course: Course = self.get(course_id, cancel).await?;
        let modules = self.modules_by_course(course_id, cancel).await?;
        let resources = self.resources_by_course(course_id, cancel).await?;
        let evaluations = self.evaluations_by_course(course_id, cancel).await?;

        debug!(
            "Loaded course {} with {} module(s), {} resource(s), {} evaluation(s)",
            course_id,
            modules.len(),
            resources.len(),
            evaluations.len()
        );
        Ok(CourseWithContent {
            course,
            modules,
            resources,
            evaluations,
        })
    }

    /// 课程下的激活模块，按 order_index 升序
    pub async fn modules_by_course(
        &self,
        course_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<CourseModule>> {
        let store = self.store::<CourseModule>();
        store
            .find(
                store
                    .query()
                    .active()
                    .filter(Field::CourseId, course_id)
                    .order_by(SortKey::OrderIndex, SortDirection::Asc),
                cancel,
            )
            .await
    }

    pub async fn resources_by_course(
        &self,
        course_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Resource>> {
        self.active_where(Field::CourseId, course_id, cancel).await
    }

    pub async fn resources_by_module(
        &self,
        module_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Resource>> {
        self.active_where(Field::ModuleId, module_id, cancel).await
    }

    pub async fn resources_by_uploader(
        &self,
        uploader_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Resource>> {
        self.active_where(Field::UploadedById, uploader_id, cancel)
            .await
    }

    pub async fn enrollments_by_course(
        &self,
        course_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Enrollment>> {
        self.active_where(Field::CourseId, course_id, cancel).await
    }

    pub async fn enrollments_by_user(
        &self,
        user_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Enrollment>> {
        self.active_where(Field::UserId, user_id, cancel).await
    }

    /// 通过激活选课关系找到的激活用户
    pub async fn users_by_course(
        &self,
        course_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<User>> {
        let user_ids: Vec<Uuid> = self
            .enrollments_by_course(course_id, cancel)
            .await?
            .into_iter()
            .map(|e| e.user_id)
            .collect();
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = self.store::<User>();
        users
            .find(users.query().by_ids(user_ids).active(), cancel)
            .await
    }

    pub async fn evaluations_by_course(
        &self,
        course_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Evaluation>> {
        self.active_where(Field::CourseId, course_id, cancel).await
    }

    /// 已发布且当前处于开放窗口内的测评
    pub async fn open_evaluations(&self, cancel: &CancellationToken) -> Result<Vec<Evaluation>> {
        let now = time::now();
        let published: Vec<Evaluation> = self.active_where(Field::IsPublished, true, cancel).await?;
        Ok(published
            .into_iter()
            .filter(|evaluation| evaluation.is_open_at(now))
            .collect())
    }

    pub async fn submissions_by_evaluation(
        &self,
        evaluation_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Submission>> {
        self.active_where(Field::EvaluationId, evaluation_id, cancel)
            .await
    }

    pub async fn submissions_by_student(
        &self,
        student_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<Submission>> {
        self.active_where(Field::StudentId, student_id, cancel).await
    }

    pub async fn recipients_by_user(
        &self,
        user_id: Uuid,
        cancel: &CancellationToken,
    ) -> Result<Vec<NotificationRecipient>> {
        self.active_where(Field::UserId, user_id, cancel).await
    }
}
