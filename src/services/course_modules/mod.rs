pub mod create;
pub mod update;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::{PlatformError, Result};
use crate::models::course_modules::{
    entities::CourseModule,
    requests::{CreateCourseModuleRequest, UpdateCourseModuleRequest},
};
use crate::models::courses::entities::Course;
use crate::storage::{EntityStore, Field, Storage};

pub struct CourseModuleService {
    storage: Arc<dyn Storage>,
    modules: EntityStore<CourseModule>,
    courses: EntityStore<Course>,
}

impl CourseModuleService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            modules: EntityStore::new(storage.clone()),
            courses: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建课程模块
    pub async fn create_module(
        &self,
        request: CreateCourseModuleRequest,
        cancel: &CancellationToken,
    ) -> Result<CourseModule> {
        create::create_module(self, request, cancel).await
    }

    // 更新课程模块
    pub async fn update_module(
        &self,
        module_id: Uuid,
        request: UpdateCourseModuleRequest,
        cancel: &CancellationToken,
    ) -> Result<CourseModule> {
        update::update_module(self, module_id, request, cancel).await
    }

    pub async fn deactivate(&self, module_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<CourseModule>(
            self.storage(),
            module_id,
            Transition::Deactivate,
            cancel,
        )
        .await
    }

    /// 重新激活时不重新校验 order_index 唯一性
    pub async fn reactivate(&self, module_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<CourseModule>(
            self.storage(),
            module_id,
            Transition::Reactivate,
            cancel,
        )
        .await
    }

    /// 同一课程的激活模块中 order_index 必须唯一
    async fn ensure_order_index_free(
        &self,
        course_id: Uuid,
        order_index: i32,
        except: Option<Uuid>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let holders = self
            .modules
            .find(
                self.modules
                    .query()
                    .active()
                    .filter(Field::CourseId, course_id)
                    .filter(Field::OrderIndex, order_index),
                cancel,
            )
            .await?;

        if holders.iter().any(|m| Some(m.id) != except) {
            return Err(PlatformError::conflict(format!(
                "OrderIndex {order_index} already used in this course"
            )));
        }
        Ok(())
    }
}
