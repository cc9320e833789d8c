pub mod create;
pub mod update;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::Result;
use crate::models::course_modules::entities::CourseModule;
use crate::models::courses::entities::Course;
use crate::models::resources::{
    entities::Resource,
    requests::{CreateResourceRequest, UpdateResourceRequest},
};
use crate::models::users::entities::User;
use crate::storage::{EntityStore, Storage};

pub struct ResourceService {
    storage: Arc<dyn Storage>,
    resources: EntityStore<Resource>,
    users: EntityStore<User>,
    courses: EntityStore<Course>,
    modules: EntityStore<CourseModule>,
}

impl ResourceService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            resources: EntityStore::new(storage.clone()),
            users: EntityStore::new(storage.clone()),
            courses: EntityStore::new(storage.clone()),
            modules: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 上传（登记）学习资源
    pub async fn create_resource(
        &self,
        request: CreateResourceRequest,
        cancel: &CancellationToken,
    ) -> Result<Resource> {
        create::create_resource(self, request, cancel).await
    }

    pub async fn update_resource(
        &self,
        resource_id: Uuid,
        request: UpdateResourceRequest,
        cancel: &CancellationToken,
    ) -> Result<Resource> {
        update::update_resource(self, resource_id, request, cancel).await
    }

    pub async fn deactivate(&self, resource_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Resource>(
            self.storage(),
            resource_id,
            Transition::Deactivate,
            cancel,
        )
        .await
    }

    pub async fn reactivate(&self, resource_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<Resource>(
            self.storage(),
            resource_id,
            Transition::Reactivate,
            cancel,
        )
        .await
    }
}
