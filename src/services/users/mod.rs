pub mod create;
pub mod update;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::guards::require_existing;
use super::lifecycle::{Transition, transition_and_commit};
use crate::errors::Result;
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UpdateUserRequest},
};
use crate::storage::{EntityStore, Storage};

pub struct UserService {
    storage: Arc<dyn Storage>,
    users: EntityStore<User>,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            users: EntityStore::new(storage.clone()),
            storage,
        }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建用户
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
        cancel: &CancellationToken,
    ) -> Result<User> {
        create::create_user(self, request, cancel).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
        cancel: &CancellationToken,
    ) -> Result<User> {
        update::update_user(self, user_id, request, cancel).await
    }

    // 根据ID获取用户（任意状态）
    pub async fn get_user(&self, user_id: Uuid, cancel: &CancellationToken) -> Result<User> {
        require_existing(&self.users, user_id, "User", cancel).await
    }

    pub async fn deactivate(&self, user_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<User>(self.storage(), user_id, Transition::Deactivate, cancel).await
    }

    pub async fn reactivate(&self, user_id: Uuid, cancel: &CancellationToken) -> Result<bool> {
        transition_and_commit::<User>(self.storage(), user_id, Transition::Reactivate, cancel).await
    }
}
