use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;
use crate::models::common::Patch;

// 用户创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Option<UserRole>,
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub first_name: Patch<String>,
    #[serde(default)]
    pub last_name: Patch<String>,
    #[serde(default)]
    pub role: Patch<UserRole>,
}
