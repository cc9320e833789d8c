use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::PlatformError;

/// 响应体中的业务状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    NotFound = 1001,
    InvalidState = 1002,
    InvalidArgument = 1003,
    Conflict = 1004,
    PersistenceConflict = 1005,
    Cancelled = 1006,
    InternalServerError = 5000,
}

impl From<&PlatformError> for ErrorCode {
    fn from(err: &PlatformError) -> Self {
        match err {
            PlatformError::NotFound(_) => ErrorCode::NotFound,
            PlatformError::InvalidState(_) => ErrorCode::InvalidState,
            PlatformError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            PlatformError::Conflict(_) => ErrorCode::Conflict,
            PlatformError::PersistenceConflict(_) => ErrorCode::PersistenceConflict,
            PlatformError::Cancelled(_) => ErrorCode::Cancelled,
            _ => ErrorCode::InternalServerError,
        }
    }
}
