//! 领域结果到 HTTP 响应的映射

use actix_web::{HttpResponse, Result as ActixResult, http::StatusCode};
use serde::Serialize;
use tracing::{error, warn};
use ts_rs::TS;

use crate::errors::{PlatformError, Result};
use crate::models::{ApiResponse, ErrorCode};

fn status_of(err: &PlatformError) -> StatusCode {
    match err {
        PlatformError::NotFound(_) => StatusCode::NOT_FOUND,
        PlatformError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        PlatformError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PlatformError::Conflict(_) | PlatformError::PersistenceConflict(_) => StatusCode::CONFLICT,
        PlatformError::Cancelled(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(err: &PlatformError) -> HttpResponse {
    let status = status_of(err);
    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        err.message().to_string()
    };
    HttpResponse::build(status).json(ApiResponse::error_empty(ErrorCode::from(err), message))
}

/// 成功时返回 200
pub fn respond<T>(result: Result<T>, message: &str) -> ActixResult<HttpResponse>
where
    T: Serialize + TS,
{
    Ok(match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
        Err(err) => error_response(&err),
    })
}

/// 成功时返回 201
pub fn respond_created<T>(result: Result<T>, message: &str) -> ActixResult<HttpResponse>
where
    T: Serialize + TS,
{
    Ok(match result {
        Ok(data) => HttpResponse::Created().json(ApiResponse::success(data, message)),
        Err(err) => error_response(&err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(&PlatformError::not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(&PlatformError::invalid_argument("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(&PlatformError::invalid_state("x")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(&PlatformError::persistence_conflict("x")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(&PlatformError::cancelled("x")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(&PlatformError::database_operation("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
