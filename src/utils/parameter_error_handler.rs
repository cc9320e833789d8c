//! 请求参数解析错误处理器
//!
//! 将 actix 的 JSON / Query / Path 反序列化错误统一转换为 `ApiResponse` 结构。

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    debug!("JSON payload rejected: {}", err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid JSON payload: {err}"),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    debug!("Query string rejected: {}", err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    debug!("Path parameter rejected: {}", err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter: {err}"),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}
