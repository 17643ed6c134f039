use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;

/// JSON 请求体解析失败统一返回 400
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::with_message(
        "Invalid JSON payload",
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析失败统一返回 400
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::with_message(
        "Invalid query parameters",
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}
