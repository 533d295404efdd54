// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every user-visible failure.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ApiMessage {
    pub message: String,
}

/// Response builders. Successful payloads are written as-is, without an envelope.
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiMessage {
            message: message.to_string(),
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            code: code.to_string(),
            message: message.to_string(),
            error: None,
        })
    }

    pub fn error_with_detail(
        status: StatusCode,
        code: &str,
        message: &str,
        detail: &str,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            code: code.to_string(),
            message: message.to_string(),
            error: Some(detail.to_string()),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal_error_with_detail(code: &str, message: &str, detail: &str) -> HttpResponse {
        Self::error_with_detail(StatusCode::INTERNAL_SERVER_ERROR, code, message, detail)
    }
}
