// src/shared/api/request_config.rs
use actix_multipart::form::MultipartFormConfig;
use actix_web::{web::PathConfig, HttpResponse};

use crate::shared::api::ApiResponse;

/// Path segments that fail to parse (e.g. a non-UUID id) resolve to "not found".
pub fn custom_path_config(not_found_code: &'static str, not_found_message: &'static str) -> PathConfig {
    PathConfig::default().error_handler(move |err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::not_found(not_found_code, not_found_message),
        )
        .into()
    })
}

/// Multipart limits are held fully in memory, so both limits are set to `total_limit`.
pub fn custom_multipart_config(total_limit: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(total_limit)
        .memory_limit(total_limit)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

/// `MultipartForm` rejects a non-multipart `Content-Type` before its config is consulted,
/// so handlers extract `Result<MultipartForm<_>, Error>` and answer with this.
pub fn multipart_rejection(err: actix_web::Error) -> HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}
