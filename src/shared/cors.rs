// src/shared/cors.rs
use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Allow-list CORS. Requests without an `Origin` header are not affected.
pub fn cors_from_origins(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}
