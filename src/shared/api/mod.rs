pub mod request_config;
pub mod response;

pub use response::{ApiError, ApiMessage, ApiResponse};
