use utoipa::OpenApi;

use crate::api::schemas::PortfolioMultipartRequest;
use crate::modules::portfolio::adapter::incoming::web::portfolio_form::ImageMetadataDto;
use crate::modules::portfolio::adapter::incoming::web::portfolio_response::{
    PortfolioImageResponse, PortfolioItemResponse,
};
use crate::shared::api::{ApiError, ApiMessage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Portfolio items with ordered image galleries stored in Google Cloud Storage",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_items_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::create_portfolio_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_portfolio_item_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::delete_portfolio_item_handler,
    ),
    components(
        schemas(
            // Response bodies
            PortfolioItemResponse,
            PortfolioImageResponse,
            ApiError,
            ApiMessage,

            // Request bodies
            PortfolioMultipartRequest,
            ImageMetadataDto,
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio item management endpoints"),
    )
)]
pub struct ApiDoc;
