pub mod portfolio_form;
pub mod portfolio_response;
pub mod routes;
