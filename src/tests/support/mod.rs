pub mod app_state_builder;
pub mod multipart;
pub mod portfolio_fakes;
pub mod portfolio_test_fixtures;
pub mod stubs;
