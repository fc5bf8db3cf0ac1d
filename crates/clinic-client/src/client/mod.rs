pub mod api_client;
pub mod auth;
pub mod dashboard;
pub mod resources;
