//! HTTP API module for the calculator, health, metrics and docs endpoints.

pub mod docs;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
