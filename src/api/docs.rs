//! OpenAPI document.

use utoipa::OpenApi;

use super::dto::{ErrorResponse, HealthResponse, OperationRequest, OperationResponse};
use super::handlers;

/// OpenAPI description of every public endpoint.
#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator Service", description = "Stateless arithmetic over HTTP"),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::health,
    ),
    components(schemas(OperationRequest, OperationResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "calculator", description = "Binary arithmetic operations"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
