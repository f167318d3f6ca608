use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::user::{
        create_user, delete_user, get_current_user, get_users, update_user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Roster API", description = "User and group administration"),
    tags((name = "user", description = "User roster endpoints"))
)]
struct ApiDoc;

/// API routes plus Swagger UI at `/api/docs`, with request tracing.
pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_users, create_user))
        .routes(routes!(update_user, delete_user))
        .routes(routes!(get_current_user))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
