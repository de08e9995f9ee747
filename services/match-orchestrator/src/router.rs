use crate::handlers::matches;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/leagues/{league_id}/matches", get(matches::list_matches))
        .route("/leagues/{league_id}/matches", post(matches::create_match))
        .route(
            "/leagues/{league_id}/matches/{match_id}",
            get(matches::get_match),
        )
        .route(
            "/leagues/{league_id}/matches/{match_id}",
            put(matches::update_match),
        )
        .route(
            "/leagues/{league_id}/matches/{match_id}",
            delete(matches::delete_match),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
