pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use middleware::jwt_auth_middleware;
use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(auth_routes())
        .merge(product_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login));

    let protected = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/products",
            post(handlers::products::create).get(handlers::products::list),
        )
        .route(
            "/api/products/:id",
            get(handlers::products::get_product).delete(handlers::products::delete_product),
        )
        .route(
            "/api/products/:id/quantity",
            put(handlers::products::update_quantity),
        )
        .layer(from_fn(jwt_auth_middleware))
}
