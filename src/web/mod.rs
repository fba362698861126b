pub mod insights;

use crate::middleware::rate_limit;
use crate::state::SharedState;
use axum::{middleware, routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    let insights = insights::router(state.clone()).route_layer(middleware::from_fn_with_state(
        state.limiter.clone(),
        rate_limit::rate_limit_middleware,
    ));

    Router::new()
        .route("/health", get(health))
        .nest("/api/insights", insights)
}
