use crate::handlers::{index::*, predict::*, record::*};
use app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    // The intake form is served from another origin.
    Router::new()
        .route("/", get(get_index))
        .route("/predict", post(post_predict))
        .route("/record", post(post_record))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
