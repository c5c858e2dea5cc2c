mod handlers;
mod routings;

use crate::routings::router;
use app_config::AppConfig;
use app_encoding::ENCODING_V1;
use app_log::init_tracing;
use app_model::TenureModel;
use app_state::AppState;
use app_storage::PgRecordSink;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::{env, sync::Arc};
use tracing::*;

pub async fn api_service() {
    dotenv().ok();
    let config = AppConfig::new();
    let bind = config.backend_bind.clone();
    let pg_connection = config.pg_connection;
    init_tracing(&config.log_level);
    // Predictive artifact; the loader verifies it against the compiled-in
    // encoding table, so a drifted encoder never serves a request
    let model = match TenureModel::load(&config.artifact_path, &ENCODING_V1) {
        Ok(model) => model,
        Err(e) => panic!("Cannot load model artifact\n{}", e),
    };
    info!(
        "Loaded tenure model v{} from {}",
        model.version(),
        &config.artifact_path
    );
    // PostgreSQL
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(e) => {
            debug!("{}", e);
            panic!("Cannot locate DATABASE_URL env variable");
        }
    };
    let pg = PgPoolOptions::new()
        .max_connections(pg_connection.try_into().unwrap())
        .connect(&database_url)
        .await
        .unwrap();
    let sink = PgRecordSink::new(pg);
    if let Err(e) = sink.migrate().await {
        panic!("Cannot prepare customer_records table\n{}", e);
    }
    // Generating AppState
    let app_state = Arc::new(AppState {
        config: config.clone(),
        encoder: ENCODING_V1,
        predictor: Arc::new(model),
        sink: Arc::new(sink),
    });
    // Loading Routes
    let routes = router(app_state);
    // Setup TCP Port
    let tcp_listener = tokio::net::TcpListener::bind(&bind).await.unwrap();
    // Running Server ...
    info!("Serving web server on {}", &bind);
    let _ = axum::serve(tcp_listener, routes).await;
}
