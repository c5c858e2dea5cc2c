use app_config::AppConfig;
use app_encoding::EncodingTable;
use app_model::Predictor;
use app_storage::RecordSink;
use std::sync::Arc;

/// Process-scoped resources, built once at startup and handed to every
/// request handler read-only. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub encoder: EncodingTable,
    pub predictor: Arc<dyn Predictor>,
    pub sink: Arc<dyn RecordSink>,
}
