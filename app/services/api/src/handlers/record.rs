use app_dto::predict::PostPredictInput;
use app_error::AppError;
use app_state::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::*;

/// Direct intake used by the form UI: the write is the whole point of the
/// call, so a storage failure fails the request.
pub async fn post_record(
    State(state): State<Arc<AppState>>,
    Json(args): Json<PostPredictInput>,
) -> Result<StatusCode, AppError> {
    let record = args.parse()?;
    state.sink.append(&record).await?;
    debug!("{}", format!("INSERT customer record: {:#?}", &record));
    Ok(StatusCode::CREATED)
}
