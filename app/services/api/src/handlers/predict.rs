use app_dto::predict::{PostPredictInput, PostPredictOutput};
use app_error::AppError;
use app_state::AppState;
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::*;

/// validate -> persist -> encode -> infer -> respond, in that order.
pub async fn post_predict(
    State(state): State<Arc<AppState>>,
    Json(args): Json<PostPredictInput>,
) -> Result<Json<PostPredictOutput>, AppError> {
    let record = args.parse()?;
    // The archive write is a side channel here; losing it must not cost the
    // caller their prediction.
    if let Err(e) = state.sink.append(&record).await {
        warn!("Cannot append customer record, continuing: {}", e);
    }
    let features = state.encoder.encode(&record)?;
    let predicted_tenure = state.predictor.infer(&features)?;
    debug!("{}", format!("Predicted {} from {:?}", &predicted_tenure, &features));
    Ok(Json(PostPredictOutput {
        status: "success".to_owned(),
        predicted_tenure,
    }))
}
