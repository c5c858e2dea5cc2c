use app_dto::index::GetIndexOutput;
use axum::extract::Json;

pub async fn get_index() -> Json<GetIndexOutput> {
    Json(GetIndexOutput {
        message: "Tenure prediction service is running.".to_owned(),
    })
}
