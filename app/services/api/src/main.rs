use tenure_api::api_service;

#[tokio::main]
async fn main() {
    api_service().await;
}
