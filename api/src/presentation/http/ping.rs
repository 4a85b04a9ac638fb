use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: &'static str,
}

#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    responses((status = 200, body = PingResponse))
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

pub fn routes() -> Router {
    Router::new().route("/ping", get(ping))
}
