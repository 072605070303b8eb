use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::database::ActivityDirectory;
use crate::error::SignupError;
use crate::models::MessageResponse;
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

// Both error kinds surface as 400; `detail` is what the bundled front-end reads.
fn reject(e: SignupError) -> (StatusCode, Json<Value>) {
    let msg = e.to_string();
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "detail": msg, "message": msg })),
    )
}

pub async fn signup_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<Value>)> {
    activities_service::sign_up(&directory, &activity_name, &query.email)
        .map(|message| Json(MessageResponse { message }))
        .map_err(reject)
}

pub async fn unregister_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<Value>)> {
    activities_service::unregister(&directory, &activity_name, &query.email)
        .map(|message| Json(MessageResponse { message }))
        .map_err(reject)
}
