use std::sync::Arc;

use axum::{extract::State, Json};

use crate::database::ActivityDirectory;
use crate::models::ActivityListing;
use crate::services::activities_service;

pub async fn activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<ActivityListing> {
    Json(activities_service::list_activities(&directory))
}
