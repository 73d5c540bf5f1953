use std::sync::Arc;

use axum::{extract::State, Json};
use indexmap::IndexMap;

use crate::database::ActivityDirectory;
use crate::models::Activity;
use crate::services::activities_service;

pub async fn activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&directory))
}
