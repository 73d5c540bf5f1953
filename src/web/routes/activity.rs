use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::ActivityDirectory;
use crate::services::activities_service;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    State(directory): State<Arc<ActivityDirectory>>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    // A missing `email` is a 422, not axum's default 400.
    let Query(query) = query?;
    let message = activities_service::signup(&directory, &activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn remove_participant_handler(
    path: Result<Path<(String, String)>, PathRejection>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path((activity_name, email)) = path?;
    let message = activities_service::unregister(&directory, &activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}
