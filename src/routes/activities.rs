//! Activity directory routes.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::directory::{self, DirectoryError};
use crate::state::{Activity, AppState};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// `GET /activities` — list all activities with their rosters.
pub async fn list_activities(State(state): State<AppState>) -> Json<HashMap<String, Activity>> {
    Json(directory::list_activities(&state).await)
}

/// `POST /activities/:activity_name/signup?email=…` — sign a student up.
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    directory::signup(&state, &activity_name, &params.email)
        .await
        .map_err(directory_error_to_response)?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {activity_name}", params.email),
    }))
}

/// `DELETE /activities/:activity_name/unregister?email=…` — remove a student.
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    directory::unregister(&state, &activity_name, &params.email)
        .await
        .map_err(directory_error_to_response)?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {activity_name}", params.email),
    }))
}

pub(crate) fn directory_error_to_response(err: DirectoryError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, detail) = match err {
        DirectoryError::NotFound(_) => (StatusCode::NOT_FOUND, "Activity not found".to_string()),
        DirectoryError::AlreadySignedUp => {
            (StatusCode::BAD_REQUEST, "Student already signed up for this activity".to_string())
        }
        DirectoryError::NotSignedUp => {
            (StatusCode::BAD_REQUEST, "Student is not signed up for this activity".to_string())
        }
    };
    (status, Json(ErrorResponse { detail }))
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
