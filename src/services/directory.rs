//! Activity directory service — listing, signup, and unregistration.
//!
//! DESIGN
//! ======
//! The directory is the single source of truth for rosters. Each operation
//! takes the directory lock for its full duration, so a signup can never
//! observe a roster mid-mutation and duplicate membership is impossible
//! even under concurrent requests.

use std::collections::HashMap;

use tracing::info;

use crate::state::{Activity, AppState};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("activity not found: {0}")]
    NotFound(String),
    #[error("student already signed up for this activity")]
    AlreadySignedUp,
    #[error("student is not signed up for this activity")]
    NotSignedUp,
}

/// Snapshot the full activity directory.
pub async fn list_activities(state: &AppState) -> HashMap<String, Activity> {
    state.directory.read().await.clone()
}

/// Sign a student up for an activity.
///
/// # Errors
///
/// Returns `NotFound` if the activity does not exist, or `AlreadySignedUp`
/// if the email is already on the roster.
pub async fn signup(state: &AppState, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
    let mut directory = state.directory.write().await;
    let activity = directory
        .get_mut(activity_name)
        .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(DirectoryError::AlreadySignedUp);
    }

    activity.participants.push(email.to_string());
    info!(activity = activity_name, email, "signed up");
    Ok(())
}

/// Remove a student from an activity's roster.
///
/// # Errors
///
/// Returns `NotFound` if the activity does not exist, or `NotSignedUp`
/// if the email is not on the roster.
pub async fn unregister(state: &AppState, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
    let mut directory = state.directory.write().await;
    let activity = directory
        .get_mut(activity_name)
        .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))?;

    let Some(index) = activity.participants.iter().position(|p| p == email) else {
        return Err(DirectoryError::NotSignedUp);
    };

    activity.participants.remove(index);
    info!(activity = activity_name, email, "unregistered");
    Ok(())
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
