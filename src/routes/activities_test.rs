use super::*;
use crate::state::test_helpers::test_app_state;

fn email_params(email: &str) -> Query<EmailParams> {
    Query(EmailParams { email: email.to_string() })
}

#[tokio::test]
async fn list_activities_returns_seeded_directory() {
    let state = test_app_state();
    let Json(activities) = list_activities(State(state)).await;

    assert_eq!(activities.len(), 9);
    let chess = &activities["Chess Club"];
    assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    assert!(chess.participants.contains(&"michael@mergington.edu".to_string()));
}

#[tokio::test]
async fn signup_new_student_returns_confirmation() {
    let state = test_app_state();
    let Json(body) = signup(
        State(state.clone()),
        Path("Chess Club".to_string()),
        email_params("newuser@mergington.edu"),
    )
    .await
    .unwrap();

    assert_eq!(body.message, "Signed up newuser@mergington.edu for Chess Club");

    let Json(activities) = list_activities(State(state)).await;
    assert!(activities["Chess Club"].participants.contains(&"newuser@mergington.edu".to_string()));
}

#[tokio::test]
async fn signup_twice_returns_bad_request_with_detail() {
    let state = test_app_state();

    signup(State(state.clone()), Path("Chess Club".to_string()), email_params("newuser@mergington.edu"))
        .await
        .unwrap();

    let (status, Json(body)) =
        signup(State(state.clone()), Path("Chess Club".to_string()), email_params("newuser@mergington.edu"))
            .await
            .unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "Student already signed up for this activity");

    let Json(activities) = list_activities(State(state)).await;
    let count = activities["Chess Club"]
        .participants
        .iter()
        .filter(|p| *p == "newuser@mergington.edu")
        .count();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn signup_unknown_activity_returns_not_found() {
    let state = test_app_state();
    let (status, Json(body)) =
        signup(State(state), Path("Knitting Circle".to_string()), email_params("a@mergington.edu"))
            .await
            .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Activity not found");
}

#[tokio::test]
async fn unregister_registered_student_returns_confirmation() {
    let state = test_app_state();
    let Json(body) = unregister(
        State(state.clone()),
        Path("Chess Club".to_string()),
        email_params("michael@mergington.edu"),
    )
    .await
    .unwrap();

    assert_eq!(body.message, "Unregistered michael@mergington.edu from Chess Club");

    let Json(activities) = list_activities(State(state)).await;
    assert!(!activities["Chess Club"].participants.contains(&"michael@mergington.edu".to_string()));
}

#[tokio::test]
async fn unregister_twice_returns_bad_request_with_detail() {
    let state = test_app_state();

    unregister(State(state.clone()), Path("Chess Club".to_string()), email_params("michael@mergington.edu"))
        .await
        .unwrap();

    let (status, Json(body)) = unregister(
        State(state),
        Path("Chess Club".to_string()),
        email_params("michael@mergington.edu"),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "Student is not signed up for this activity");
}

#[tokio::test]
async fn unregister_unknown_activity_returns_not_found() {
    let state = test_app_state();
    let (status, Json(body)) =
        unregister(State(state), Path("Knitting Circle".to_string()), email_params("a@mergington.edu"))
            .await
            .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Activity not found");
}

#[test]
fn directory_error_to_response_maps_not_found() {
    let (status, Json(body)) = directory_error_to_response(DirectoryError::NotFound("X".into()));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Activity not found");
}

#[test]
fn directory_error_to_response_maps_conflicts_to_bad_request() {
    let (status, _) = directory_error_to_response(DirectoryError::AlreadySignedUp);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = directory_error_to_response(DirectoryError::NotSignedUp);
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
