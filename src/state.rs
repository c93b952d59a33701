//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the activity directory: a map from activity name to its
//! metadata and current roster. The directory is seeded once at startup
//! and mutated in place by signup/unregister; there is no persistence.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// ACTIVITY
// =============================================================================

/// An extracurricular activity and its current roster.
///
/// `participants` holds student emails in signup order. Membership is
/// checked on every mutation, so each email appears at most once.
/// `max_participants` is advisory metadata and not enforced as a cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    #[must_use]
    pub fn new(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(ToString::to_string).collect(),
        }
    }
}

// =============================================================================
// SEED DATA
// =============================================================================

/// Build the fixed activity directory for Mergington High School.
#[must_use]
pub fn seed_directory() -> HashMap<String, Activity> {
    let mut directory = HashMap::new();
    directory.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    directory.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    directory.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    directory.insert(
        "Soccer Team".to_string(),
        Activity::new(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
    );
    directory.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
    );
    directory.insert(
        "Art Club".to_string(),
        Activity::new(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
    );
    directory.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
    );
    directory.insert(
        "Math Club".to_string(),
        Activity::new(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
    );
    directory.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    );
    directory
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the directory is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<HashMap<String, Activity>>>,
}

impl AppState {
    #[must_use]
    pub fn new(directory: HashMap<String, Activity>) -> Self {
        Self { directory: Arc::new(RwLock::new(directory)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with the full seed directory.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(seed_directory())
    }

    /// Create a test `AppState` with a single activity.
    #[must_use]
    pub fn test_app_state_with_activity(name: &str, activity: Activity) -> AppState {
        let mut directory = HashMap::new();
        directory.insert(name.to_string(), activity);
        AppState::new(directory)
    }

    /// Create a dummy `Activity` with the given roster.
    #[must_use]
    pub fn dummy_activity(participants: &[&str]) -> Activity {
        Activity::new("A test activity", "Mondays, 3:00 PM - 4:00 PM", 10, participants)
    }
}
