//! Authenticated caller context

use serde::{Deserialize, Serialize};

/// The authenticated user on whose behalf an operation runs.
///
/// Passed explicitly to every operation that needs it; nothing reads the
/// current user from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }
}
