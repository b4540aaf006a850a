//! Staff login data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Staff credential submission
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffLoginInput {
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Keep the password out of logs
impl fmt::Debug for StaffLoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffLoginInput")
            .field("username", &self.username)
            .field("password", &"***")
            .field("extra", &self.extra)
            .finish()
    }
}
