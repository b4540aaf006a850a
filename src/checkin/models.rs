//! Check-in form data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Front-desk check-in submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInInput {
    pub name: String,
    pub phone: String,
    pub appointment_time: String,
    /// Keys outside the form, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
