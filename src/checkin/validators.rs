// src/checkin/validators.rs

use serde_json::Value;
use tracing::debug;

use super::models::CheckInInput;
use crate::common::fields::{
    char_len, check_unknown_fields, expect_object, not_string_message, string_field, FieldValue,
};
use crate::common::helpers::{safe_phone_log, MAX_NAME_LENGTH, PHONE_CHARSET_REGEX};
use crate::common::{ValidationConfig, ValidationResult, Validator};

pub const CHECK_IN_FIELDS: [&str; 3] = ["name", "phone", "appointmentTime"];

// ============================================================================
// Check-in Validator
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CheckInValidator {
    pub config: ValidationConfig,
}

impl CheckInValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl Validator<Value> for CheckInValidator {
    fn validate(&self, data: &Value) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(record) = expect_object(data, &mut result) else {
            return result;
        };

        // Validate name
        match string_field(record, "name") {
            FieldValue::Missing => result.add_error("name", "Name is required"),
            FieldValue::NotString => result.add_error("name", &not_string_message("name")),
            FieldValue::Text(name) => {
                if name.is_empty() {
                    result.add_error("name", "Name is required");
                } else if char_len(name) > MAX_NAME_LENGTH {
                    result.add_error("name", "Name must be less than 100 characters");
                }
            }
        }

        // Validate phone
        match string_field(record, "phone") {
            FieldValue::Missing => result.add_error("phone", "Phone number is required"),
            FieldValue::NotString => result.add_error("phone", &not_string_message("phone")),
            FieldValue::Text(phone) => {
                if phone.is_empty() {
                    result.add_error("phone", "Phone number is required");
                } else if !PHONE_CHARSET_REGEX.is_match(phone) {
                    debug!(phone = %safe_phone_log(phone), "Rejected phone number");
                    result.add_error("phone", "Please enter a valid phone number");
                }
            }
        }

        // Validate appointment time, format is not checked
        match string_field(record, "appointmentTime") {
            FieldValue::Missing => {
                result.add_error("appointmentTime", "Appointment time is required")
            }
            FieldValue::NotString => result.add_error(
                "appointmentTime",
                &not_string_message("appointmentTime"),
            ),
            FieldValue::Text(time) => {
                if time.is_empty() {
                    result.add_error("appointmentTime", "Appointment time is required");
                }
            }
        }

        check_unknown_fields("check_in", record, &CHECK_IN_FIELDS, &self.config, &mut result);

        result
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Validates a check-in record, allowing unknown keys through.
pub fn validate_check_in(data: &Value) -> Result<CheckInInput, ValidationResult> {
    validate_check_in_with(data, &ValidationConfig::default())
}

/// Validates a check-in record under the given config.
///
/// Every failing field is reported, in the order name, phone, appointmentTime.
pub fn validate_check_in_with(
    data: &Value,
    config: &ValidationConfig,
) -> Result<CheckInInput, ValidationResult> {
    let result = CheckInValidator::new(config.clone()).validate(data);

    if !result.is_valid {
        debug!(form = "check_in", issues = result.errors.len(), "Validation failed");
        return Err(result);
    }

    serde_json::from_value(data.clone()).map_err(|e| {
        let mut result = ValidationResult::new();
        result.add_error("value", &e.to_string());
        result
    })
}
