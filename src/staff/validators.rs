// src/staff/validators.rs

use serde_json::{Map, Value};
use tracing::debug;

use super::models::StaffLoginInput;
use crate::common::fields::{
    char_len, check_unknown_fields, empty_message, expect_object, max_length_message,
    min_length_message, not_string_message, required_message, string_field, FieldValue,
};
use crate::common::{ValidationConfig, ValidationResult, Validator};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 6;

pub const STAFF_LOGIN_FIELDS: [&str; 2] = ["username", "password"];

// ============================================================================
// Staff Login Validator
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct StaffLoginValidator {
    pub config: ValidationConfig,
}

impl StaffLoginValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl Validator<Value> for StaffLoginValidator {
    fn validate(&self, data: &Value) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(record) = expect_object(data, &mut result) else {
            return result;
        };

        check_length(
            record,
            "username",
            USERNAME_MIN_LENGTH,
            Some(USERNAME_MAX_LENGTH),
            &mut result,
        );
        check_length(record, "password", PASSWORD_MIN_LENGTH, None, &mut result);

        check_unknown_fields(
            "staff_login",
            record,
            &STAFF_LOGIN_FIELDS,
            &self.config,
            &mut result,
        );

        result
    }
}

/// Required string with a length range; reports the first failing rule only
fn check_length(
    record: &Map<String, Value>,
    field: &str,
    min: usize,
    max: Option<usize>,
    result: &mut ValidationResult,
) {
    let value = match string_field(record, field) {
        FieldValue::Missing => {
            result.add_error(field, &required_message(field));
            return;
        }
        FieldValue::NotString => {
            result.add_error(field, &not_string_message(field));
            return;
        }
        FieldValue::Text(value) => value,
    };

    let len = char_len(value);
    if len == 0 {
        result.add_error(field, &empty_message(field));
    } else if len < min {
        result.add_error(field, &min_length_message(field, min));
    } else if let Some(max) = max.filter(|max| len > *max) {
        result.add_error(field, &max_length_message(field, max));
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Validates a staff login record, allowing unknown keys through.
pub fn validate_staff_login(data: &Value) -> Result<StaffLoginInput, ValidationResult> {
    validate_staff_login_with(data, &ValidationConfig::default())
}

pub fn validate_staff_login_with(
    data: &Value,
    config: &ValidationConfig,
) -> Result<StaffLoginInput, ValidationResult> {
    let result = StaffLoginValidator::new(config.clone()).validate(data);

    if !result.is_valid {
        debug!(form = "staff_login", issues = result.errors.len(), "Validation failed");
        return Err(result);
    }

    serde_json::from_value(data.clone()).map_err(|e| {
        let mut result = ValidationResult::new();
        result.add_error("value", &e.to_string());
        result
    })
}
