//! Tests for common module
//!
//! These tests verify the shared validation plumbing:
//! - ValidationResult collection and merging
//! - Field extraction from untyped records
//! - Validation config parsing

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::fields::{check_unknown_fields, char_len, expect_object, string_field, FieldValue};
    use serde_json::json;

    #[test]
    fn test_validation_result_collects_in_order() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid);

        result.add_error("name", "Name is required");
        result.add_error("phone", "Phone number is required");

        assert!(!result.is_valid);
        assert_eq!(
            result.messages(),
            vec!["Name is required", "Phone number is required"]
        );
        assert!(result.has_error_for("phone"));
        assert!(!result.has_error_for("appointmentTime"));
        assert_eq!(
            result.to_string(),
            "name: Name is required, phone: Phone number is required"
        );
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result = ValidationResult::new();
        result.merge(ValidationResult::new());
        assert!(result.is_valid);

        let mut other = ValidationResult::new();
        other.add_error("username", "\"username\" is required");
        result.merge(other);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_string_field() {
        let record = json!({ "a": "text", "b": 42, "c": null });
        let record = record.as_object().unwrap();

        assert_eq!(string_field(record, "a"), FieldValue::Text("text"));
        assert_eq!(string_field(record, "b"), FieldValue::NotString);
        assert_eq!(string_field(record, "c"), FieldValue::Missing);
        assert_eq!(string_field(record, "d"), FieldValue::Missing);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("héllo"), 5);
    }

    #[test]
    fn test_expect_object() {
        let mut result = ValidationResult::new();
        assert!(expect_object(&json!({}), &mut result).is_some());
        assert!(result.is_valid);

        assert!(expect_object(&json!("not a record"), &mut result).is_none());
        assert_eq!(result.errors[0].field, "value");
        assert_eq!(result.errors[0].message, "\"value\" must be of type object");
    }

    #[test]
    fn test_check_unknown_fields() {
        let record = json!({ "name": "Jane", "notes": "x", "source": "kiosk" });
        let record = record.as_object().unwrap();

        let mut result = ValidationResult::new();
        check_unknown_fields("test", record, &["name"], &ValidationConfig::default(), &mut result);
        assert!(result.is_valid);

        let mut result = ValidationResult::new();
        check_unknown_fields("test", record, &["name"], &ValidationConfig::strict(), &mut result);
        assert!(!result.is_valid);
        assert!(result.has_error_for("notes"));
        assert!(result.has_error_for("source"));
        assert!(result
            .messages()
            .contains(&"\"notes\" is not allowed"));
    }

    #[test]
    fn test_config_from_setting() {
        let config = ValidationConfig::from_setting(None).unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Allow);

        let config = ValidationConfig::from_setting(Some("")).unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Allow);

        let config = ValidationConfig::from_setting(Some("Reject")).unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Reject);

        let config = ValidationConfig::from_setting(Some(" allow ")).unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Allow);
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        let err = ValidationConfig::from_setting(Some("strict")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidUnknownFieldPolicy("strict".to_string()));
        assert!(err.to_string().contains("'strict'"));
    }
}
