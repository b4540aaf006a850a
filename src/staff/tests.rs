//! Tests for staff module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::ValidationConfig;
    use serde_json::json;

    #[test]
    fn test_valid_staff_login() {
        let data = json!({ "username": "admin", "password": "123456" });

        let input = validate_staff_login(&data).expect("login should be valid");
        assert_eq!(input.username, "admin");
        assert_eq!(input.password, "123456");
    }

    #[test]
    fn test_username_too_short() {
        let data = json!({ "username": "ab", "password": "123456" });

        let result = validate_staff_login(&data).unwrap_err();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "username");
        assert_eq!(
            result.errors[0].message,
            "\"username\" length must be at least 3 characters long"
        );
    }

    #[test]
    fn test_username_too_long() {
        let data = json!({ "username": "a".repeat(51), "password": "123456" });

        let result = validate_staff_login(&data).unwrap_err();
        assert_eq!(
            result.messages(),
            vec!["\"username\" length must be less than or equal to 50 characters long"]
        );

        let data = json!({ "username": "a".repeat(50), "password": "123456" });
        assert!(validate_staff_login(&data).is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let data = json!({ "username": "admin", "password": "123" });

        let result = validate_staff_login(&data).unwrap_err();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "password");
        assert_eq!(
            result.errors[0].message,
            "\"password\" length must be at least 6 characters long"
        );
    }

    #[test]
    fn test_password_has_no_maximum() {
        let data = json!({ "username": "admin", "password": "x".repeat(500) });
        assert!(validate_staff_login(&data).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let data = json!({ "username": "", "password": 123456 });

        let result = validate_staff_login(&data).unwrap_err();
        assert_eq!(
            result.messages(),
            vec![
                "\"username\" is not allowed to be empty",
                "\"password\" must be a string"
            ]
        );

        let result = validate_staff_login(&json!({})).unwrap_err();
        assert_eq!(
            result.messages(),
            vec!["\"username\" is required", "\"password\" is required"]
        );
    }

    #[test]
    fn test_unknown_fields() {
        let data = json!({ "username": "admin", "password": "123456", "remember": true });

        let input = validate_staff_login(&data).unwrap();
        assert_eq!(input.extra.get("remember"), Some(&json!(true)));

        let result = validate_staff_login_with(&data, &ValidationConfig::strict()).unwrap_err();
        assert_eq!(result.messages(), vec!["\"remember\" is not allowed"]);
    }

    #[test]
    fn test_debug_masks_password() {
        let data = json!({ "username": "admin", "password": "hunter22" });
        let input = validate_staff_login(&data).unwrap();

        let printed = format!("{:?}", input);
        assert!(printed.contains("admin"));
        assert!(!printed.contains("hunter22"));
    }
}
