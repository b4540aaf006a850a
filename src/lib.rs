//! Input validation for the front-desk check-in form and the staff login form.
//!
//! Record validators take an untyped JSON value and return either the typed
//! input or every field-level issue found, in field order:
//!
//! ```
//! use checkin_validation::validate_check_in;
//! use serde_json::json;
//!
//! let err = validate_check_in(&json!({ "name": "", "phone": "", "appointmentTime": "" }))
//!     .unwrap_err();
//! assert_eq!(
//!     err.messages(),
//!     vec!["Name is required", "Phone number is required", "Appointment time is required"]
//! );
//! ```

pub mod checkin;
pub mod common;
pub mod staff;

pub use checkin::{validate_check_in, validate_check_in_with, CheckInInput};
pub use common::{
    is_valid_name, is_valid_phone_number, ApiError, ValidationConfig, ValidationError,
    ValidationResult,
};
pub use staff::{validate_staff_login, validate_staff_login_with, StaffLoginInput};
