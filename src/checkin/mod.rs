//! # Check-in Module
//!
//! Validation for the front-desk check-in form (name, phone, appointment time).

pub mod models;
pub mod validators;


pub use models::CheckInInput;
pub use validators::{validate_check_in, validate_check_in_with, CheckInValidator};
