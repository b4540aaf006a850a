//! # Staff Module
//!
//! Validation for the staff login form. Authentication itself happens
//! elsewhere; this module only checks the shape of the credentials.

pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::StaffLoginInput;
pub use validators::{validate_staff_login, validate_staff_login_with, StaffLoginValidator};
