//! Field rules and validators
//!
//! Re-exports regform-validators. Validators are pure: they take field text
//! and return `Ok(())` or a [`FieldError`] carrying the user-facing message.

pub use regform_validators::*;
