//! User registration flow: two-phase validation, payload normalization and
//! sign-up submission.
//!
//! Callers validate with [`validate_primary`] and [`validate_secondary`]
//! (or [`validate_all`]) and only submit through [`RegistrationService`]
//! once both pass.

mod error;
mod form;
mod normalizer;
mod service;
mod validator;

pub use error::SubmissionError;
pub use form::{FormField, RegistrationForm, Role};
pub use normalizer::{normalize, NormalizedUser};
pub use service::{RegistrationService, SignUpChannel, FALLBACK_MESSAGE};
pub use validator::{
    is_valid_email, validate_all, validate_primary, validate_secondary, ValidationResult,
    INVALID_COMPANY_EMAIL, INVALID_EMAIL, PASSWORD_MISMATCH,
};
