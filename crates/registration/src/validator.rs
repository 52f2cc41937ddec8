//! Two-phase registration form validation.
//!
//! Validation never fails; problems are reported per field in a
//! [`ValidationResult`] for the caller to render.

use crate::form::{FormField, RegistrationForm, Role};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const PRIMARY_REQUIRED: [FormField; 5] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Email,
    FormField::Password,
    FormField::Role,
];

const DIRECTOR_REQUIRED: [FormField; 3] = [
    FormField::CompanyName,
    FormField::CompanyEmail,
    FormField::CompanyCountry,
];

const TEAM_REQUIRED: [FormField; 1] = [FormField::TeamRegisterCode];

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const INVALID_COMPANY_EMAIL: &str = "Please enter a valid company email address!.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Outcome of one validation phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Field name to message. Empty exactly when `valid`.
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

fn required_message(field: FormField) -> String {
    format!("Field {} is required.", field.name())
}

fn check_required(
    form: &RegistrationForm,
    fields: &[FormField],
    errors: &mut BTreeMap<String, String>,
) {
    for &field in fields {
        if form.trimmed(field).is_empty() {
            errors.insert(field.name().to_string(), required_message(field));
        }
    }
}

/// Phase 1: identity fields, email format, password confirmation.
pub fn validate_primary(
    form: &RegistrationForm,
    confirm_password: Option<&str>,
) -> ValidationResult {
    let mut errors = BTreeMap::new();
    check_required(form, &PRIMARY_REQUIRED, &mut errors);

    let email = form.value(FormField::Email);
    if !email.is_empty() && !is_valid_email(email) {
        errors.insert(FormField::Email.name().to_string(), INVALID_EMAIL.to_string());
    }

    if form.value(FormField::Password) != confirm_password.unwrap_or("") {
        errors.insert(
            FormField::Password.name().to_string(),
            PASSWORD_MISMATCH.to_string(),
        );
    }

    ValidationResult::from_errors(errors)
}

/// Phase 2: organizational fields required by the chosen role.
///
/// A malformed company email is reported under `email`, not
/// `companyEmail`; form renderers key on that name.
pub fn validate_secondary(form: &RegistrationForm) -> ValidationResult {
    let mut errors = BTreeMap::new();
    let role = form.value(FormField::Role);

    let required: &[FormField] = match role {
        "director" => &DIRECTOR_REQUIRED,
        "team" => &TEAM_REQUIRED,
        _ => &[],
    };
    check_required(form, required, &mut errors);

    let company_email = form.value(FormField::CompanyEmail);
    if Role::parse(role) == Role::Director
        && !company_email.is_empty()
        && !is_valid_email(company_email)
    {
        errors.insert(
            FormField::Email.name().to_string(),
            INVALID_COMPANY_EMAIL.to_string(),
        );
    }

    ValidationResult::from_errors(errors)
}

/// Both phases in order. Phase 2 only runs once phase 1 passes.
pub fn validate_all(
    form: &RegistrationForm,
    confirm_password: Option<&str>,
) -> ValidationResult {
    let primary = validate_primary(form, confirm_password);
    if !primary.valid {
        return primary;
    }
    validate_secondary(form)
}
