//! Canonical sign-up payload built from a raw form.

use crate::form::{FormField, RegistrationForm, Role};
use serde::{Deserialize, Serialize};

/// Sign-up payload in the shape the users service expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedUser {
    pub first_name: String,
    pub last_name: String,
    pub age: f64,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub profile_img: String,
    pub role: u8,
    pub company_name: String,
    pub company_email: String,
    pub company_country: String,
    pub team_register_code: String,
}

/// Normalize a form. Total: malformed input falls back to `""` or `0`.
///
/// Text fields are trimmed; the password is kept byte-for-byte.
pub fn normalize(form: &RegistrationForm) -> NormalizedUser {
    let text = |field: FormField| form.trimmed(field).to_string();

    NormalizedUser {
        first_name: text(FormField::FirstName),
        last_name: text(FormField::LastName),
        age: parse_age(form.value(FormField::Age)),
        email: text(FormField::Email),
        phone: text(FormField::Phone),
        password: form.value(FormField::Password).to_string(),
        profile_img: text(FormField::ProfileImg),
        role: form.role().code(),
        company_name: text(FormField::CompanyName),
        company_email: text(FormField::CompanyEmail),
        company_country: text(FormField::CompanyCountry),
        team_register_code: text(FormField::TeamRegisterCode),
    }
}

/// Numeric conversion of the age input. Blank, unparsable and non-finite
/// values become 0; fractions and negatives pass through.
fn parse_age(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(age) if age.is_finite() => age,
        _ => 0.0,
    }
}

impl From<&NormalizedUser> for RegistrationForm {
    fn from(user: &NormalizedUser) -> Self {
        Self {
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            email: Some(user.email.clone()),
            password: Some(user.password.clone()),
            role: Role::form_value(user.role).map(str::to_string),
            age: Some(user.age.to_string()),
            phone: Some(user.phone.clone()),
            profile_img: Some(user.profile_img.clone()),
            company_name: Some(user.company_name.clone()),
            company_email: Some(user.company_email.clone()),
            company_country: Some(user.company_country.clone()),
            team_register_code: Some(user.team_register_code.clone()),
        }
    }
}
