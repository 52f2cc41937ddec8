//! Raw registration form and role table.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Form fields as typed by the user. Every field is optional; which ones
/// are required depends on the validation phase and the chosen role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub age: Option<String>,
    pub phone: Option<String>,
    pub profile_img: Option<String>,
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub company_country: Option<String>,
    pub team_register_code: Option<String>,
}

/// Form field names, spelled the way error maps key them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    Role,
    Age,
    Phone,
    ProfileImg,
    CompanyName,
    CompanyEmail,
    CompanyCountry,
    TeamRegisterCode,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Role => "role",
            FormField::Age => "age",
            FormField::Phone => "phone",
            FormField::ProfileImg => "profileImg",
            FormField::CompanyName => "companyName",
            FormField::CompanyEmail => "companyEmail",
            FormField::CompanyCountry => "companyCountry",
            FormField::TeamRegisterCode => "teamRegisterCode",
        }
    }
}

impl RegistrationForm {
    /// Raw value of a field, `""` when absent.
    pub fn value(&self, field: FormField) -> &str {
        let value = match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Role => &self.role,
            FormField::Age => &self.age,
            FormField::Phone => &self.phone,
            FormField::ProfileImg => &self.profile_img,
            FormField::CompanyName => &self.company_name,
            FormField::CompanyEmail => &self.company_email,
            FormField::CompanyCountry => &self.company_country,
            FormField::TeamRegisterCode => &self.team_register_code,
        };
        value.as_deref().unwrap_or("")
    }

    /// Trimmed value of a field, `""` when absent.
    pub fn trimmed(&self, field: FormField) -> &str {
        self.value(field).trim()
    }

    pub fn role(&self) -> Role {
        Role::parse(self.value(FormField::Role))
    }
}

/// Account role chosen on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Director,
    Team,
    #[default]
    Member,
}

impl Role {
    /// Exact, case-sensitive match; anything unrecognized is `Member`.
    pub fn parse(value: &str) -> Self {
        match value {
            "director" => Role::Director,
            "team" => Role::Team,
            _ => Role::Member,
        }
    }

    /// Numeric code sent to the backend. Unrecognized roles share the
    /// director code.
    pub fn code(self) -> u8 {
        match self {
            Role::Director => 0,
            Role::Team => 1,
            Role::Member => 0,
        }
    }

    /// Form value for a numeric code, if the code names a role.
    pub fn form_value(code: u8) -> Option<&'static str> {
        match code {
            0 => Some("director"),
            1 => Some("team"),
            _ => None,
        }
    }
}

/// Age inputs arrive as text from a text box or as a number from a
/// numeric input.
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
