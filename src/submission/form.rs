use serde::Deserialize;
use serde_json::Value;

use crate::models::NewSubmission;

/// Contact form as posted by the site. Every field may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Fields are matched by name only, so the body must be an object.
    pub fn from_value(value: Value) -> Result<Self, String> {
        if !value.is_object() {
            return Err("Form body must be an object".to_string());
        }
        serde_json::from_value(value).map_err(|e| format!("Invalid form fields: {e}"))
    }

    /// Checks required fields. On failure returns the wire names of the
    /// missing ones, in form order.
    pub fn validate(self) -> Result<NewSubmission, Vec<&'static str>> {
        let mut missing = Vec::new();

        let first_name = required(self.first_name, "firstName", &mut missing);
        let last_name = required(self.last_name, "lastName", &mut missing);
        let email = required(self.email, "email", &mut missing);
        let phone = required(self.phone, "phone", &mut missing);
        let message = required(self.message, "message", &mut missing);

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(NewSubmission {
            first_name,
            last_name,
            email,
            company: self.company.filter(|c| !c.is_empty()),
            phone,
            message,
        })
    }
}

fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
