//! Contact form input and the timestamped record that gets delivered.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DeliveryError;

/// Message shown when a required field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Raw form input. `instagram` is optional and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub instagram: String,
    pub country: String,
}

impl ContactForm {
    /// Names of required fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.country.trim().is_empty() {
            missing.push("country");
        }
        missing
    }

    /// Check that name, email, and country are present.
    pub fn validate(&self) -> Result<(), DeliveryError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!("form missing fields: {}", missing.join(", "));
            Err(DeliveryError::Validation(REQUIRED_FIELDS_MESSAGE.into()))
        }
    }

    /// Stamp the form with the submission time.
    pub fn into_record(self, at: DateTime<Utc>) -> ClientData {
        ClientData {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            instagram: self.instagram.trim().to_string(),
            country: self.country.trim().to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// A validated, timestamped waitlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    pub name: String,
    pub email: String,
    pub instagram: String,
    pub country: String,
    /// RFC 3339 UTC with millisecond precision.
    pub timestamp: String,
}
