//! Lead domain types.
//!
//! A lead is a contact-form submission from a prospective customer. The only
//! mutation the admin console performs on a lead is moving it through the
//! [`LeadStatus`] funnel; any status may transition to any other.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default `source` tag applied when a submission does not declare one.
pub const DEFAULT_SOURCE: &str = "Contact Form";

/// Funnel status of a lead. Stored as text; unknown values are rejected
/// at the API boundary and by a CHECK constraint in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Closed,
}

impl LeadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Closed => "closed",
        }
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "converted" => Ok(LeadStatus::Converted),
            "closed" => Ok(LeadStatus::Closed),
            other => Err(CoreError::Validation(format!(
                "'{other}' is not a valid lead status"
            ))),
        }
    }
}

impl TryFrom<String> for LeadStatus {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
