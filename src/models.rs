use serde::{Deserialize, Serialize};

/// Fallback shown in the issue body when an optional field is absent.
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// One tracked license, as it appears in the `licenses` sequence of the
/// YAML inventory file. Field names in the file are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub product_name: String,
    pub vendor: String,
    #[serde(default)]
    pub department: Option<String>,
    /// Expiry date as `YYYY-MM-DD`; parsed by the filter, not at load time.
    pub expiry_date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl License {
    pub fn department_or_placeholder(&self) -> &str {
        self.department.as_deref().unwrap_or(FIELD_PLACEHOLDER)
    }

    pub fn notes_or_placeholder(&self) -> &str {
        self.notes.as_deref().unwrap_or(FIELD_PLACEHOLDER)
    }
}

/// A license that falls inside the expiry window, annotated with the exact
/// number of days remaining (0 for a license expiring today).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringLicense {
    #[serde(flatten)]
    pub license: License,
    pub days_until_expiry: i64,
}
