use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::License;

/// Top-level shape of the inventory file. Only the `licenses` key is
/// recognised; anything else in the document is ignored.
#[derive(Debug, Deserialize)]
struct Inventory {
    #[serde(default)]
    licenses: Vec<License>,
}

/// Load the ordered license list from a YAML inventory file.
///
/// An absent `licenses` key yields an empty list. A missing file or a
/// document that does not parse is an error for the caller to surface.
pub fn load_licenses(path: &Path) -> Result<Vec<License>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read license file {}", path.display()))?;

    let inventory: Inventory = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse license file {}", path.display()))?;

    Ok(inventory.licenses)
}
