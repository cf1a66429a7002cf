use crate::error::{HansardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PERMANENT_URL_BASE: &str =
    "http://parlinfo.aph.gov.au/parlInfo/search/display/display.w3p;query=Id:chamber/hansard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HansardConfig {
    /// Prefix of a day's permanent URL; the house letter and date follow it.
    pub permanent_url_base: String,
}

impl Default for HansardConfig {
    fn default() -> Self {
        Self {
            permanent_url_base: DEFAULT_PERMANENT_URL_BASE.to_string(),
        }
    }
}

impl HansardConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HansardError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| HansardError::Config(format!("Failed to parse {}: {e}", path.display())))
    }
}
