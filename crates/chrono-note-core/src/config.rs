//! Store Configuration

use serde::{Deserialize, Serialize};

/// Key under which the note record is persisted
pub const DEFAULT_STORAGE_KEY: &str = "chrono-notes";
/// Query parameter carrying a share payload
pub const DEFAULT_SHARE_PARAM: &str = "notes";
/// Separator between exported note blocks
pub const DEFAULT_EXPORT_DELIMITER: &str = "\n\n---\n\n";
/// Prefix of the exported file name
pub const DEFAULT_EXPORT_PREFIX: &str = "chrono-notes";

/// Names and formats the store uses when talking to the outside world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub storage_key: String,
    pub share_param: String,
    pub export_delimiter: String,
    pub export_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            share_param: DEFAULT_SHARE_PARAM.to_string(),
            export_delimiter: DEFAULT_EXPORT_DELIMITER.to_string(),
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"storage_key":"journal"}"#).unwrap();
        assert_eq!(config.storage_key, "journal");
        assert_eq!(config.share_param, DEFAULT_SHARE_PARAM);
        assert_eq!(config.export_delimiter, DEFAULT_EXPORT_DELIMITER);
    }
}
