use crate::error::{FetchError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional defaults read from `~/.config/ghfetch/settings.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub git: Option<String>,
}

pub fn settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("ghfetch").join("settings.json"))
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let invalid = |message: String| FetchError::Settings {
        path: path.to_path_buf(),
        message,
    };

    let text = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let raw: Value = serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))?;
    if !raw.is_object() {
        return Err(invalid("expected a JSON object".to_string()));
    }
    serde_json::from_value(raw).map_err(|e| invalid(e.to_string()))
}
