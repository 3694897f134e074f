use std::path::Path;

use crate::error::AppError;
use crate::models::settings::AppSettings;

/// Read settings from a JSON file. Returns defaults if the file does not exist.
pub fn get_settings(path: &Path) -> crate::error::Result<AppSettings> {
    if !path.exists() {
        log::debug!("No settings file at {}, using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Storage(format!("Invalid settings in {}: {}", path.display(), e)))
}

/// Write settings as pretty JSON, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &AppSettings) -> crate::error::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::Storage(format!("{}: {}", parent.display(), e)))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
