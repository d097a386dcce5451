use directories::ProjectDirs;
use std::path::PathBuf;

use platefix_core::{Result, TriggerConfig};

pub(crate) fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "platefix")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("trigger.toml");
    Some(path)
}

/// Resolve the trigger config: an explicit file must exist, the per-user file
/// is used only if present, otherwise defaults apply.
pub(crate) fn load_trigger_config(explicit: Option<&PathBuf>) -> Result<TriggerConfig> {
    if let Some(path) = explicit {
        return TriggerConfig::load(path);
    }
    match user_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading user trigger config");
            TriggerConfig::load(&path)
        }
        _ => Ok(TriggerConfig::default()),
    }
}
