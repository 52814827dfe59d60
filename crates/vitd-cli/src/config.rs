use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vitd_scoring::SchemeId;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitdConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Scheme new patients are scored under. Added in v1.
    pub active_scheme: SchemeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camp_name: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl Default for VitdConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            active_scheme: SchemeId::default(),
            camp_name: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("vitd"))
}

/// Default location of `config.json`.
pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, falling back to defaults when it does not
/// exist yet.
pub fn load_config(path: &Path) -> eyre::Result<VitdConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(VitdConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("config_version {value} is not a supported version"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: VitdConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update vitd."
        ));
    }

    // v0 → v1: scheme selection became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("active_scheme")
            .or_insert(serde_json::Value::String(SchemeId::default().to_string()));
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added active_scheme)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &VitdConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// The scheme to score under: an explicit tag wins over the config.
pub fn active_scheme(config: &VitdConfig, override_tag: Option<&str>) -> eyre::Result<SchemeId> {
    match override_tag {
        Some(tag) => Ok(tag.parse()?),
        None => Ok(config.active_scheme),
    }
}
