use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use irah_core::store_keys;
use irah_scoring::config::ScoringConfig;
use irah_storage::s3::DEFAULT_MAX_ATTEMPTS;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrahConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub store: StoreConfig,
    /// Breakpoints and tier thresholds. Omitted = the calibrated defaults.
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Name recorded as the actor on audit events. Empty = the OS user.
    #[serde(default)]
    pub operator: String,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    Local {
        path: PathBuf,
    },
    S3 {
        bucket: String,
        region: String,
        #[serde(default = "default_s3_key")]
        key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        profile: Option<String>,
        /// Conditional-write attempts per append before giving up.
        #[serde(default = "default_s3_max_attempts")]
        max_attempts: u32,
    },
    Memory,
}

fn default_s3_key() -> String {
    store_keys::RECORDS.to_string()
}

fn default_s3_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("irah"))
}

/// Default location of the config file.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Default location of the local evaluation history.
pub fn default_records_path() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("irah").join(store_keys::RECORDS_FILE))
}

impl IrahConfig {
    /// A fresh config storing records on local disk.
    pub fn local(path: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            store: StoreConfig::Local { path },
            scoring: ScoringConfig::default(),
            operator: String::new(),
            created_at: jiff::Timestamp::now(),
        }
    }

    /// The configured operator, falling back to the OS user name.
    pub fn actor(&self) -> String {
        if !self.operator.trim().is_empty() {
            return self.operator.trim().to_string();
        }
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

pub fn load_config(path: &Path) -> eyre::Result<IrahConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(on_disk_version)
        .map_err(|_| eyre::eyre!("config_version {on_disk_version} is out of range"))?;

    let migrated = migrate(json, on_disk_version)?;
    let config: IrahConfig = serde_json::from_value(migrated)?;
    config
        .scoring
        .validate()
        .map_err(|e| eyre::eyre!("config at {}: {e}", path.display()))?;
    Ok(config)
}

/// Load the config at `path`, or fall back to a local-store config when no
/// file exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<IrahConfig> {
    if path.exists() {
        return load_config(path);
    }
    tracing::info!(path = %path.display(), "no config file, using local defaults");
    Ok(IrahConfig::local(default_records_path()?))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update irah."
        ));
    }

    // v0 → v1: pre-versioned configs held a bare `records_path` instead of a
    // tagged `store`, and had no `created_at`.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        if !obj.contains_key("store") {
            let path = match obj.remove("records_path") {
                Some(serde_json::Value::String(p)) => p,
                _ => default_records_path()?.display().to_string(),
            };
            obj.insert(
                "store".to_string(),
                serde_json::json!({ "type": "local", "path": path }),
            );
        }
        obj.entry("created_at")
            .or_insert_with(|| serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (records_path → store)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &IrahConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre::eyre!("config path {} has no file name", path.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = dir.join(tmp_name);
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
