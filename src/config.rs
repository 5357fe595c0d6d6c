use crate::error::{Result, WorthItError};
use crate::types::config::WorthItConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "worthit.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/worthit/config.toml";

/// Merged configuration plus the files it was built from, in merge order.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: WorthItConfig,
    pub layers: Vec<PathBuf>,
}

/// Loads the global, working-directory and explicit config layers, in that
/// order, and validates the merged result.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = Vec::new();
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, &mut layers, path)?;
    }
    merge_file_if_exists(&mut merged, &mut layers, &root.join(DEFAULT_CONFIG_FILE))?;
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(WorthItError::ConfigNotFound(path.display().to_string()));
        }
        merge_file_if_exists(&mut merged, &mut layers, path)?;
    }

    let config: WorthItConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| WorthItError::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(LoadedConfig { config, layers })
}

fn merge_file_if_exists(merged: &mut Value, layers: &mut Vec<PathBuf>, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    layers.push(path.to_path_buf());
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| WorthItError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
