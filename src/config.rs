use std::{env, fs, path::Path, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::showcase::{SettingDescriptor, Theme};
use crate::toolbar::common;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    /// Theme titles offered by the theme picker. Absent means "use the
    /// built-in defaults"; an explicit empty list is kept as-is.
    #[serde(default)]
    pub themes: Option<Vec<Theme>>,

    /// Settings offered by the settings picker.
    #[serde(default)]
    pub settings: Option<Vec<SettingDescriptor>>,

    /// Persisted direction flags, written back by the native platform when
    /// the RTL checkbox is toggled.
    #[serde(default)]
    pub force_rtl: Option<bool>,

    #[serde(default)]
    pub allow_rtl: Option<bool>,
}

/// Showcase data with defaults applied, ready to hand to the toolbar model.
#[derive(Debug, Clone)]
pub struct ResolvedShowcase {
    pub themes: Option<Vec<Theme>>,
    pub settings: Option<Vec<SettingDescriptor>>,
}

pub fn load_optional() -> Result<Option<Config>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    load_at(&path)
}

pub fn load_at(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(cfg))
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("SHOWCASECTL_CONFIG") {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("showcasectl.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("showcasectl").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("showcasectl")
                .join("config.json"),
        );
    }

    None
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let Some(path) = resolve_config_path() else {
        return Err(anyhow!(
            "No config path available (set SHOWCASECTL_CONFIG or ensure APPDATA/HOME is present)"
        ));
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    if !path.exists() {
        let template = serde_json::json!({
            "themes": ["Light", "Dark"],
            "settings": [],
            "force_rtl": false
        });
        let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
        s.push('\n');
        fs::write(&path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(path)
}

/// Writes both direction flags back into the config file, preserving every
/// other key.
pub fn patch_direction(path: &Path, forced: bool, allowed: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
    }

    let mut root = read_json_or_empty_object(path)?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| anyhow!("config root must be a JSON object"))?;

    obj.insert("force_rtl".to_string(), Value::Bool(forced));
    obj.insert("allow_rtl".to_string(), Value::Bool(allowed));

    let mut s = serde_json::to_string_pretty(&root).context("serialize config")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn read_json_or_empty_object(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(Default::default()));
    }

    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let v: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(v)
}

pub fn resolve(config: Option<&Config>) -> ResolvedShowcase {
    let Some(cfg) = config else {
        return ResolvedShowcase {
            themes: Some(common::default_themes()),
            settings: Some(common::default_settings()),
        };
    };

    ResolvedShowcase {
        themes: cfg
            .themes
            .clone()
            .or_else(|| Some(common::default_themes())),
        settings: cfg
            .settings
            .clone()
            .or_else(|| Some(common::default_settings())),
    }
}
