use std::{env, fs, path::Path, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::messages::Messages;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// `key:value` message file used to translate menu texts.
    #[serde(default)]
    pub messages: Option<PathBuf>,

    /// Directory whose two-letter sub-directories are the installed languages.
    #[serde(default)]
    pub resources: Option<PathBuf>,

    #[serde(default)]
    pub options: Options,
}

/// Browser options that menu actions change and persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub homepage_url: Option<String>,
    pub language: String,
    /// Base URL of the bundled documentation.
    pub docs_url: String,
    pub window_stagger: bool,
    pub window_size_clone: bool,
    /// Screen size the default window geometry was captured on; zero when
    /// no default has been saved.
    pub window_screen_width: i32,
    pub window_screen_height: i32,
    pub window_x: i32,
    pub window_y: i32,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            homepage_url: None,
            language: "en".to_string(),
            docs_url: "file:///usr/share/doc/menutree".to_string(),
            window_stagger: true,
            window_size_clone: true,
            window_screen_width: 0,
            window_screen_height: 0,
            window_x: 0,
            window_y: 0,
            window_width: 0,
            window_height: 0,
        }
    }
}

pub fn load_optional() -> Result<Option<Config>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(cfg))
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("MENUTREE_CONFIG") {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("menutree.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("menutree").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("menutree").join("config.json"));
    }

    None
}

/// Loads the configured message file, or an empty table when none is set.
pub fn load_messages(config: Option<&Config>) -> Result<Messages> {
    match config.and_then(|c| c.messages.as_deref()) {
        Some(path) => Messages::load(path),
        None => Ok(Messages::new()),
    }
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let Some(path) = resolve_config_path() else {
        return Err(anyhow!(
            "No config path available (set MENUTREE_CONFIG or ensure APPDATA/HOME is present)"
        ));
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    if !path.exists() {
        let template = serde_json::json!({
            "messages": null,
            "resources": null,
            "options": Options::default(),
        });
        let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
        s.push('\n');
        fs::write(&path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(path)
}

pub fn save_options(options: &Options) -> Result<PathBuf> {
    let Some(path) = resolve_config_path() else {
        return Err(anyhow!(
            "No config path available (set MENUTREE_CONFIG or ensure APPDATA/HOME is present)"
        ));
    };
    save_options_to(&path, options)?;
    Ok(path)
}

/// Replaces the `options` key of the config at `path`, keeping everything else.
pub fn save_options_to(path: &Path, options: &Options) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    let mut root = read_json_or_empty_object(path)?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| anyhow!("config root must be a JSON object"))?;

    obj.insert(
        "options".to_string(),
        serde_json::to_value(options).context("serialize options")?,
    );

    let mut s = serde_json::to_string_pretty(&root).context("serialize config")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "saved options");
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
