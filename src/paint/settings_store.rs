use crate::paint::settings::PaintSettings;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

pub const PAINT_SETTINGS_FILE_NAME: &str = "paint_settings.json";

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(PAINT_SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

/// Settings next to the executable, or defaults when no file exists.
pub fn load() -> Result<PaintSettings> {
    let path = resolve_settings_path()?;
    Ok(load_from_path(&path)?.unwrap_or_default())
}

pub fn save(settings: &PaintSettings) -> Result<PathBuf> {
    let path = resolve_settings_path()?;
    save_to_path(&path, settings)?;
    Ok(path)
}

pub fn load_from_path(path: &Path) -> Result<Option<PaintSettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read paint settings file {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(Some(PaintSettings::default()));
    }

    let mut loaded: PaintSettings = serde_json::from_str(&content)
        .with_context(|| format!("deserialize paint settings file {}", path.display()))?;
    if loaded.sanitize() {
        tracing::warn!(path = %path.display(), "paint settings contained unusable values");
    }
    Ok(Some(loaded))
}

pub fn save_to_path(path: &Path, settings: &PaintSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create paint settings parent folder {}", parent.display()))?;
    }

    let mut sanitized = settings.clone();
    sanitized.sanitize();
    let json =
        serde_json::to_string_pretty(&sanitized).context("serialize paint settings file")?;
    std::fs::write(path, json)
        .with_context(|| format!("write paint settings file {}", path.display()))
}
