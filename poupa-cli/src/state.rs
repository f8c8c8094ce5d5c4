//! Durable state: the whole-profile JSON blob and the mentor-tip cache.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use poupa_core::UserData;

pub fn poupa_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("POUPA_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".poupa"))
}

pub fn ensure_poupa_home() -> Result<PathBuf> {
    let dir = poupa_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn data_path() -> Result<PathBuf> {
    Ok(ensure_poupa_home()?.join("data.json"))
}

pub fn insight_path() -> Result<PathBuf> {
    Ok(ensure_poupa_home()?.join("insight.txt"))
}

/// A missing file means no prior user: the caller gets the pristine
/// not-onboarded state and shows onboarding.
pub fn load_user_data() -> Result<UserData> {
    read_user_data(&data_path()?)
}

pub fn read_user_data(path: &Path) -> Result<UserData> {
    if !path.exists() {
        return Ok(UserData::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(serde_json::from_str(&s)?)
}

/// Whole-blob overwrite, mirrored after every successful mutation.
pub fn save_user_data(data: &UserData) -> Result<()> {
    write_user_data(&data_path()?, data)
}

pub fn write_user_data(path: &Path, data: &UserData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Display-only cache of the last mentor text to resolve.
pub fn write_insight_cache(text: &str) -> Result<()> {
    let p = insight_path()?;
    fs::write(&p, text).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn read_insight_cache() -> Result<Option<String>> {
    let p = insight_path()?;
    if !p.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(Some(s))
}

pub fn clear_insight_cache() -> Result<()> {
    let p = insight_path()?;
    if p.exists() {
        fs::remove_file(&p).with_context(|| format!("remove {}", p.display()))?;
    }
    Ok(())
}

/// Append-only daily log of generated tips, kept beside the cache.
pub fn append_mentor_log(text: &str) -> Result<()> {
    use std::io::Write;

    let dir = ensure_poupa_home()?.join("mentor");
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let today = chrono::Utc::now().format("%Y-%m-%d");
    let path = dir.join(format!("{today}.md"));
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    writeln!(
        f,
        "- {} {}",
        chrono::Utc::now().to_rfc3339(),
        text.replace('\n', " ")
    )?;
    Ok(())
}
