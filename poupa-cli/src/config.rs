//! `~/.poupa/config.toml`: tuning for the mentor call and the display.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_poupa_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub insight: InsightSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightSection {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insight: InsightSection {
                model: "gemini-3-flash-preview".to_string(),
                temperature: 0.7,
                top_p: 0.95,
            },
            display: DisplaySection {
                currency_symbol: "R$".to_string(),
            },
        }
    }
}

impl Config {
    /// Assemble the insight-call settings around a resolved credential.
    pub fn insight_config(&self, api_key: Option<String>) -> poupa_insight::InsightConfig {
        poupa_insight::InsightConfig {
            api_key,
            model: self.insight.model.clone(),
            temperature: self.insight.temperature,
            top_p: self.insight.top_p,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_poupa_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
