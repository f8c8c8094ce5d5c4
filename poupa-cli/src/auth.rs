//! Credential store for the mentor call.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};

use crate::state::ensure_poupa_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthState {
    pub gemini_api_key: Option<String>,
}

fn auth_path() -> Result<std::path::PathBuf> {
    Ok(ensure_poupa_home()?.join("auth.json"))
}

pub fn load_auth() -> Result<AuthState> {
    let p = auth_path()?;
    if !p.exists() {
        return Ok(AuthState::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn save_auth(auth: &AuthState) -> Result<()> {
    let p = auth_path()?;
    let s = serde_json::to_string_pretty(auth)?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

fn prompt_secret(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

pub fn paste_gemini_key() -> Result<()> {
    let mut auth = load_auth()?;
    let key = prompt_secret("Paste Gemini API key (starts with AIza)")?;
    if key.is_empty() {
        bail!("no key entered");
    }
    if !key.starts_with("AIza") {
        bail!("key didn't look like a Gemini API key (expected prefix AIza)");
    }
    auth.gemini_api_key = Some(key);
    save_auth(&auth)?;
    println!("Saved Gemini API key to {}", auth_path()?.display());
    Ok(())
}

/// Resolution order: auth.json, then the GEMINI_API_KEY environment
/// variable. Absence is an expected state (placeholder tips), not an error.
pub fn resolve_gemini_key() -> Result<Option<String>> {
    let auth = load_auth()?;
    if let Some(k) = auth.gemini_api_key.filter(|k| !k.trim().is_empty()) {
        return Ok(Some(k));
    }
    Ok(std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty()))
}
