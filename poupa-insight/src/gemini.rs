//! One-shot Gemini `generateContent` call.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::InsightConfig;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Single request against the Gemini REST API. Errors bubble up to the
/// caller, which maps them onto the fixed fallback text.
pub async fn generate(config: &InsightConfig, api_key: &str, prompt: &str) -> Result<String> {
    #[derive(Serialize)]
    struct Part {
        text: String,
    }

    #[derive(Serialize)]
    struct Content {
        parts: Vec<Part>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct GenerationConfig {
        temperature: f32,
        top_p: f32,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Req {
        contents: Vec<Content>,
        generation_config: GenerationConfig,
    }

    let body = Req {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: config.temperature,
            top_p: config.top_p,
        },
    };

    let url = format!("{API_BASE}/{}:generateContent", config.model);
    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .await
        .context("gemini request")?;

    let status = resp.status();
    let text = resp.text().await.context("read gemini response")?;
    if !status.is_success() {
        bail!("gemini error: {status} {text}");
    }

    extract_text(&text)
}

/// Pull the completion text out of a `generateContent` response body,
/// concatenating the text parts of the first candidate.
pub(crate) fn extract_text(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    struct Resp {
        candidates: Option<Vec<Candidate>>,
    }

    #[derive(Deserialize)]
    struct Candidate {
        content: Option<Content>,
    }

    #[derive(Deserialize)]
    struct Content {
        parts: Option<Vec<Part>>,
    }

    #[derive(Deserialize)]
    struct Part {
        text: Option<String>,
    }

    let out: Resp = serde_json::from_str(body).context("parse gemini response")?;

    let mut s = String::new();
    if let Some(candidate) = out.candidates.unwrap_or_default().into_iter().next() {
        for part in candidate.content.and_then(|c| c.parts).unwrap_or_default() {
            if let Some(t) = part.text {
                s.push_str(&t);
            }
        }
    }
    Ok(s.trim().to_string())
}
