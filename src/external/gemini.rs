use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;

use crate::error::{invalid_input_error, upstream_error, Error};

const MODEL: &str = "gemini-2.5-flash";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[tracing::instrument(skip(prompt))]
pub async fn generate(prompt: &str) -> Result<String, Error> {
    let api_base = env::var("GEMINI_API_BASE")?;
    let url = format!("{}/v1beta/models/{}:generateContent", api_base, MODEL);
    let key = env::var("GEMINI_API_KEY")?;

    let res = reqwest::Client::new()
        .post(url)
        .query(&[("key", key)])
        .json(&json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        }))
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: GenerateResponse = res.json().await?;

    let text = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text.trim().to_string())
        .ok_or_else(upstream_error)?;

    Ok(text)
}
