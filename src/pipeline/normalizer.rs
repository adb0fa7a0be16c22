use reqwest::Client;

use crate::core::error::ScanError;

/// Translate arbitrary-language text to English, best effort. Any failure
/// (transport, status, malformed payload) falls back to the original text;
/// translation is never fatal to a scan and is attempted exactly once.
pub async fn translate_to_english(client: &Client, base_url: &str, text: &str) -> String {
    match fetch_translation(client, base_url, text).await {
        Ok(translated) => translated,
        Err(err) => {
            tracing::debug!("translation failed: {err}; scoring the original text");
            text.to_string()
        }
    }
}

async fn fetch_translation(
    client: &Client,
    base_url: &str,
    text: &str,
) -> Result<String, ScanError> {
    let url = format!("{}/translate_a/single", base_url.trim_end_matches('/'));
    let resp = client
        .get(&url)
        .query(&[
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", "en"),
            ("dt", "t"),
            ("q", text),
        ])
        .send()
        .await
        .map_err(ScanError::from)?;
    if !resp.status().is_success() {
        return Err(ScanError::Http(format!(
            "translate endpoint returned {}",
            resp.status()
        )));
    }

    // gtx payload: [[["<translated>", "<source>", ...], ...], ...]
    let body: serde_json::Value = resp.json().await.map_err(ScanError::from)?;
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ScanError::Provider("malformed translation payload".into()))?;

    let mut out = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            out.push_str(part);
        }
    }
    if out.is_empty() {
        return Err(ScanError::Provider("empty translation payload".into()));
    }
    Ok(out)
}
