//! Google Gemini streaming provider (`streamGenerateContent` over SSE).

use std::io::{BufRead, BufReader};
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ChunkStream, FeedbackProvider};
use crate::config::GeminiConfig;
use crate::errors::{AppError, AppResult};

/// Timeout for establishing a connection. The response itself has none:
/// the stream lasts as long as the service keeps sending.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Fails with `FeedbackNotConfigured` when no API key is available.
    pub fn from_config(cfg: &GeminiConfig) -> AppResult<Self> {
        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AppError::FeedbackNotConfigured)?;

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AppError::FeedbackRequest(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: cfg.model.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        )
    }

    fn build_request_body(prompt: &str) -> Value {
        serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [ { "text": prompt } ]
                }
            ]
        })
    }
}

impl FeedbackProvider for GeminiProvider {
    fn stream(&self, prompt: &str) -> AppResult<ChunkStream> {
        let client = self.client.clone();
        let url = self.endpoint();
        let api_key = self.api_key.clone();
        let body = Self::build_request_body(prompt);

        debug!(model = %self.model, "requesting streamed feedback");

        Ok(ChunkStream::spawn(move |tx| {
            let response = client
                .post(&url)
                .header("x-goog-api-key", api_key)
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .map_err(|e| AppError::FeedbackRequest(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response
                    .text()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(AppError::FeedbackHttp {
                    status: status.as_u16(),
                    body: body_text,
                });
            }

            let reader = BufReader::new(response);
            for line in reader.lines() {
                let line = line.map_err(|e| AppError::FeedbackRequest(e.to_string()))?;
                if let Some(text) = parse_sse_line(&line)?
                    && tx.send(Ok(text)).is_err()
                {
                    warn!("feedback sink went away, dropping the rest of the stream");
                    break;
                }
            }

            Ok(())
        }))
    }
}

/// Decode one SSE line. Only `data:` lines carry payload; everything else
/// (comments, blank separators, `event:` fields) yields `None`.
pub fn parse_sse_line(line: &str) -> AppResult<Option<String>> {
    let Some(data) = line.trim().strip_prefix("data:") else {
        return Ok(None);
    };

    let data = data.trim();
    if data.is_empty() || data == "[DONE]" {
        return Ok(None);
    }

    let json: Value =
        serde_json::from_str(data).map_err(|e| AppError::FeedbackParse(e.to_string()))?;

    if let Some(err) = json.get("error") {
        let message = err
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        return Err(AppError::FeedbackRequest(message.to_string()));
    }

    Ok(extract_chunk_text(&json))
}

/// Concatenate `candidates[0].content.parts[*].text`; `None` when the chunk
/// carries no text (e.g. a final chunk with only usage metadata).
pub fn extract_chunk_text(json: &Value) -> Option<String> {
    let parts = json
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|cand| cand.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|p| p.as_array())?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}
