//! Language-model collaborator client.
//!
//! Two request shapes: enhancing a task description from its title, and
//! suggesting a priority order for the whole board. Both go to a
//! `generateContent`-style REST endpoint and treat the model as a black box
//! from text to text.

use serde::Deserialize;
use serde_json::json;

use crate::task::Task;

const GENERATE_CONTENT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Errors from the language-model collaborator.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("AI request failed: {0}")]
    Http(String),

    #[error("AI returned an unusable response: {0}")]
    Malformed(String),

    #[error("AI features are disabled: no API key configured")]
    Disabled,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the language-model endpoint.
#[derive(Clone)]
pub struct AiAssistant {
    client: reqwest::Client,
    model: String,
    api_key: String,
}

impl AiAssistant {
    #[must_use]
    pub fn new(model: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            model,
            api_key,
        }
    }

    /// Whether AI-backed actions can run at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(&self, prompt: String) -> Result<String, AiError> {
        if !self.is_enabled() {
            return Err(AiError::Disabled);
        }

        let url = format!("{GENERATE_CONTENT_BASE}/{}:generateContent", self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Http(format!("model request failed ({status}): {text}")));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AiError::Malformed(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        Ok(text)
    }

    /// Ask the model for a short task description based on the title.
    ///
    /// A successful call that produces no text yields an empty string; the
    /// caller treats that as "nothing to fill in", not an error.
    pub async fn enhance_description(&self, title: &str) -> Result<String, AiError> {
        let prompt = format!(
            "Write a short, professional, action-oriented description \
             (max 2 sentences) for a task titled: \"{title}\""
        );
        let text = self.generate(prompt).await?;
        Ok(text.trim().to_string())
    }

    /// Ask the model for a suggested priority order over the whole board.
    ///
    /// The model sees the ordered id/title/description triples and must
    /// answer with a JSON array of id strings. An unparseable answer is
    /// [`AiError::Malformed`]; the caller falls back to the current order.
    pub async fn suggest_order(&self, tasks: &[Task]) -> Result<Vec<String>, AiError> {
        let triples: Vec<serde_json::Value> = tasks
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "title": t.title,
                    "description": t.description,
                })
            })
            .collect();

        let prompt = format!(
            "You are organizing a personal task board. Given this JSON list of \
             tasks, decide the most sensible priority order (most important \
             first). Respond with ONLY a JSON array of the task id strings in \
             that order, nothing else.\n\nTasks:\n{}",
            serde_json::to_string_pretty(&triples).unwrap_or_default()
        );

        let text = self.generate(prompt).await?;
        parse_order_response(&text)
    }
}

/// Extract a JSON array of id strings from model output.
///
/// Models wrap answers in markdown fences or prose often enough that we
/// tolerate anything around the outermost `[` .. `]` pair.
pub fn parse_order_response(text: &str) -> Result<Vec<String>, AiError> {
    let start = text.find('[');
    let end = text.rfind(']');

    let json_slice = match (start, end) {
        (Some(s), Some(e)) if s < e => &text[s..=e],
        _ => {
            return Err(AiError::Malformed(format!(
                "no JSON array in model output: {text:?}"
            )))
        }
    };

    serde_json::from_str::<Vec<String>>(json_slice)
        .map_err(|e| AiError::Malformed(format!("bad id array: {e}")))
}
