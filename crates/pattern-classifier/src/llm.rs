//! Classification through an OpenAI-compatible chat completion endpoint.

use crate::contract::{parse_classification_response, ClassificationRequest};
use crate::PatternClassifier;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use synth_core::{ColumnProfile, PatternAnnotation};
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = r#"You are a data analyst. You receive the statistical profile of one column of a fixed-width legacy data file and infer the column's underlying pattern.

Reply with a single JSON object with the keys "column_name", "pattern" and "reasoning".

"pattern" must be one of: "SEQUENCE" (progressive identifiers), "ENUM" (a few repeated choices), "RANDOM_STRING", "DATE", "NUMBER", "BOOLEAN", "UNSTRUCTURED_TEXT", "UNCLASSIFIED".
"reasoning" is one concise sentence.

When "pattern" is "NUMBER" also include "generation_guidelines": {"number_type": "DECIMAL" | "INTEGER" | "STRING_OF_DIGITS", "min_value": <number>, "max_value": <number>, "decimal_places": <integer, required for DECIMAL>}.
When "pattern" is "DATE" also include "generation_guidelines": {"date_format": <strftime format such as "%m%d%Y">, "min_date": <date in date_format>, "max_date": <date in date_format>}.

Example:
{"column_name": "product_type", "pattern": "ENUM", "reasoning": "Very low cardinality with a clear distribution over a few values."}"#;

/// Connection settings for a chat completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierEndpoint {
    /// Base URL, e.g. `http://localhost:11434/v1`
    pub api_url: String,
    /// Bearer token; empty to send none
    #[serde(default)]
    pub api_key: String,
    pub model_name: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Extract the first choice's message content from a completion body.
fn completion_content(body: &str) -> Result<String> {
    let completion: ChatCompletionResponse =
        serde_json::from_str(body).context("malformed completion response")?;
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| anyhow!("completion response missing choices"))
}

/// Classifier backed by a language model.
///
/// Transport errors, HTTP errors and unparseable replies all yield
/// `UNCLASSIFIED` / `"classification failed"`.
pub struct LlmClassifier {
    endpoint: ClassifierEndpoint,
    client: Client,
}

impl LlmClassifier {
    /// Build a classifier for the given endpoint.
    pub fn new(endpoint: ClassifierEndpoint) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Build a classifier with a custom request timeout.
    pub fn with_timeout(endpoint: ClassifierEndpoint, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            endpoint,
            client,
        })
    }

    fn invoke_model(&self, payload: &str) -> Result<String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !self.endpoint.api_key.is_empty() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", self.endpoint.api_key))
                    .context("invalid api key header")?,
            );
        }

        let url = format!(
            "{}/chat/completions",
            self.endpoint.api_url.trim_end_matches('/')
        );
        let body = json!({
            "model": self.endpoint.model_name,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": payload}
            ]
        });

        let text = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .context("classifier call failed")?
            .error_for_status()
            .context("classifier http error")?
            .text()
            .context("failed to read classifier response")?;

        let content = completion_content(&text)?;
        debug!(chars = content.len(), "classifier response received");
        Ok(content)
    }
}

impl PatternClassifier for LlmClassifier {
    fn classify(&self, column_name: &str, profile: &ColumnProfile) -> PatternAnnotation {
        let request = ClassificationRequest::new(column_name, profile);
        let payload = match serde_json::to_string_pretty(&request) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode classification request for '{column_name}': {e}");
                return PatternAnnotation::classification_failed(column_name);
            }
        };

        match self.invoke_model(&payload) {
            Ok(raw) => parse_classification_response(column_name, &raw),
            Err(e) => {
                warn!(
                    model = %self.endpoint.model_name,
                    "Classification of '{column_name}' failed: {e:#}"
                );
                PatternAnnotation::classification_failed(column_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::Pattern;

    #[test]
    fn test_completion_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "{\"pattern\": \"ENUM\"}"}}]}"#;
        assert_eq!(completion_content(body).unwrap(), r#"{"pattern": "ENUM"}"#);
    }

    #[test]
    fn test_completion_content_errors() {
        assert!(completion_content(r#"{"choices": []}"#).is_err());
        assert!(completion_content("<html>bad gateway</html>").is_err());
    }

    #[test]
    fn test_unreachable_service_degrades() {
        let classifier = LlmClassifier::with_timeout(
            ClassifierEndpoint {
                api_url: "http://127.0.0.1:1/v1".to_string(),
                api_key: String::new(),
                model_name: "test".to_string(),
            },
            Duration::from_secs(2),
        )
        .unwrap();

        let annotation = classifier.classify("code", &ColumnProfile::default());
        assert_eq!(annotation.pattern, Pattern::Unclassified);
        assert_eq!(annotation.reasoning, PatternAnnotation::CLASSIFICATION_FAILED);
        assert_eq!(annotation.column_name, "code");
    }
}
