use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{SummarizeResponse, SummaryRecord};

const GENERIC_LOOKUP_ERROR: &str = "Falha ao buscar o resumo.";
const INCOMPLETE_RESPONSE_ERROR: &str = "A resposta do servidor estava incompleta.";
const INVALID_RESPONSE_ERROR: &str = "Resposta inválida do servidor.";

/// Optional error body returned by the Cloud Functions on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Client for the two Resumido backend endpoints: summarize (`?url=`) and
/// lookup (`?id=`). One request per call, no automatic retries.
pub struct BackendClient {
    client: Client,
    summarize_url: String,
    lookup_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            summarize_url: config.summarize_url.clone(),
            lookup_url: config.lookup_url.clone(),
        }
    }

    /// Submit an article URL for summarization. The URL travels as a
    /// percent-encoded query parameter; reqwest encodes it.
    pub async fn summarize(&self, article_url: &str) -> Result<SummarizeResponse> {
        let response = self
            .client
            .get(&self.summarize_url)
            .query(&[("url", article_url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            tracing::warn!("Summarize request failed with status {}", status);
            return Err(AppError::Transport(summarize_error_message(status, &body)));
        }

        let payload: SummarizeResponse = response
            .json()
            .await
            .map_err(|_| AppError::Payload(INVALID_RESPONSE_ERROR.to_string()))?;

        if !payload.is_complete() {
            return Err(AppError::Payload(INCOMPLETE_RESPONSE_ERROR.to_string()));
        }

        Ok(payload)
    }

    /// Resolve a persisted summary id. The record is immutable server-side,
    /// so repeated lookups of the same id return identical content.
    pub async fn lookup(&self, id: &str) -> Result<SummaryRecord> {
        let response = self
            .client
            .get(&self.lookup_url)
            .query(&[("id", id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            tracing::warn!("Lookup for id {} failed with status {}", id, status);
            return Err(AppError::Transport(lookup_error_message(status, &body)));
        }

        response
            .json()
            .await
            .map_err(|_| AppError::Payload(INVALID_RESPONSE_ERROR.to_string()))
    }
}

fn decode_error_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.is_empty())
}

/// Most specific message available: server `error` field, else status line.
fn summarize_error_message(status: StatusCode, body: &[u8]) -> String {
    let detail = decode_error_body(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("erro desconhecido")
            .to_string()
    });
    format!("Erro: {} - {}", status.as_u16(), detail)
}

fn lookup_error_message(status: StatusCode, body: &[u8]) -> String {
    decode_error_body(body)
        .unwrap_or_else(|| format!("{} (HTTP {})", GENERIC_LOOKUP_ERROR, status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_error_uses_server_message_when_present() {
        let body = r#"{"error": "URL de notícia inválida."}"#.as_bytes();
        let msg = summarize_error_message(StatusCode::BAD_REQUEST, body);
        assert_eq!(msg, "Erro: 400 - URL de notícia inválida.");
    }

    #[test]
    fn summarize_error_falls_back_to_status_line() {
        let msg = summarize_error_message(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(msg, "Erro: 500 - Internal Server Error");
    }

    #[test]
    fn summarize_error_ignores_empty_error_field() {
        let msg = summarize_error_message(StatusCode::NOT_FOUND, br#"{"error": ""}"#);
        assert_eq!(msg, "Erro: 404 - Not Found");
    }

    #[test]
    fn lookup_error_prefers_server_message() {
        let msg = lookup_error_message(StatusCode::NOT_FOUND, r#"{"error": "Resumo não encontrado."}"#.as_bytes());
        assert_eq!(msg, "Resumo não encontrado.");
    }

    #[test]
    fn lookup_error_defaults_to_generic_failure() {
        let msg = lookup_error_message(StatusCode::NOT_FOUND, b"");
        assert_eq!(msg, "Falha ao buscar o resumo. (HTTP 404)");
    }
}
