//! # Ollama Client
//!
//! Sends a single non-streaming `/api/generate` request to a local Ollama server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::config::LlmConfig;
use crate::domain::traits::LlmProvider;
use crate::strings::logs;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Pulls the `response` field out of an Ollama reply.
/// Anything that does not parse is returned as-is.
pub fn extract_response(body: &str) -> String {
    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(parsed) => parsed.response,
        Err(_) => {
            tracing::debug!("{}", logs::LLM_NON_JSON);
            body.to_string()
        }
    }
}

pub struct OllamaClient {
    http: Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaClient {
    async fn completion(&self, prompt: &str) -> Result<String> {
        tracing::info!("{}", logs::llm_request(&self.model, &self.endpoint));

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            anyhow::bail!("HTTP {}: {}", status, body);
        }

        Ok(extract_response(&body))
    }
}
