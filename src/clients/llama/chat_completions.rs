use anyhow::Error;
use http::header;
use tracing::{debug, error, info};

use crate::config::{get_llama_api_key, LLAMA_API_URL};
use crate::models::chat_request::ChatRequest;
use crate::models::chat_response::ChatResponse;

pub struct LlamaClient {
    client: reqwest::Client,
    endpoint: String,
    key: String,
}

impl LlamaClient {
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        LlamaClient {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            key: key.into(),
        }
    }

    /// Client for the hosted Llama API, keyed from `LLAMA_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        let key = get_llama_api_key()?;
        Ok(Self::new(LLAMA_API_URL, key))
    }

    pub async fn get_completion(&self, chat_request: &ChatRequest) -> Result<ChatResponse, Error> {
        let body = match chat_request.to_json() {
            Ok(b) => b,
            Err(e) => {
                error!("Failed to serialize chat request model: {}", e);
                return Err(Error::msg(format!(
                    "Failed to serialize chat request: {}",
                    e
                )));
            }
        };

        debug!(
            "Sending request to Llama API: {} - {}\nbody:\n{}",
            chat_request.model, self.endpoint, body,
        );

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", self.key))
            .body(body)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(e) => {
                error!("Error sending request to Llama API: {}", e);
                return Err(Error::msg(format!(
                    "Failed to send request to Llama API: {}",
                    e
                )));
            }
        };

        // anything but 200 is fatal and the body is left unread
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            error!("Llama API returned unexpected status code {}", status);
            return Err(Error::msg(format!(
                "Unexpected status code from Llama API: {}",
                status
            )));
        }

        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Error reading response text: {}", e);
                return Err(Error::msg(format!("Failed to read response text: {}", e)));
            }
        };

        match ChatResponse::from_json(&response_text) {
            Ok(r) => Ok(r),
            Err(e) => {
                error!(
                    "Error parsing response JSON: {}\nRaw response: {}",
                    e, response_text
                );
                Err(Error::msg(format!(
                    "Failed to parse response JSON: {}\nRaw response: {}",
                    e, response_text
                )))
            }
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let chat_request = ChatRequest::for_prompt(prompt);
        let chat_response = self.get_completion(&chat_request).await?;
        if let Some(usage) = &chat_response.usage {
            info!(
                "Llama API usage: {} prompt + {} completion = {} tokens",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }
        chat_response.first_content()
    }
}

/// Ask the hosted Llama API for a completion of `prompt` and return the
/// first choice's text.
pub async fn get_generated_response(prompt: &str) -> Result<String, Error> {
    let client = LlamaClient::from_env()?;
    client.generate(prompt).await
}
