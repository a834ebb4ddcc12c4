use std::env;

use anyhow::Error;
use tracing::error;

pub const LLAMA_API_URL: &str = "https://api.llama-api.com/chat/completions";
pub const LLAMA_API_KEY: &str = "LLAMA_API_KEY";

pub fn get_llama_api_key() -> Result<String, Error> {
    api_key_from(env::var(LLAMA_API_KEY).ok())
}

fn api_key_from(value: Option<String>) -> Result<String, Error> {
    match value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => {
            let message = format!("{} environment variable is not set", LLAMA_API_KEY);
            error!("Failed to get API KEY: {}", message);
            Err(Error::msg(message))
        }
    }
}
