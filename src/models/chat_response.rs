use anyhow::Error;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::Usage;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FunctionArguments {
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: FunctionArguments,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: String,
    // `null` when the model answers with a function call
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub function_call: Option<FunctionCall>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u64,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

// response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: Option<i64>,
    pub model: Option<String>,
    pub usage: Option<Usage>,
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Text of the first choice, exactly as the API sent it.
    pub fn first_content(&self) -> Result<String, Error> {
        match self.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => {
                error!("No choices returned from llama");
                Err(Error::msg("No choices returned from llama"))
            }
        }
    }
}
