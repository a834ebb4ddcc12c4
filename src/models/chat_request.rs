use serde::{Deserialize, Serialize};

use super::Message;

pub const LLAMA_MODEL: &str = "llama3-70b";

const FUNCTION_NAME: &str = "Get_English_Exmple_Sentence";
const FUNCTION_DESCRIPTION: &str = "Get the English example sentence generated with given words.";
const WORDS_DESCRIPTION: &str = "English vocabulary list, e.g. nonchalant, reckon, appalled";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub functions: Vec<FunctionDeclaration>,
    pub stream: bool,
    pub function_call: String,
}

/// A function the model may call instead of answering in prose.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: FunctionParameters,
    pub required: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionParameters {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: FunctionProperties,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionProperties {
    pub words: PropertySchema,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl FunctionDeclaration {
    pub fn example_sentence() -> Self {
        FunctionDeclaration {
            name: FUNCTION_NAME.to_string(),
            description: FUNCTION_DESCRIPTION.to_string(),
            parameters: FunctionParameters {
                kind: "object".to_string(),
                properties: FunctionProperties {
                    words: PropertySchema {
                        kind: "string".to_string(),
                        description: WORDS_DESCRIPTION.to_string(),
                    },
                },
            },
            required: vec!["words".to_string()],
        }
    }
}

impl ChatRequest {
    /// Single user turn with the example-sentence function declared but
    /// disabled, so the model answers with plain text.
    pub fn for_prompt(prompt: &str) -> Self {
        ChatRequest {
            model: LLAMA_MODEL.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            functions: vec![FunctionDeclaration::example_sentence()],
            stream: false,
            function_call: "none".to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[allow(dead_code)]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
