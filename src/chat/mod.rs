// src/chat/mod.rs
//! Chat relay to a hosted generative-language model with canned replies
//! when the model is unavailable.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

pub mod canned;
pub mod gemini_client;

pub use canned::canned_reply;
pub use gemini_client::GeminiClient;

use crate::core::config_manager::ChatConfig;
use crate::core::ServiceClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

pub struct ChatService {
    gemini: Option<GeminiClient>,
}

impl ChatService {
    pub fn new(config: &ChatConfig, client: ServiceClient) -> Self {
        Self {
            gemini: GeminiClient::from_config(config, client),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.gemini.is_some()
    }

    /// Always produces a reply.
    pub async fn reply(&self, message: &str) -> ChatResponse {
        let response = match (&self.gemini, message.trim().is_empty()) {
            (_, true) => canned_reply(message).to_string(),
            (None, false) => {
                warn!("No chat model configured, answering with canned reply");
                canned_reply(message).to_string()
            }
            (Some(gemini), false) => match gemini.generate(message).await {
                Ok(text) => text,
                Err(e) => {
                    error!("Chat model call failed: {:#}", e);
                    canned_reply(message).to_string()
                }
            },
        };

        ChatResponse { response }
    }
}
