//! Branding prompt client.
//!
//! Asks a text-generation service for a one-sentence branding brief of the
//! form "a ____ brand targeting ____". Any failure on the way (transport,
//! status, payload) is logged and replaced by a pick from a local list, so
//! callers of [`PromptGenerator::generate`] always get a prompt back.

use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::constants::PROMPT_REQUEST_TIMEOUT;

/// Prompts shown when the service cannot be used.
pub const FALLBACK_PROMPTS: [&str; 15] = [
    "a coastal guesthouse brand targeting weekend travelers.",
    "a neighborhood bakery brand targeting early-morning commuters.",
    "a modular furniture brand targeting first-apartment renters.",
    "a zero-waste refill brand targeting eco-conscious shoppers.",
    "a language tutoring brand targeting international students.",
    "a pet wellness brand targeting urban dog owners.",
    "a mindful tech break brand targeting remote teams.",
    "a mobile car wash brand targeting busy parents.",
    "a local museum brand targeting family day-trippers.",
    "a women's running club brand targeting novice runners.",
    "a music education brand targeting teenagers in after-school programs.",
    "a boutique hotel brand targeting design-focused travelers.",
    "a craft soda brand targeting summer festival goers.",
    "a plant delivery brand targeting apartment dwellers.",
    "a community cycling brand targeting city commuters.",
];

/// Stylistic angles, one of which is named in each request.
pub const PROMPT_ANGLES: [&str; 8] = [
    "community-first",
    "premium minimalist",
    "playful and youthful",
    "eco-conscious",
    "tech-forward",
    "artisan handcrafted",
    "bold and energetic",
    "calm and trustworthy",
];

const MODEL: &str = "openai";
const TEMPERATURE: f32 = 1.2;
const SYSTEM_INSTRUCTION: &str = "You generate concise branding prompts. \
     Return exactly one sentence in this format: a ____ brand targeting ____.";

/// Ways a prompt request can fail.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Prompt service returned status {0}")]
    Status(StatusCode),

    #[error("Prompt service returned a malformed body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prompt service returned no text")]
    Empty,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the text-generation endpoint.
#[derive(Debug, Clone)]
pub struct PromptClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PromptClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, PromptError> {
        let http = reqwest::Client::builder()
            .timeout(PROMPT_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Requests one prompt written from the given angle.
    ///
    /// `nonce` is sent as a query parameter so the service does not hand
    /// back a cached answer.
    pub async fn fetch(&self, angle: &str, nonce: &str) -> Result<String, PromptError> {
        let user_instruction = user_instruction(angle);
        let request = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: &user_instruction,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("nonce", nonce)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PromptError::Status(status));
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(PromptError::Empty)
    }
}

fn user_instruction(angle: &str) -> String {
    format!(
        "Generate one realistic branding prompt now. Use a {angle} angle, \
         keep it specific and natural, and do not repeat any previous prompt."
    )
}

/// Picks one of the local prompts uniformly at random.
pub fn fallback_prompt() -> &'static str {
    FALLBACK_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_PROMPTS[0])
}

/// Produces prompts, from the service when one is configured.
#[derive(Debug, Clone)]
pub struct PromptGenerator {
    client: Option<PromptClient>,
}

impl PromptGenerator {
    pub fn online(client: PromptClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn offline() -> Self {
        Self { client: None }
    }

    /// Builds a generator from configuration.
    ///
    /// Falls back to offline mode if the HTTP client cannot be created.
    pub fn from_config(config: &AppConfig) -> Self {
        if config.offline {
            return Self::offline();
        }

        match PromptClient::new(config.prompt_url.clone()) {
            Ok(client) => Self::online(client),
            Err(err) => {
                warn!(error = %err, "Could not build prompt client, using local prompts only");
                Self::offline()
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.client.is_some()
    }

    /// Returns a prompt from the service, or a local one if that fails.
    pub async fn generate(&self) -> String {
        let Some(client) = &self.client else {
            return fallback_prompt().to_string();
        };

        let (angle, nonce) = {
            let mut rng = rand::thread_rng();
            let angle = PROMPT_ANGLES
                .choose(&mut rng)
                .copied()
                .unwrap_or(PROMPT_ANGLES[0]);
            (angle, format!("{:x}", rng.gen::<u64>()))
        };

        match client.fetch(angle, &nonce).await {
            Ok(text) => {
                debug!(angle, "Prompt received from service");
                text
            }
            Err(err) => {
                warn!(error = %err, "Prompt service failed, using a local prompt");
                fallback_prompt().to_string()
            }
        }
    }
}
