use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::clients::completion::ChatCompletion;
use crate::clients::errors::{Error, Result};
use crate::prompt::{MAX_TOKENS, TEMPERATURE};

/// Deployment name that serves every request.
pub const DEPLOYMENT: &str = "gpt-4o-mini";
/// Azure OpenAI REST api-version sent with every request.
pub const API_VERSION: &str = "2023-05-15";

const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";

/// Connection settings for an Azure OpenAI resource.
#[derive(Debug, Clone)]
pub struct AzureOpenAiSettings {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
}

impl AzureOpenAiSettings {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        AzureOpenAiSettings {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            deployment: DEPLOYMENT.to_string(),
            api_version: API_VERSION.to_string(),
        }
    }

    // Read credentials from the environment or raise a configuration error
    pub fn from_env() -> Result<Self> {
        let api_key = required_var(API_KEY_VAR)?;
        let endpoint = required_var(ENDPOINT_VAR)?;
        Ok(AzureOpenAiSettings::new(api_key, endpoint))
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(_) => Err(Error::ConfigurationError(format!(
            "{name} is set but empty. Check your .env file."
        ))),
        Err(err) => Err(Error::ConfigurationError(format!("{name}: {err}"))),
    }
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    response_format: ResponseFormat,
}

impl<'a> ChatRequest<'a> {
    fn for_prompt(prompt: &'a str) -> Self {
        ChatRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        }
    }
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
}

impl ChatResponse {
    fn into_content(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(Error::EmptyCompletion)
    }
}

/// Chat-completion client for one Azure OpenAI deployment.
///
/// Build it once at startup and share it; the underlying HTTP connection pool
/// is reused across calls.
pub struct AzureOpenAiClient {
    http: Client,
    settings: AzureOpenAiSettings,
}

impl AzureOpenAiClient {
    pub fn new(settings: AzureOpenAiSettings) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("genre-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(AzureOpenAiClient { http, settings })
    }

    // Create a client from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        AzureOpenAiClient::new(AzureOpenAiSettings::from_env()?)
    }

    pub fn settings(&self) -> &AzureOpenAiSettings {
        &self.settings
    }
}

#[async_trait]
impl ChatCompletion for AzureOpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.settings.completions_url();
        debug!("POST {url} ({} prompt bytes)", prompt.len());

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.settings.api_key)
            .json(&ChatRequest::for_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: ChatResponse = serde_json::from_str(&body)?;
        let content = envelope.into_content()?;
        debug!("Received {} bytes of completion content", content.len());
        Ok(content)
    }
}
