use async_trait::async_trait;

use crate::clients::errors::Result;

/// A hosted chat-completion backend.
///
/// Implementations send the prompt as a single user message and hand back the
/// raw text content of the first choice, untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Send one prompt and wait for the reply content.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
