/// Azure OpenAI chat-completion client
pub mod azure_openai;
/// Chat-completion backend abstraction
pub mod completion;
/// Data entities for recommendations
pub mod entities;
/// Error types and result aliases
pub mod errors;

pub use azure_openai::AzureOpenAiClient;
pub use completion::ChatCompletion;
