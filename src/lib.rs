//! Genre Scout - discover emerging artists in a music genre
//!
//! This library asks an Azure OpenAI deployment for up-and-coming artists in a
//! chosen genre and turns the JSON reply into displayable recommendation cards.

/// Terminal front end
pub mod cli;
/// Client modules for interacting with the hosted model
pub mod clients;
/// Discovery flow: prompt, completion, normalization
pub mod discoverer;
/// `.env` loading
pub mod env;
/// Genre picker values and the effective genre
pub mod genre;
/// Normalization of model replies into records
pub mod normalizer;
/// Prompt template and sampling parameters
pub mod prompt;
/// Result cards and user-facing messages
pub mod render;
/// Single-page web form
pub mod web;

pub use discoverer::{Discoverer, DiscovererBuilder};
pub use genre::{GenreChoice, GenreSelection};
