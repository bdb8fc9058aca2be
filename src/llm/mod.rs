//! LLM client: a thin, OpenAI-compatible chat completions client
//! exposing a single operation, `generate(prompt) -> String`. Used by query
//! generation to produce AI-optimized search queries; every failure
//! mode collapses to `LlmUnavailable` for the caller.

mod client;
mod models;

pub use client::{LlmClient, LlmClientConfig};
pub use models::LlmError;

#[cfg(test)]
mod tests;
