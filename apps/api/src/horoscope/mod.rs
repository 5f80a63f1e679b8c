// Horoscope generation: prompt templating, one LLM call, tolerant reply parsing.
// All LLM calls go through llm_client; nothing here talks HTTP to the provider.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
