// Reading Generator
// Implements: reading-type tables, prompt construction, generation, validation, fallback.
// All text-generation calls go through llm_client; no direct HTTP calls here.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod types;
pub mod validation;
