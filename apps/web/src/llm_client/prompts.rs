// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains the cross-cutting pieces.

/// Persona line that opens every reading prompt.
pub const ASTROLOGER_PERSONA: &str = "You are an expert astrologer providing personalized horoscope readings. \
You combine traditional astrological wisdom with insightful, empowering guidance.";

/// Closing instruction that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON, no other text";
