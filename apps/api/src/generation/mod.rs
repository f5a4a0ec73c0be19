// Prompt Generation Engine
// Implements: option enums, tone calibration, instruction templating,
// completion-output parsing, surprise topics, plain-text export.
// All completion calls go through llm_client — no direct API calls here.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod options;
pub mod parser;
pub mod prompts;
pub mod tone;
pub mod topics;
