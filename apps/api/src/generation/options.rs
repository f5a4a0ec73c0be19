//! Generation options — the closed option sets a caller picks from.
//!
//! The original option sets were free-form strings; here they are closed
//! enums. Extending one means adding a variant here plus, for `Tone`, its
//! guidance row in `generation::tone`. The compiler flags every site that
//! needs updating.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bounds on how many prompts one request may ask for.
pub const MIN_PROMPT_COUNT: u8 = 1;
pub const MAX_PROMPT_COUNT: u8 = 5;

/// Requested length of each generated prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptLength {
    #[default]
    Short,
    Medium,
    Long,
}

/// Writing tone of the generated prompts. Drives the style guidance
/// interpolated into the instruction (see `generation::tone`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Creative,
    Formal,
    Humorous,
    Inspiring,
}

/// Genre the prompts should belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Mystery,
    Romance,
}

// Lowercase display forms are interpolated mid-sentence into the
// instruction template, so they must read as plain English.

impl fmt::Display for PromptLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PromptLength::Short => "short",
            PromptLength::Medium => "medium-length",
            PromptLength::Long => "long",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tone::Creative => "creative",
            Tone::Formal => "formal",
            Tone::Humorous => "humorous",
            Tone::Inspiring => "inspiring",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::General => "general fiction",
            Category::SciFi => "sci-fi",
            Category::Mystery => "mystery",
            Category::Romance => "romance",
        };
        f.write_str(s)
    }
}
