// Shared prompt constants and prompt-building utilities.
// Each service that needs completion calls defines its own prompts.rs
// alongside it. This file contains cross-cutting prompt fragments.

/// Instruction appended to generation prompts that request several items.
/// The parser in `generation::parser` relies on this output contract.
pub const NUMBERED_LIST_INSTRUCTION: &str = "\
    Return the prompts as a numbered list, one prompt per line. \
    Do NOT include headings, commentary, or any text outside the list itself.";

/// Instruction used when exactly one item is requested.
pub const SINGLE_ITEM_INSTRUCTION: &str = "\
    Return the prompt as plain prose on a single line. \
    Do NOT include headings, commentary, or enumeration markers.";
