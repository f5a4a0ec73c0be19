// All instruction templates for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::generation::generator::PromptRequest;
use crate::generation::tone::get_tone_guidance;
use crate::llm_client::prompts::{NUMBERED_LIST_INSTRUCTION, SINGLE_ITEM_INSTRUCTION};

/// System message template. Replace `{category}`, `{tone_guidance}`.
const SYSTEM_TEMPLATE: &str = "You are an expert {category} writing assistant \
    who crafts story prompts for writers. {tone_guidance}";

/// User message template for a batch of prompts.
/// Replace `{count}`, `{length}`, `{tone}`, `{category}`, `{topic}`,
/// `{list_instruction}`.
const USER_TEMPLATE: &str = "Give me {count} {length} {tone} writing prompts \
    in the {category} genre about {topic}. Each prompt must stand alone as the \
    seed of a different story. {list_instruction}";

/// Builds the system message for a generation request.
pub fn build_system_prompt(request: &PromptRequest) -> String {
    SYSTEM_TEMPLATE
        .replace("{category}", &request.category.to_string())
        .replace(
            "{tone_guidance}",
            &get_tone_guidance(&request.tone).as_instruction(),
        )
}

/// Builds the user message for a generation request.
///
/// Interpolates the lowercase display forms of the options; one batched
/// instruction asks for all `count` items as a numbered list so a single
/// completion call covers the whole request.
pub fn build_user_prompt(request: &PromptRequest) -> String {
    let list_instruction = if request.count == 1 {
        SINGLE_ITEM_INSTRUCTION
    } else {
        NUMBERED_LIST_INSTRUCTION
    };

    USER_TEMPLATE
        .replace("{count}", &request.count.to_string())
        .replace("{length}", &request.length.to_string())
        .replace("{tone}", &request.tone.to_string())
        .replace("{category}", &request.category.to_string())
        .replace("{topic}", request.topic.trim())
        .replace("{list_instruction}", list_instruction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::options::{Category, PromptLength, Tone};

    fn request() -> PromptRequest {
        PromptRequest {
            topic: "a lighthouse keeper".to_string(),
            length: PromptLength::Medium,
            tone: Tone::Creative,
            category: Category::SciFi,
            count: 3,
        }
    }

    #[test]
    fn test_user_prompt_interpolates_lowercase_options() {
        let prompt = build_user_prompt(&request());
        assert!(prompt.contains("3 medium-length creative writing prompts"));
        assert!(prompt.contains("sci-fi genre"));
        assert!(prompt.contains("about a lighthouse keeper"));
        assert!(!prompt.contains('{'), "unreplaced placeholder in: {prompt}");
    }

    #[test]
    fn test_user_prompt_trims_topic_whitespace() {
        let mut req = request();
        req.topic = "  a lighthouse keeper  ".to_string();
        let prompt = build_user_prompt(&req);
        assert!(prompt.contains("about a lighthouse keeper."));
    }

    #[test]
    fn test_batch_request_asks_for_numbered_list() {
        let prompt = build_user_prompt(&request());
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn test_single_request_asks_for_plain_prose() {
        let mut req = request();
        req.count = 1;
        let prompt = build_user_prompt(&req);
        assert!(prompt.contains("plain prose"));
        assert!(!prompt.contains("numbered list"));
    }

    #[test]
    fn test_system_prompt_carries_category_and_tone_guidance() {
        let system = build_system_prompt(&request());
        assert!(system.contains("sci-fi writing assistant"));
        assert!(system.contains("imaginative and evocative"));
        assert!(!system.contains('{'));
    }
}
