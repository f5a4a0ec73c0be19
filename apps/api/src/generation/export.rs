//! Plain-text export — renders a generated batch as a downloadable
//! artifact: numbered prompts separated by blank lines, filename slugged
//! from the topic.

/// Renders a batch of prompts as the plain-text download body.
pub fn render_export(topic: &str, prompts: &[String]) -> String {
    let mut out = format!("Writing prompts: {}\n\n", topic.trim());
    for (i, prompt) in prompts.iter().enumerate() {
        out.push_str(&format!("{}. {}\n\n", i + 1, prompt));
    }
    // single trailing newline
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// Builds the download filename from the topic:
/// `writing-prompts-<topic-slug>.txt`.
pub fn export_filename(topic: &str) -> String {
    format!("writing-prompts-{}.txt", slugify(topic))
}

/// Lowercases and reduces a topic to `[a-z0-9-]`, collapsing runs of
/// other characters into single hyphens. Falls back to "batch" when the
/// topic contains nothing sluggable.
fn slugify(topic: &str) -> String {
    let mut slug = String::with_capacity(topic.len());
    let mut last_hyphen = true; // suppress a leading hyphen
    for c in topic.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "batch".to_string()
    } else {
        slug
    }
}
