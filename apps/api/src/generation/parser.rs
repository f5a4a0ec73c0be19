//! Completion-output parsing — turns the raw completion text into clean
//! prompt strings.
//!
//! The model is instructed to return one prompt per line as a numbered
//! list, but the exact marker style varies ("1.", "2)", "-", "•"). The
//! parser splits on line breaks, drops blank lines, and strips leading
//! enumeration markers so callers receive prose only.

/// Splits completion text into cleaned prompt lines.
pub fn clean_prompt_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_enumeration)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips leading enumeration markers (bullets, digit runs followed by
/// punctuation) and surrounding whitespace from one line.
///
/// A digit run is only treated as a marker when punctuation follows it, so
/// a prompt that opens with a bare number ("1984 was the year...") keeps
/// its text.
fn strip_enumeration(line: &str) -> &str {
    let mut s = line.trim();

    loop {
        if let Some(rest) = s
            .strip_prefix('-')
            .or_else(|| s.strip_prefix('*'))
            .or_else(|| s.strip_prefix('•'))
        {
            s = rest.trim_start();
            continue;
        }

        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            let rest = &s[digits..];
            let punct = rest
                .chars()
                .take_while(|c| matches!(c, '.' | ')' | ':' | '-'))
                .count();
            if punct > 0 {
                s = rest[punct..].trim_start();
                continue;
            }
        }

        break;
    }

    s.trim_end()
}
