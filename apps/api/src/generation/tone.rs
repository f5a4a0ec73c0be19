//! Tone calibration — maps the selected tone to style guidance interpolated
//! into the instruction template.
//!
//! The guidance nudges the model toward the tone's register and away from
//! its failure modes (e.g. a humorous prompt drifting into whimsy-free
//! exposition). It is advisory to the model; the parser downstream makes
//! no assumptions about it.

use crate::generation::options::Tone;

/// Style guidance calibrated to a specific tone.
#[derive(Debug, Clone)]
pub struct ToneGuidance {
    /// Qualities the prompt text should lean into.
    pub encourage: Vec<&'static str>,
    /// Qualities to steer away from for this tone.
    pub avoid: Vec<&'static str>,
    /// Short register note interpolated into the system message.
    pub register: &'static str,
}

/// Returns style guidance for the selected tone.
pub fn get_tone_guidance(tone: &Tone) -> ToneGuidance {
    match tone {
        Tone::Creative => ToneGuidance {
            encourage: vec![
                "vivid imagery",
                "unexpected juxtapositions",
                "sensory detail",
                "an unusual point of view",
            ],
            avoid: vec!["clichés", "generic openings", "summary-style phrasing"],
            register: "imaginative and evocative",
        },
        Tone::Formal => ToneGuidance {
            encourage: vec![
                "precise language",
                "measured pacing",
                "a restrained narrative voice",
            ],
            avoid: vec!["slang", "exclamations", "direct address to the reader"],
            register: "polished and literary",
        },
        Tone::Humorous => ToneGuidance {
            encourage: vec![
                "absurd premises",
                "comic irony",
                "deadpan delivery",
            ],
            avoid: vec!["grim stakes", "earnest moralizing"],
            register: "light and playful",
        },
        Tone::Inspiring => ToneGuidance {
            encourage: vec![
                "themes of perseverance",
                "moments of quiet courage",
                "hopeful turns",
            ],
            avoid: vec!["cynicism", "hopeless endings", "saccharine sentimentality"],
            register: "uplifting and warm",
        },
    }
}

impl ToneGuidance {
    /// Renders the guidance as a single sentence fragment for the template.
    pub fn as_instruction(&self) -> String {
        format!(
            "Keep the register {}. Favor {}. Avoid {}.",
            self.register,
            self.encourage.join(", "),
            self.avoid.join(", ")
        )
    }
}
