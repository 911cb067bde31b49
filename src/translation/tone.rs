//! Suggested translation tones.
//!
//! The tone is a free-form hint embedded in the prompt; presets only seed
//! the interactive picker.

/// A suggested tone.
#[derive(Debug, Clone, Copy)]
pub struct TonePreset {
    pub key: &'static str,
    pub description: &'static str,
}

pub const TONE_PRESETS: &[TonePreset] = &[
    TonePreset {
        key: "neutral",
        description: "Plain, faithful rendering",
    },
    TonePreset {
        key: "formal",
        description: "Polite, business-appropriate",
    },
    TonePreset {
        key: "casual",
        description: "Friendly, conversational",
    },
    TonePreset {
        key: "literary",
        description: "Expressive, idiomatic prose",
    },
    TonePreset {
        key: "technical",
        description: "Precise terminology, no embellishment",
    },
];

pub fn get_preset(key: &str) -> Option<&'static TonePreset> {
    TONE_PRESETS.iter().find(|p| p.key == key)
}

/// Normalizes a user-entered tone. Blank input is rejected.
pub fn normalize_tone(tone: &str) -> Option<String> {
    let tone = tone.trim();
    if tone.is_empty() {
        None
    } else {
        Some(tone.to_string())
    }
}
