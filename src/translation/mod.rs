mod language;
pub mod messages;
mod orchestrator;
mod prompt;
mod tone;
mod view;

pub use language::{
    SUPPORTED_LANGUAGES, is_rtl, language_name, print_languages, validate_language,
    validate_source_language,
};
pub use orchestrator::{Orchestrator, TranslateError, TranslateRequest};
pub use prompt::build_prompt;
pub use tone::{TONE_PRESETS, TonePreset, get_preset, normalize_tone};
pub use view::{HistoryItemView, ResultView, View, render, render_all};
