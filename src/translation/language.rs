//! Language codes, validation and text direction.

use anyhow::Result;

use crate::settings::AUTO_LANGUAGE;
use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Target languages written right to left.
const RTL_LANGUAGES: &[&str] = &["fa", "ar", "ur", "he", "ps"];

/// Returns the display name of a language code, if known.
pub fn language_name(code: &str) -> Option<&'static str> {
    if code == AUTO_LANGUAGE {
        return Some("Detect automatically");
    }
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Returns `true` if text in this language is laid out right to left.
pub fn is_rtl(code: &str) -> bool {
    RTL_LANGUAGES.contains(&code)
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    println!(
        "  {:5} {}",
        Style::code(AUTO_LANGUAGE),
        Style::secondary("Detect automatically (source only)")
    );
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates a target language code.
///
/// # Errors
///
/// Returns an error if the code is not in the supported list. `auto` is
/// rejected because a translation needs a concrete target.
pub fn validate_language(lang: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): fa, en, ar, de, fr, ja, ...\n\
             Run 'ultima languages' to see all supported codes."
        )
    }
}

/// Validates a source language code, which may also be `auto`.
pub fn validate_source_language(lang: &str) -> Result<()> {
    if lang == AUTO_LANGUAGE {
        return Ok(());
    }
    validate_language(lang)
}
