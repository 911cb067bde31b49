/// Builds the translation instruction sent to the model.
///
/// Every value is substituted exactly once, so braces in the tone or the
/// source text reach the model verbatim.
pub fn build_prompt(from: &str, to: &str, tone: &str, text: &str) -> String {
    format!("Translate this text from \"{from}\" to \"{to}\". Tone: {tone}. Output ONLY translation: {text}")
}
