pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following text to {target_language}. \
     Output only the translated text without any explanations. \
     The text may be a batch of entries shaped like 0==\"text\"//1==[\"a\",\"b\"]: \
     translate only the text inside the JSON strings and keep the indices, \
     the == and // markers and the JSON quoting exactly as they are.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language)
}
