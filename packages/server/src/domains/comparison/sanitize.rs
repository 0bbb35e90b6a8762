/// Remove markdown code-fence markers the model may wrap around its JSON.
///
/// Every "```json" and "```" occurrence is dropped, then surrounding whitespace
/// is trimmed. Applying it twice gives the same text.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}
