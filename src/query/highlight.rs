use super::tokenizer::tokenize;
use regex::RegexBuilder;

const MARK_OPEN: &str = "<span class=\"highlight\">";
const MARK_CLOSE: &str = "</span>";

/// Wraps every case-insensitive occurrence of each query token in `text` with
/// the highlight marker.
///
/// Tokens are matched independently, one pass per token, so overlapping wraps
/// from different tokens can occur; that mirrors the display behavior the
/// markup is consumed by. Returns the input unchanged when either argument is
/// empty.
pub fn highlight(text: &str, query: &str) -> String {
    if text.is_empty() || query.is_empty() {
        return text.to_string();
    }

    let mut highlighted = text.to_string();
    for token in tokenize(query) {
        let Ok(pattern) = RegexBuilder::new(&regex::escape(&token))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };

        highlighted = pattern
            .replace_all(&highlighted, format!("{}${{0}}{}", MARK_OPEN, MARK_CLOSE).as_str())
            .into_owned();
    }

    highlighted
}
