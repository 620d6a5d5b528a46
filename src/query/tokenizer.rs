/// Splits a raw query into lowercase tokens.
///
/// Tokens are delimited by runs of whitespace, hyphens, underscores, commas,
/// periods, and semicolons; empty fragments are dropped. Order is preserved
/// and duplicates are allowed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || matches!(c, '-' | '_' | ',' | '.' | ';'))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// The full query as a single phrase: trimmed and lowercased, not tokenized.
///
/// Used for exact substring matching against resource names.
pub fn combined_phrase(query: &str) -> String {
    query.trim().to_lowercase()
}
