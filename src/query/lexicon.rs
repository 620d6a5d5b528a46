use std::collections::HashMap;

/// Maps a query token to its alternate spellings or expansions.
///
/// The table is intentionally small; broader coverage is a data change, not a
/// code change. A key's alternates are added alongside the token itself during
/// expansion, never instead of it.
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The starter table shipped with the directory.
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        table.insert("ai", &["artificial intelligence"]);
        table.insert("mcp", &["model context protocol"]);
        table
    }

    pub fn insert(&mut self, key: &str, alternates: &[&str]) {
        self.entries.insert(
            key.to_string(),
            alternates.iter().map(|a| (*a).to_string()).collect(),
        );
    }

    /// Expands a token list: every token is retained, and tokens that are table
    /// keys contribute their alternates as additional terms.
    pub fn expand(&self, tokens: &[String]) -> Vec<String> {
        let mut expanded = Vec::with_capacity(tokens.len());
        for token in tokens {
            expanded.push(token.clone());
            if let Some(alternates) = self.entries.get(token) {
                expanded.extend(alternates.iter().cloned());
            }
        }
        expanded
    }
}

/// Maps a base key to its spelling variants, e.g. pinyin tone marks.
///
/// When the key is absent from the table, the key itself is the only variant,
/// so the lookup degrades to literal containment.
pub struct VariantTable {
    entries: HashMap<String, Vec<String>>,
}

impl VariantTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Base pinyin syllables with their tone-marked spellings.
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        table.insert("a", &["a", "ā", "á", "ǎ", "à"]);
        table.insert("ai", &["ai", "āi", "ái", "ǎi", "ài"]);
        table
    }

    pub fn insert(&mut self, key: &str, variants: &[&str]) {
        self.entries.insert(
            key.to_string(),
            variants.iter().map(|v| (*v).to_string()).collect(),
        );
    }

    /// Whether any variant of `key` occurs in `text`.
    pub fn matches(&self, text: &str, key: &str) -> bool {
        match self.entries.get(key) {
            Some(variants) => variants.iter().any(|variant| text.contains(variant.as_str())),
            None => text.contains(key),
        }
    }
}

/// The two lookup tables the query engine consults, bundled so call sites
/// receive them as one piece of shared state.
pub struct Lexicon {
    pub synonyms: SynonymTable,
    pub variants: VariantTable,
}

impl Lexicon {
    pub fn with_defaults() -> Self {
        Self {
            synonyms: SynonymTable::with_defaults(),
            variants: VariantTable::with_defaults(),
        }
    }
}
