use super::lexicon::{SynonymTable, VariantTable};
use super::tokenizer::{combined_phrase, tokenize};
use crate::catalog::types::Resource;

/// The prepared forms of a query: its token list, the synonym-expanded term
/// list, and the combined phrase.
pub struct QueryTerms {
    pub tokens: Vec<String>,
    pub expanded: Vec<String>,
    pub phrase: String,
}

impl QueryTerms {
    /// Prepares a raw query for scoring. Returns `None` for queries that are
    /// empty or whitespace-only.
    pub fn prepare(query: &str, synonyms: &SynonymTable) -> Option<Self> {
        let phrase = combined_phrase(query);
        if phrase.is_empty() {
            return None;
        }
        let tokens = tokenize(query);
        let expanded = synonyms.expand(&tokens);
        Some(Self {
            tokens,
            expanded,
            phrase,
        })
    }
}

/// Everything a scoring rule may inspect: the lowercased candidate text and
/// the prepared query terms.
pub struct MatchContext<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub terms: &'a QueryTerms,
    pub variants: &'a VariantTable,
}

/// One named relevance rule. The rule's hit count is multiplied by its weight
/// and added to the candidate's score.
pub struct ScoringRule {
    pub id: &'static str,
    pub weight: u32,
    pub hits: fn(&MatchContext) -> u32,
}

/// The relevance rules, applied top to bottom. The order and weights are part
/// of the ranking contract.
pub const SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        id: "phrase-name",
        weight: 100,
        hits: phrase_in_name,
    },
    ScoringRule {
        id: "all-tokens-name",
        weight: 50,
        hits: all_tokens_in_name,
    },
    ScoringRule {
        id: "all-tokens-description",
        weight: 30,
        hits: all_tokens_in_description,
    },
    ScoringRule {
        id: "token-name",
        weight: 10,
        hits: tokens_in_name,
    },
    ScoringRule {
        id: "token-description",
        weight: 2,
        hits: tokens_in_description,
    },
    ScoringRule {
        id: "expanded-name",
        weight: 5,
        hits: expanded_in_name,
    },
    ScoringRule {
        id: "expanded-description",
        weight: 1,
        hits: expanded_in_description,
    },
    ScoringRule {
        id: "phonetic",
        weight: 8,
        hits: phonetic_match,
    },
];

fn phrase_in_name(ctx: &MatchContext) -> u32 {
    u32::from(ctx.name.contains(&ctx.terms.phrase))
}

fn all_tokens_in_name(ctx: &MatchContext) -> u32 {
    u32::from(ctx.terms.tokens.iter().all(|t| ctx.name.contains(t.as_str())))
}

fn all_tokens_in_description(ctx: &MatchContext) -> u32 {
    u32::from(
        ctx.terms
            .tokens
            .iter()
            .all(|t| ctx.description.contains(t.as_str())),
    )
}

fn tokens_in_name(ctx: &MatchContext) -> u32 {
    ctx.terms
        .tokens
        .iter()
        .filter(|t| ctx.name.contains(t.as_str()))
        .count() as u32
}

fn tokens_in_description(ctx: &MatchContext) -> u32 {
    ctx.terms
        .tokens
        .iter()
        .filter(|t| ctx.description.contains(t.as_str()))
        .count() as u32
}

fn expanded_in_name(ctx: &MatchContext) -> u32 {
    ctx.terms
        .expanded
        .iter()
        .filter(|t| ctx.name.contains(t.as_str()))
        .count() as u32
}

fn expanded_in_description(ctx: &MatchContext) -> u32 {
    ctx.terms
        .expanded
        .iter()
        .filter(|t| ctx.description.contains(t.as_str()))
        .count() as u32
}

fn phonetic_match(ctx: &MatchContext) -> u32 {
    u32::from(
        ctx.variants.matches(ctx.name, &ctx.terms.phrase)
            || ctx.variants.matches(ctx.description, &ctx.terms.phrase),
    )
}

/// Scores one resource against the prepared query terms by running the rule
/// table in order.
pub fn score_resource(resource: &Resource, terms: &QueryTerms, variants: &VariantTable) -> u32 {
    let name = resource.name.to_lowercase();
    let description = resource.description.to_lowercase();
    let ctx = MatchContext {
        name: &name,
        description: &description,
        terms,
        variants,
    };

    SCORING_RULES
        .iter()
        .map(|rule| rule.weight * (rule.hits)(&ctx))
        .sum()
}

/// Scores every resource against `query`, drops non-matches, and returns the
/// remainder ordered by descending score.
///
/// An empty or whitespace-only query yields an empty result, not the full
/// dataset. The sort is stable, so tied scores keep their input order.
pub fn search(
    resources: &[Resource],
    query: &str,
    synonyms: &SynonymTable,
    variants: &VariantTable,
) -> Vec<(Resource, u32)> {
    let Some(terms) = QueryTerms::prepare(query, synonyms) else {
        return Vec::new();
    };

    let mut scored: Vec<(Resource, u32)> = resources
        .iter()
        .filter_map(|resource| {
            let score = score_resource(resource, &terms, variants);
            (score > 0).then(|| (resource.clone(), score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}
