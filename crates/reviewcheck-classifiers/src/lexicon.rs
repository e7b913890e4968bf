//! Lexicon and pattern store for the heuristic engine
//!
//! Holds the static vocabularies (promotional phrases, irrelevance markers,
//! sentiment words, domain vocabulary) and the compiled patterns for links
//! and "never visited" phrasing. Built once and shared read-only.

use aho_corasick::AhoCorasick;
use regex::{Regex, RegexSet};
use reviewcheck_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const PROMOTIONAL: &[&str] = &[
    "buy now",
    "shop now",
    "order now",
    "call now",
    "visit our",
    "check out our",
    "click here",
    "promo code",
    "use code",
    "coupon",
    "discount",
    "% off",
    "special offer",
    "limited offer",
    "limited time",
    "best deals",
    "free delivery",
    "free shipping",
    "follow us",
    "dm us",
    "whatsapp",
    "subscribe",
];

const IRRELEVANCE_MARKERS: &[&str] = &[
    "lorem ipsum",
    "asdf",
    "test review",
    "this is a test",
    "first comment",
    "random thought",
    "unrelated",
    "not related to",
    "off topic",
    "bitcoin",
    "crypto",
    "election",
    "politics",
];

const NO_VISIT_PATTERNS: &[&str] = &[
    r"\bnever\s+(?:been|visited|went|gone|tried|eaten)\b",
    r"\bhaven['’]?t\s+(?:been|visited|gone|tried|eaten)\b",
    r"\bhave\s+not\s+(?:been|visited|gone|tried|eaten)\b",
    r"\bdidn['’]?t\s+(?:go|visit|get\s+to\s+go)\b",
    r"\bnot\s+been\s+there\b",
    r"\b(?:i\s+)?heard\s+(?:from\s+(?:others|friends|people|someone)|that|it)\b",
    r"\b(?:people|friends|others)\s+(?:say|said|told\s+me)\b",
    r"\baccording\s+to\s+(?:my\s+)?(?:friends?|others|reviews)\b",
];

const URL_PATTERN: &str = r"(?i)\b(?:https?://|ftp://|www\.)\S+";

const POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "fantastic", "wonderful", "love", "loved",
    "delicious", "tasty", "friendly", "helpful", "perfect", "nice", "pleasant", "enjoyed",
    "recommend", "best", "fresh",
];

const NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "hate", "hated", "dirty", "rude",
    "disgusting", "gross", "nasty", "poor", "slow", "overpriced", "bland", "scam", "ripoff",
    "disappointing", "disappointed", "sucks", "avoid",
];

const DOMAIN: &[&str] = &[
    "food", "service", "staff", "waiter", "waitress", "server", "menu", "dish", "dishes", "meal",
    "table", "price", "prices", "portion", "portions", "atmosphere", "ambience", "ordered",
    "taste", "flavor", "flavour", "drinks", "coffee", "dessert", "breakfast", "lunch",
    "dinner", "chef", "kitchen", "room", "bathroom", "parking", "location", "reservation",
    "booking", "queue", "cashier", "manager", "pizza", "burger", "pasta", "salad", "steak",
];

/// Extra terms layered on top of the built-in vocabularies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_promotional: Vec<String>,

    #[serde(default)]
    pub extra_irrelevance: Vec<String>,

    #[serde(default)]
    pub extra_domain: Vec<String>,
}

/// Compiled lexicon and pattern store
pub struct Lexicon {
    promotional: AhoCorasick,
    irrelevance: AhoCorasick,
    no_visit: RegexSet,
    url: Regex,
    positive: HashSet<String>,
    negative: HashSet<String>,
    domain: HashSet<String>,
}

impl Lexicon {
    /// Create a lexicon with the built-in vocabularies
    pub fn new() -> Result<Self> {
        Self::with_config(&LexiconConfig::default())
    }

    /// Create a lexicon extended with configured terms
    pub fn with_config(config: &LexiconConfig) -> Result<Self> {
        let promotional = build_matcher("promotional", PROMOTIONAL, &config.extra_promotional)?;
        let irrelevance =
            build_matcher("irrelevance", IRRELEVANCE_MARKERS, &config.extra_irrelevance)?;

        let no_visit = RegexSet::new(NO_VISIT_PATTERNS.iter().map(|p| format!("(?i){p}")))
            .map_err(|e| {
                reviewcheck_core::Error::classifier(format!(
                    "Failed to compile no-visit patterns: {e}"
                ))
            })?;

        let url = Regex::new(URL_PATTERN).map_err(|e| {
            reviewcheck_core::Error::classifier(format!("Failed to compile URL regex: {e}"))
        })?;

        let domain = DOMAIN
            .iter()
            .map(|w| w.to_string())
            .chain(config.extra_domain.iter().map(|w| w.to_lowercase()))
            .collect();

        Ok(Self {
            promotional,
            irrelevance,
            no_visit,
            url,
            positive: POSITIVE.iter().map(|w| w.to_string()).collect(),
            negative: NEGATIVE.iter().map(|w| w.to_string()).collect(),
            domain,
        })
    }

    /// Text contains a scheme-prefixed or `www.` link
    pub fn has_url(&self, text: &str) -> bool {
        self.url.is_match(text)
    }

    /// Distinct promotional phrases found in the text, in first-seen order
    pub fn promotional_terms(&self, text: &str) -> Vec<String> {
        distinct_matches(&self.promotional, text)
    }

    /// Distinct irrelevance markers found in the text, in first-seen order
    pub fn irrelevance_markers(&self, text: &str) -> Vec<String> {
        distinct_matches(&self.irrelevance, text)
    }

    /// Text says the reviewer has not been to the place
    pub fn mentions_no_visit(&self, text: &str) -> bool {
        self.no_visit.is_match(text)
    }

    /// Positive and negative word counts over lower-cased words
    pub fn sentiment_counts(&self, words: &[String]) -> (usize, usize) {
        words.iter().fold((0, 0), |(pos, neg), w| {
            (
                pos + usize::from(self.positive.contains(w)),
                neg + usize::from(self.negative.contains(w)),
            )
        })
    }

    /// Number of domain-vocabulary words, counting repeats
    pub fn domain_hits(&self, words: &[String]) -> usize {
        words.iter().filter(|w| self.domain.contains(*w)).count()
    }
}

/// Lower-cased word tokens; apostrophes stay inside words ("haven't")
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|w| w.trim_matches(|c: char| c == '\'' || c == '’'))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn build_matcher(kind: &str, builtin: &[&str], extra: &[String]) -> Result<AhoCorasick> {
    let patterns: Vec<&str> = builtin
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .filter(|p| !p.trim().is_empty())
        .collect();

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns)
        .map_err(|e| {
            reviewcheck_core::Error::classifier(format!("Failed to build {kind} matcher: {e}"))
        })
}

fn distinct_matches(matcher: &AhoCorasick, text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in matcher.find_overlapping_iter(text) {
        let term = text[m.start()..m.end()].to_lowercase();
        if !seen.contains(&term) {
            seen.push(term);
        }
    }
    seen
}
