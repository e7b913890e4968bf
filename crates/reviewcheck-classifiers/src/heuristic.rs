//! Rule-based decision engine
//!
//! Runs independent detectors over the review text and merges their flags
//! and evidence. Unlike the probabilistic engine, several flags can be
//! raised for the same review.
//!
//! Detectors run in declaration order:
//! - Advertisement: links or promotional phrasing
//! - Irrelevant: off-topic markers or too little text
//! - Rant: reviewer admits not visiting, or negative sentiment with no detail

use crate::lexicon::{words, Lexicon};
use reviewcheck_core::{Error, Flag, Result};
use std::sync::Arc;

pub const EVIDENCE_LINK: &str = "Link detected";
pub const EVIDENCE_PROMOTIONAL: &str = "Promotional keywords detected";
pub const EVIDENCE_IRRELEVANT_MARKERS: &str = "Irrelevant content markers detected";
pub const EVIDENCE_SHORT: &str = "Very short review (low information)";
pub const EVIDENCE_NO_VISIT: &str = "Mentions having not visited";
pub const EVIDENCE_NEGATIVE_RANT: &str = "Excessive negative sentiment with little detail";

/// Reviews with fewer whitespace tokens than this are low-information
pub const MIN_INFORMATIVE_TOKENS: usize = 8;

const RANT_SENTIMENT_CEILING: f64 = -0.4;
const RANT_MIN_TOKENS: usize = 5;

/// Review text prepared once and shared by all detectors
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    pub raw: &'a str,
    pub lower: String,
    pub words: Vec<String>,
    /// Whitespace-delimited token count
    pub token_count: usize,
    pub url_detected: bool,
    pub domain_hits: usize,
    /// Lexicon sentiment in [-1, 1]
    pub sentiment: f64,
}

impl<'a> NormalizedText<'a> {
    pub fn new(lexicon: &Lexicon, raw: &'a str) -> Self {
        let words = words(raw);
        let (positive, negative) = lexicon.sentiment_counts(&words);

        Self {
            raw,
            lower: raw.to_lowercase(),
            token_count: raw.split_whitespace().count(),
            url_detected: lexicon.has_url(raw),
            domain_hits: lexicon.domain_hits(&words),
            sentiment: sentiment_ratio(positive, negative),
            words,
        }
    }
}

/// `(pos - neg) / max(1, pos + neg)`; 0.0 with no sentiment words
pub fn sentiment_ratio(positive: usize, negative: usize) -> f64 {
    let total = (positive + negative).max(1) as f64;
    (positive as f64 - negative as f64) / total
}

/// What a single detector contributed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectorOutcome {
    pub flags: Vec<Flag>,
    pub evidence: Vec<String>,
}

impl DetectorOutcome {
    pub fn fired(&self) -> bool {
        !self.flags.is_empty()
    }

    fn raise(flag: Flag, evidence: Vec<&str>) -> Self {
        Self {
            flags: vec![flag],
            evidence: evidence.into_iter().map(str::to_string).collect(),
        }
    }
}

/// A pure predicate over normalized text
pub type Detector = fn(&Lexicon, &NormalizedText<'_>) -> DetectorOutcome;

/// All detectors, in the order their output is merged
pub const DETECTORS: [(&str, Detector); 3] = [
    ("advertisement", detect_advertisement),
    ("irrelevant", detect_irrelevant),
    ("rant", detect_rant),
];

pub fn detect_advertisement(lexicon: &Lexicon, text: &NormalizedText<'_>) -> DetectorOutcome {
    let mut evidence = Vec::new();
    if text.url_detected {
        evidence.push(EVIDENCE_LINK);
    }
    if !lexicon.promotional_terms(text.raw).is_empty() {
        evidence.push(EVIDENCE_PROMOTIONAL);
    }

    if evidence.is_empty() {
        DetectorOutcome::default()
    } else {
        DetectorOutcome::raise(Flag::Advertisement, evidence)
    }
}

pub fn detect_irrelevant(lexicon: &Lexicon, text: &NormalizedText<'_>) -> DetectorOutcome {
    let mut evidence = Vec::new();
    if !lexicon.irrelevance_markers(text.raw).is_empty() {
        evidence.push(EVIDENCE_IRRELEVANT_MARKERS);
    }
    if text.token_count < MIN_INFORMATIVE_TOKENS {
        evidence.push(EVIDENCE_SHORT);
    }

    if evidence.is_empty() {
        DetectorOutcome::default()
    } else {
        DetectorOutcome::raise(Flag::Irrelevant, evidence)
    }
}

pub fn detect_rant(lexicon: &Lexicon, text: &NormalizedText<'_>) -> DetectorOutcome {
    if lexicon.mentions_no_visit(text.raw) {
        return DetectorOutcome::raise(Flag::RantNoVisit, vec![EVIDENCE_NO_VISIT]);
    }

    let hollow_negativity = text.sentiment < RANT_SENTIMENT_CEILING
        && text.domain_hits == 0
        && text.token_count > RANT_MIN_TOKENS;

    if hollow_negativity {
        DetectorOutcome::raise(Flag::Rant, vec![EVIDENCE_NEGATIVE_RANT])
    } else {
        DetectorOutcome::default()
    }
}

/// Raw output of the heuristic engine
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicSignal {
    pub flags: Vec<Flag>,
    pub evidence: Vec<String>,
    pub url_detected: bool,
    pub domain_hits: usize,
    /// The reviewed place is named in the text
    pub place_mentioned: bool,
    pub sentiment: f64,
    pub token_count: usize,
}

/// Lexicon-driven decision engine; needs no model artifact
#[derive(Clone)]
pub struct HeuristicEngine {
    lexicon: Arc<Lexicon>,
}

impl HeuristicEngine {
    /// Create an engine with the built-in lexicon
    pub fn new() -> Result<Self> {
        Ok(Self::with_lexicon(Arc::new(Lexicon::new()?)))
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Run every detector and merge their contributions
    pub fn classify(&self, text: &str, place: Option<&str>) -> Result<HeuristicSignal> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        let normalized = NormalizedText::new(&self.lexicon, text);
        let mut flags: Vec<Flag> = Vec::new();
        let mut evidence = Vec::new();

        for (name, detector) in DETECTORS {
            let outcome = detector(&self.lexicon, &normalized);
            if !outcome.fired() {
                continue;
            }
            tracing::trace!(detector = name, flags = ?outcome.flags, "detector fired");

            for flag in outcome.flags {
                if !flags.contains(&flag) {
                    flags.push(flag);
                }
            }
            evidence.extend(outcome.evidence);
        }

        let place_mentioned = place
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .is_some_and(|p| normalized.lower.contains(&p.to_lowercase()));

        Ok(HeuristicSignal {
            flags,
            evidence,
            url_detected: normalized.url_detected,
            domain_hits: normalized.domain_hits,
            place_mentioned,
            sentiment: normalized.sentiment,
            token_count: normalized.token_count,
        })
    }

    /// Lexicon sentiment of the text in [-1, 1]
    pub fn sentiment_score(&self, text: &str) -> f64 {
        NormalizedText::new(&self.lexicon, text).sentiment
    }
}
