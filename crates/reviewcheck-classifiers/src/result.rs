//! Result record shaping
//!
//! Pure formatting: applies field defaults and builds the snippet. Flags,
//! evidence and scores pass through unchanged.

use crate::scoring::Assessment;
use reviewcheck_core::{ClassificationResult, Review};

pub const DEFAULT_PLACE: &str = "Unknown Place";
pub const DEFAULT_USER: &str = "Anonymous";
pub const DEFAULT_TIMESTAMP: &str = "N/A";
pub const DEFAULT_SNIPPET_LEN: usize = 120;
pub const ELLIPSIS: &str = "…";

#[derive(Debug, Clone, Copy)]
pub struct ResultBuilder {
    snippet_len: usize,
}

impl Default for ResultBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SNIPPET_LEN)
    }
}

impl ResultBuilder {
    pub fn new(snippet_len: usize) -> Self {
        Self { snippet_len }
    }

    /// Build the output record for `review`, whose trimmed text is `text`
    pub fn build(&self, review: &Review, text: &str, assessment: Assessment) -> ClassificationResult {
        ClassificationResult {
            id: review.id,
            place: or_default(review.place.as_deref(), DEFAULT_PLACE),
            user: or_default(review.user.as_deref(), DEFAULT_USER),
            timestamp: or_default(review.timestamp.as_deref(), DEFAULT_TIMESTAMP),
            snippet: self.snippet(text),
            full_text: text.to_string(),
            relevancy: assessment.relevancy,
            quality_score: assessment.quality_score,
            flags: assessment.flags,
            evidence: assessment.evidence,
            probabilities: assessment.probabilities,
            confidence: assessment.confidence,
            predicted_class: assessment.predicted_class,
        }
    }

    /// First `snippet_len` characters, with an ellipsis when cut
    pub fn snippet(&self, text: &str) -> String {
        match text.char_indices().nth(self.snippet_len) {
            Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
            None => text.to_string(),
        }
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewcheck_core::Flag;

    fn assessment() -> Assessment {
        Assessment {
            flags: vec![Flag::Irrelevant],
            evidence: vec!["Very short review (low information)".to_string()],
            relevancy: 0.12,
            quality_score: 0.65,
            probabilities: None,
            confidence: None,
            predicted_class: None,
        }
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let review = Review::new("short one").with_id(4).with_user("");
        let result = ResultBuilder::default().build(&review, "short one", assessment());

        assert_eq!(result.id, 4);
        assert_eq!(result.place, DEFAULT_PLACE);
        assert_eq!(result.user, DEFAULT_USER);
        assert_eq!(result.timestamp, DEFAULT_TIMESTAMP);
        assert_eq!(result.snippet, "short one");
    }

    #[test]
    fn test_assessment_passes_through() {
        let review = Review::new("x").with_place("Cafe Roma").with_timestamp("2024-01-02");
        let result = ResultBuilder::default().build(&review, "x", assessment());

        assert_eq!(result.place, "Cafe Roma");
        assert_eq!(result.timestamp, "2024-01-02");
        assert_eq!(result.flags, vec![Flag::Irrelevant]);
        assert_eq!(result.quality_score, 0.65);
        assert_eq!(result.relevancy, 0.12);
    }

    #[test]
    fn test_snippet_truncation() {
        let builder = ResultBuilder::default();
        let exact = "a".repeat(120);
        let long = "b".repeat(121);

        assert_eq!(builder.snippet(&exact), exact);
        let snippet = builder.snippet(&long);
        assert_eq!(snippet.chars().count(), 121);
        assert!(snippet.ends_with(ELLIPSIS));
        assert!(snippet.starts_with(&"b".repeat(120)));
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        let builder = ResultBuilder::new(3);
        assert_eq!(builder.snippet("héllo"), "hél…");
        assert_eq!(builder.snippet("日本語"), "日本語");
    }
}
