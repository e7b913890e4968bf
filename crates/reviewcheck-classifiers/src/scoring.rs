//! Score aggregation
//!
//! Turns either engine's raw signal into flags, evidence and scores. The
//! formulas differ per engine, the output shape does not.

use crate::classes::ReviewClass;
use crate::engine::ClassificationSignal;
use crate::heuristic::HeuristicSignal;
use crate::probabilistic::ProbabilisticSignal;
use reviewcheck_core::Flag;
use std::collections::BTreeMap;

const PLACE_MENTION_BONUS: f64 = 0.4;
const DOMAIN_BONUS_CAP: f64 = 0.6;

const ADVERTISEMENT_PENALTY: f64 = 0.25;
const IRRELEVANT_PENALTY: f64 = 0.35;
const RANT_PENALTY: f64 = 0.25;
const MULTI_FLAG_PENALTY: f64 = 0.1;
const LINK_PENALTY: f64 = 0.15;

/// Scored decision, ready to be shaped into a result record
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub flags: Vec<Flag>,
    pub evidence: Vec<String>,
    pub relevancy: f64,
    pub quality_score: f64,
    /// UI label -> probability (probabilistic engine only)
    pub probabilities: Option<BTreeMap<String, f64>>,
    pub confidence: Option<f64>,
    pub predicted_class: Option<String>,
}

/// Clamp to [0, 1] and round to 2 decimals
pub fn clamp_score(value: f64) -> f64 {
    round2(value.clamp(0.0, 1.0))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score whichever signal the selected engine produced
pub fn aggregate(signal: ClassificationSignal) -> Assessment {
    match signal {
        ClassificationSignal::Probabilistic(signal) => score_probabilistic(signal),
        ClassificationSignal::Heuristic(signal) => score_heuristic(signal),
    }
}

pub fn score_probabilistic(signal: ProbabilisticSignal) -> Assessment {
    let mut by_class: BTreeMap<&'static str, f64> =
        ReviewClass::ALL.iter().map(|c| (c.ui_label(), 0.0)).collect();
    for (name, p) in &signal.probabilities {
        if let Some(class) = ReviewClass::from_internal(name) {
            by_class.insert(class.ui_label(), *p);
        }
    }
    let prob = |class: ReviewClass| by_class.get(class.ui_label()).copied().unwrap_or(0.0);

    let predicted = ReviewClass::from_internal(&signal.predicted_class);
    let flags: Vec<Flag> = predicted.and_then(|c| c.flag()).into_iter().collect();

    let quality = if predicted == Some(ReviewClass::Feedback) {
        prob(ReviewClass::Feedback)
    } else {
        let worst_violation = ReviewClass::ALL
            .into_iter()
            .filter(ReviewClass::is_violation)
            .map(prob)
            .fold(0.0, f64::max);
        1.0 - worst_violation
    };
    let relevancy = 1.0 - prob(ReviewClass::Irrelevant);

    let evidence = signal
        .probabilities
        .iter()
        .map(|(name, p)| format!("{name}: {p:.2}"))
        .collect();

    Assessment {
        flags,
        evidence,
        relevancy: clamp_score(relevancy),
        quality_score: clamp_score(quality),
        confidence: Some(clamp_score(signal.top_probability())),
        probabilities: Some(
            by_class
                .into_iter()
                .map(|(label, p)| (label.to_string(), p))
                .collect(),
        ),
        predicted_class: Some(signal.predicted_class),
    }
}

pub fn score_heuristic(signal: HeuristicSignal) -> Assessment {
    let mut relevancy = 0.0;
    if signal.place_mentioned {
        relevancy += PLACE_MENTION_BONUS;
    }
    relevancy += ((1.0 + signal.domain_hits as f64).ln() / 2.0).min(DOMAIN_BONUS_CAP);

    let mut quality = 1.0;
    if signal.flags.contains(&Flag::Advertisement) {
        quality -= ADVERTISEMENT_PENALTY;
    }
    if signal.flags.contains(&Flag::Irrelevant) {
        quality -= IRRELEVANT_PENALTY;
    }
    if signal.flags.iter().any(Flag::is_rant) {
        quality -= RANT_PENALTY;
    }
    if signal.flags.len() >= 2 {
        quality -= MULTI_FLAG_PENALTY;
    }
    if signal.url_detected {
        quality -= LINK_PENALTY;
    }

    Assessment {
        flags: signal.flags,
        evidence: signal.evidence,
        relevancy: clamp_score(relevancy),
        quality_score: clamp_score(quality),
        probabilities: None,
        confidence: None,
        predicted_class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probabilistic(predicted: &str, probs: &[(&str, f64)]) -> ProbabilisticSignal {
        ProbabilisticSignal {
            predicted_class: predicted.to_string(),
            probabilities: probs.iter().map(|(c, p)| (c.to_string(), *p)).collect(),
        }
    }

    fn heuristic(flags: Vec<Flag>, url: bool, domain_hits: usize, place: bool) -> HeuristicSignal {
        HeuristicSignal {
            evidence: flags.iter().map(|f| f.label().to_string()).collect(),
            flags,
            url_detected: url,
            domain_hits,
            place_mentioned: place,
            sentiment: 0.0,
            token_count: 10,
        }
    }

    #[test]
    fn test_clean_prediction_quality_is_clean_probability() {
        let assessment = score_probabilistic(probabilistic(
            "feedback",
            &[("advertisement", 0.1), ("feedback", 0.7), ("irrelevant", 0.15), ("rant", 0.05)],
        ));

        assert!(assessment.flags.is_empty());
        assert_eq!(assessment.quality_score, 0.7);
        assert_eq!(assessment.relevancy, 0.85);
        assert_eq!(assessment.confidence, Some(0.7));
        assert_eq!(
            assessment.evidence,
            vec!["advertisement: 0.10", "feedback: 0.70", "irrelevant: 0.15", "rant: 0.05"]
        );
    }

    #[test]
    fn test_violation_prediction() {
        let assessment = score_probabilistic(probabilistic(
            "rant",
            &[("advertisement", 0.2), ("feedback", 0.1), ("irrelevant", 0.1), ("rant", 0.6)],
        ));

        assert_eq!(assessment.flags, vec![Flag::RantNoVisit]);
        assert_eq!(assessment.quality_score, 0.4);
        assert_eq!(assessment.predicted_class.as_deref(), Some("rant"));
    }

    #[test]
    fn test_ui_labels_missing_from_model_default_to_zero() {
        let assessment = score_probabilistic(probabilistic(
            "Advertisement",
            &[("Advertisement", 0.8), ("feedback", 0.2)],
        ));

        let probs = assessment.probabilities.unwrap();
        assert_eq!(probs.len(), 4);
        assert_eq!(probs["Advertisement"], 0.8);
        assert_eq!(probs["Irrelevant"], 0.0);
        assert_eq!(probs["Rant (no visit)"], 0.0);
        assert_eq!(assessment.flags, vec![Flag::Advertisement]);
        assert_eq!(assessment.relevancy, 1.0);
    }

    #[test]
    fn test_heuristic_penalties_stack() {
        let assessment = score_heuristic(heuristic(
            vec![Flag::Advertisement, Flag::Irrelevant],
            true,
            0,
            false,
        ));

        // 1.0 - 0.25 - 0.35 - 0.1 - 0.15
        assert_eq!(assessment.quality_score, 0.15);
        assert_eq!(assessment.relevancy, 0.0);
        assert_eq!(assessment.confidence, None);
        assert!(assessment.probabilities.is_none());
    }

    #[test]
    fn test_heuristic_quality_never_negative() {
        let assessment = score_heuristic(heuristic(
            vec![Flag::Advertisement, Flag::Irrelevant, Flag::RantNoVisit],
            true,
            0,
            false,
        ));

        assert_eq!(assessment.quality_score, 0.0);
    }

    #[test]
    fn test_heuristic_relevancy() {
        let one_hit = score_heuristic(heuristic(vec![], false, 1, false));
        assert_eq!(one_hit.relevancy, round2(2f64.ln() / 2.0));

        let capped = score_heuristic(heuristic(vec![], false, 20, true));
        assert_eq!(capped.relevancy, 1.0);

        let place_only = score_heuristic(heuristic(vec![], false, 0, true));
        assert_eq!(place_only.relevancy, 0.4);
        assert_eq!(place_only.quality_score, 1.0);
    }

    #[test]
    fn test_rant_penalty_applies_once() {
        let assessment = score_heuristic(heuristic(vec![Flag::Rant], false, 0, false));
        assert_eq!(assessment.quality_score, 0.75);
    }
}
