//! Property tests for classification invariants

mod common;

use proptest::prelude::*;
use reviewcheck_classifiers::prelude::*;
use std::sync::Arc;

fn engines() -> (ReviewClassifier, ReviewClassifier, ProbabilisticEngine) {
    let state = common::loaded_state();
    (
        ReviewClassifier::new(Arc::new(HeuristicEngine::new().unwrap())),
        ReviewClassifier::new(Arc::new(ProbabilisticEngine::new(state.clone()))),
        ProbabilisticEngine::new(state),
    )
}

fn review_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "food", "service", "deal", "click", "bitcoin", "election", "never", "heard", "great",
        "terrible", "www.example.com", "buy now", "the", "was", "and", "very", "!", "café",
    ]);
    prop::collection::vec(words, 1..30).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn probabilities_sum_to_one(text in review_text()) {
        let (_, _, engine) = engines();
        let signal = engine.classify(&text).unwrap();

        let total: f64 = signal.probabilities.iter().map(|(_, p)| p).sum();
        prop_assert!((total - 1.0).abs() < 1e-6);
        prop_assert!(signal.probabilities.iter().all(|(_, p)| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn prediction_is_first_argmax(text in review_text()) {
        let (_, _, engine) = engines();
        let signal = engine.classify(&text).unwrap();

        let top = signal.top_probability();
        let first_max = signal
            .probabilities
            .iter()
            .find(|(_, p)| *p == top)
            .map(|(c, _)| c.clone())
            .unwrap();
        prop_assert_eq!(signal.predicted_class, first_max);
    }

    #[test]
    fn scores_stay_in_unit_interval(text in review_text(), place in "[A-Za-z ]{0,12}") {
        let (heuristic, probabilistic, _) = engines();
        let review = Review::new(text).with_place(place);

        for classifier in [&heuristic, &probabilistic] {
            let result = classifier.analyze(&review).unwrap();
            prop_assert!((0.0..=1.0).contains(&result.quality_score));
            prop_assert!((0.0..=1.0).contains(&result.relevancy));
            if let Some(confidence) = result.confidence {
                prop_assert!((0.0..=1.0).contains(&confidence));
            }
        }
    }

    #[test]
    fn classification_is_deterministic(text in review_text()) {
        let (heuristic, probabilistic, _) = engines();
        let review = Review::new(text).with_place("Cafe");

        prop_assert_eq!(heuristic.analyze(&review).unwrap(), heuristic.analyze(&review).unwrap());
        prop_assert_eq!(
            probabilistic.analyze(&review).unwrap(),
            probabilistic.analyze(&review).unwrap()
        );
    }

    #[test]
    fn heuristic_flags_are_unique(text in review_text()) {
        let (heuristic, _, _) = engines();
        let result = heuristic.analyze(&Review::new(text)).unwrap();

        let mut seen = result.flags.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), result.flags.len());
    }
}
