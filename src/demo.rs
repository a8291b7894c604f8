//! Canned result shown when the analysis service is unavailable

use crate::error::AnalysisError;
use crate::types::{AnalysisOutcome, AnalysisResult, Confidence, Phase, Prediction};
use tracing::warn;

pub fn demo_result() -> AnalysisResult {
    AnalysisResult {
        predictions: vec![
            Prediction {
                team: "Team A".to_string(),
                confidence: Confidence::from(78.0),
                reason: "Players in excellent form, high motivation".to_string(),
            },
            Prediction {
                team: "Team B".to_string(),
                confidence: Confidence::from(65.0),
                reason: "Good tactics, but weak spots in defense".to_string(),
            },
        ],
        betting_recommendations: Some(vec![
            "🚀 Consider a bet on Team A at odds of 1.8+".to_string(),
            "📊 Compare the odds before placing a bet".to_string(),
            "💰 Never stake more than 5% of your bankroll on one match".to_string(),
        ]),
    }
}

/// Turn a finished request into the next phase.
///
/// With `demo_fallback` enabled a failure still produces a result, but the
/// outcome records the cause so the UI can say it is showing demo data.
pub fn resolve(result: Result<AnalysisResult, AnalysisError>, demo_fallback: bool) -> Phase {
    let received_at = chrono::Local::now();
    match result {
        Ok(result) => Phase::Done(AnalysisOutcome::Live {
            result,
            received_at,
        }),
        Err(cause) if demo_fallback => {
            warn!(error = %cause, "Analysis service unavailable, showing demo data");
            Phase::Done(AnalysisOutcome::Demo {
                result: demo_result(),
                cause,
                received_at,
            })
        }
        Err(cause) => {
            warn!(error = %cause, "Analysis failed");
            Phase::Failed(cause)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_has_two_predictions_and_recommendations() {
        let demo = demo_result();
        assert_eq!(demo.predictions.len(), 2);
        assert_eq!(demo.betting_recommendations.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn failure_with_fallback_is_marked_demo() {
        let phase = resolve(Err(AnalysisError::Status(503)), true);
        match phase {
            Phase::Done(outcome) => {
                assert!(outcome.is_demo());
                assert_eq!(outcome.result(), &demo_result());
                if let AnalysisOutcome::Demo { cause, .. } = outcome {
                    assert_eq!(cause, AnalysisError::Status(503));
                }
            }
            other => panic!("expected demo outcome, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_fallback_is_an_error() {
        let phase = resolve(Err(AnalysisError::Network("refused".into())), false);
        assert_eq!(phase, Phase::Failed(AnalysisError::Network("refused".into())));
    }

    #[test]
    fn success_is_live() {
        let phase = resolve(Ok(AnalysisResult::default()), true);
        assert!(matches!(phase, Phase::Done(AnalysisOutcome::Live { .. })));
    }
}
