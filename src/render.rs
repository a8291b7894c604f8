//! Display model for an analysis result, independent of egui

use crate::types::{AnalysisResult, Confidence};

pub const NOT_RECOGNIZED: &str = "Could not recognize the teams in this photo";
pub const RECOMMENDATIONS_HEADING: &str = "Betting recommendations";

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCard {
    pub team: String,
    pub confidence: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Cards {
        cards: Vec<PredictionCard>,
        recommendations: Option<Vec<String>>,
    },
    Placeholder(&'static str),
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        if result.predictions.is_empty() {
            return ResultView::Placeholder(NOT_RECOGNIZED);
        }

        let cards = result
            .predictions
            .iter()
            .map(|p| PredictionCard {
                team: p.team.clone(),
                confidence: format!("Confidence: {}%", format_confidence(&p.confidence)),
                reason: p.reason.clone(),
            })
            .collect();

        ResultView::Cards {
            cards,
            recommendations: result.betting_recommendations.clone(),
        }
    }
}

/// Whole numbers print without decimals, other numbers with one. Anything
/// the service sent that is not a number is echoed as-is.
pub fn format_confidence(confidence: &Confidence) -> String {
    match confidence.value {
        Some(value) if value.is_finite() && value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) if value.is_finite() => format!("{value:.1}"),
        _ if confidence.raw.is_empty() => "?".to_string(),
        _ => confidence.raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_result;
    use crate::types::Prediction;

    #[test]
    fn empty_predictions_show_only_placeholder() {
        let result = AnalysisResult {
            predictions: vec![],
            betting_recommendations: Some(vec!["ignored".into()]),
        };
        assert_eq!(
            ResultView::from_result(&result),
            ResultView::Placeholder(NOT_RECOGNIZED)
        );
    }

    #[test]
    fn demo_renders_like_a_live_response() {
        let live: AnalysisResult = serde_json::from_str(
            r#"{
                "predictions": [
                    {"team": "Team A", "confidence": 78, "reason": "Players in excellent form, high motivation"},
                    {"team": "Team B", "confidence": 65, "reason": "Good tactics, but weak spots in defense"}
                ],
                "betting_recommendations": [
                    "🚀 Consider a bet on Team A at odds of 1.8+",
                    "📊 Compare the odds before placing a bet",
                    "💰 Never stake more than 5% of your bankroll on one match"
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            ResultView::from_result(&demo_result()),
            ResultView::from_result(&live)
        );
    }

    #[test]
    fn cards_carry_team_confidence_and_reason() {
        let result = AnalysisResult {
            predictions: vec![Prediction {
                team: "Blues".into(),
                confidence: Confidence::from(55.3),
                reason: "Set pieces".into(),
            }],
            betting_recommendations: None,
        };
        match ResultView::from_result(&result) {
            ResultView::Cards {
                cards,
                recommendations,
            } => {
                assert_eq!(
                    cards,
                    vec![PredictionCard {
                        team: "Blues".into(),
                        confidence: "Confidence: 55.3%".into(),
                        reason: "Set pieces".into(),
                    }]
                );
                assert!(recommendations.is_none());
            }
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn empty_recommendation_list_is_still_present() {
        let result = AnalysisResult {
            predictions: vec![Prediction::default()],
            betting_recommendations: Some(vec![]),
        };
        assert!(matches!(
            ResultView::from_result(&result),
            ResultView::Cards { recommendations: Some(ref r), .. } if r.is_empty()
        ));
    }

    #[test]
    fn confidence_formatting() {
        assert_eq!(format_confidence(&Confidence::from(78.0)), "78");
        assert_eq!(format_confidence(&Confidence::from(0.0)), "0");
        assert_eq!(format_confidence(&Confidence::from(66.66)), "66.7");
        assert_eq!(format_confidence(&Confidence::default()), "?");
    }

    fn single_card(json: &str) -> PredictionCard {
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        match ResultView::from_result(&result) {
            ResultView::Cards { mut cards, .. } => cards.remove(0),
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_confidence_is_echoed() {
        let card = single_card(r#"{"predictions": [{"team": "Reds", "confidence": "high"}]}"#);
        assert_eq!(card.confidence, "Confidence: high%");
    }

    #[test]
    fn huge_confidence_is_not_truncated() {
        let card = single_card(r#"{"predictions": [{"team": "Reds", "confidence": 1e20}]}"#);
        assert_eq!(card.confidence, "Confidence: 100000000000000000000%");
    }
}
