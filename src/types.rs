//! Common types and data structures

use crate::error::AnalysisError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// The image currently chosen for analysis
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        Self {
            name: name.into(),
            mime: mime.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }
}

/// Prediction payload returned by the analysis service
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub betting_recommendations: Option<Vec<String>>,
}

/// One team prediction
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(default, deserialize_with = "lenient_string")]
    pub team: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,
}

/// Confidence as the service sent it, plus its numeric value when it has one
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Confidence {
    pub value: Option<f64>,
    pub raw: String,
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self {
            value: Some(value),
            raw: value.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Confidence::default(),
            serde_json::Value::Number(n) => Confidence {
                value: n.as_f64(),
                raw: n.to_string(),
            },
            serde_json::Value::String(s) => Confidence {
                value: s.trim().trim_end_matches('%').trim().parse().ok(),
                raw: s,
            },
            other => Confidence {
                value: None,
                raw: other.to_string(),
            },
        })
    }
}

/// Decoded preview image for one selection
#[derive(Clone)]
pub struct Preview {
    pub generation: u64,
    pub image: egui::ColorImage,
}

/// How a finished request ended
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    Live {
        result: AnalysisResult,
        received_at: DateTime<Local>,
    },
    /// The service failed and the demo result stands in for it
    Demo {
        result: AnalysisResult,
        cause: AnalysisError,
        received_at: DateTime<Local>,
    },
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Live { result, .. } | AnalysisOutcome::Demo { result, .. } => result,
        }
    }

    pub fn received_at(&self) -> DateTime<Local> {
        match self {
            AnalysisOutcome::Live { received_at, .. }
            | AnalysisOutcome::Demo { received_at, .. } => *received_at,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, AnalysisOutcome::Demo { .. })
    }
}

/// Widget lifecycle: idle -> loading -> done | failed
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Done(AnalysisOutcome),
    Failed(AnalysisError),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The service is untrusted; a non-string field is shown as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
