use serde::{Deserialize, Serialize};

/// Response body of `GET /diseases`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseasesRes {
    pub diseases: Vec<DiseaseRecord>,
}

/// One entry of the disease catalogue.
///
/// Only `symptoms` is read by the client; the service also sends the disease name and
/// description, which are kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body of `POST /predict`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictReq {
    pub symptoms: Vec<String>,
    pub description: String,
}

/// Response body of `POST /predict`.
///
/// `predictions` may be missing entirely; that is treated the same as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictRes {
    #[serde(default)]
    pub predictions: Option<Vec<PredictionRecord>>,
}

impl PredictRes {
    /// Returns the prediction list, treating an absent list as empty.
    pub fn into_predictions(self) -> Vec<PredictionRecord> {
        self.predictions.unwrap_or_default()
    }
}

/// One disease match as returned by the prediction service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub disease: String,
    pub match_percentage: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}
