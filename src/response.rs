use serde::{Deserialize, Serialize};

/// Model output for one uploaded image.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Prediction {
    pub is_plant: bool,
    pub class_name: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Prediction {
    /// Confidence scaled to a percentage.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Database record matched to the predicted class.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PlantInfo {
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub uses: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body returned by the classification endpoint.
///
/// `plant_info` is only present when the class matched a database entry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ClassificationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub prediction: Prediction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_info: Option<PlantInfo>,
}
