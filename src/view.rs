//! Render-target-agnostic view model for the classification results.
//!
//! Everything in here is a pure mapping from a response (or a failure) to
//! display text. Binding the model to an actual display happens through
//! [`ResultsDisplay`].

use crate::error::ClassifyError;
use crate::response::{ClassificationResponse, PlantInfo};

pub const ANALYZING: &str = "Analyzing...";
pub const PROCESSING: &str = "Processing";
pub const NOT_RECOGNIZED: &str = "Not a recognized plant";
pub const NOT_APPLICABLE: &str = "N/A";
pub const ERROR_MARKER: &str = "Error";
pub const RETRY_PROMPT: &str = "An error occurred while processing your image. Please try again.";
pub const NOT_RECOGNIZED_DESCRIPTION: &str = "This doesn't appear to be one of the plants our AI can currently identify. Please try with a different image.";
pub const IDENTIFIED_PLANT: &str = "(Identified Plant)";
pub const ORIGIN_UNKNOWN: &str = "Origin unknown";
pub const USES_UNAVAILABLE: &str = "Uses info unavailable";
pub const FAMILY_UNKNOWN: &str = "Unknown";
pub const SUNLIGHT_FALLBACK: &str = "Sunlight requirements vary";
pub const WATERING_FALLBACK: &str = "Check watering needs";

const EMPTY_WIDTH: &str = "0%";

/// Auxiliary panel shown only when the class matched a database entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailPanel {
    pub visible: bool,
    pub family: String,
    pub origin: String,
    pub uses: String,
    /// The image sub-element is shown only when this is set.
    pub image_url: Option<String>,
}

impl DetailPanel {
    fn hidden() -> Self {
        Self::default()
    }

    fn from_info(info: &PlantInfo) -> Self {
        Self {
            visible: true,
            family: text_or(&info.family, FAMILY_UNKNOWN),
            origin: text_or(&info.origin, ORIGIN_UNKNOWN),
            uses: text_or(&info.uses, USES_UNAVAILABLE),
            image_url: present(&info.image_url).map(str::to_string),
        }
    }
}

/// Text content of every field in the results region.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultFields {
    pub name: String,
    pub scientific_name: String,
    pub confidence_text: String,
    /// CSS-style width of the confidence bar, e.g. `87.50%`.
    pub confidence_width: String,
    pub description: String,
    pub origin: String,
    pub uses: String,
    pub detail: DetailPanel,
}

impl Default for ResultFields {
    fn default() -> Self {
        Self::analyzing()
    }
}

impl ResultFields {
    /// Placeholder shown while a request is outstanding.
    ///
    /// Every field is reset so nothing from a previous result survives.
    pub fn analyzing() -> Self {
        Self {
            name: ANALYZING.to_string(),
            scientific_name: String::new(),
            confidence_text: PROCESSING.to_string(),
            confidence_width: EMPTY_WIDTH.to_string(),
            description: String::new(),
            origin: String::new(),
            uses: String::new(),
            detail: DetailPanel::hidden(),
        }
    }

    /// Maps a successful response onto the results fields.
    ///
    /// Missing or blank `plant_info` entries fall back to generic text built
    /// from the class name and confidence.
    pub fn from_response(response: &ClassificationResponse) -> Self {
        let prediction = &response.prediction;
        let percent = format!("{:.2}", prediction.confidence_percent());
        let confidence_text = format!("{percent}% confidence");
        let confidence_width = format!("{percent}%");

        if !prediction.is_plant {
            return Self {
                name: NOT_RECOGNIZED.to_string(),
                scientific_name: String::new(),
                confidence_text,
                confidence_width,
                description: NOT_RECOGNIZED_DESCRIPTION.to_string(),
                origin: NOT_APPLICABLE.to_string(),
                uses: NOT_APPLICABLE.to_string(),
                detail: DetailPanel::hidden(),
            };
        }

        let class_name = &prediction.class_name;
        match &response.plant_info {
            Some(info) => Self {
                name: class_name.clone(),
                scientific_name: text_or(&info.scientific_name, IDENTIFIED_PLANT),
                confidence_text,
                confidence_width,
                description: present(&info.description)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Identified as {class_name}.")),
                origin: text_or(&info.origin, ORIGIN_UNKNOWN),
                uses: text_or(&info.uses, USES_UNAVAILABLE),
                detail: DetailPanel::from_info(info),
            },
            None => Self {
                name: class_name.clone(),
                scientific_name: IDENTIFIED_PLANT.to_string(),
                confidence_text,
                confidence_width,
                description: format!(
                    "This has been identified as {class_name} with {percent}% confidence."
                ),
                origin: SUNLIGHT_FALLBACK.to_string(),
                uses: WATERING_FALLBACK.to_string(),
                detail: DetailPanel::hidden(),
            },
        }
    }

    /// Fields shown after a failed request; the error text lands in the
    /// scientific-name slot.
    pub fn from_error(error: &ClassifyError) -> Self {
        Self {
            name: ERROR_MARKER.to_string(),
            scientific_name: error.to_string(),
            confidence_text: String::new(),
            confidence_width: EMPTY_WIDTH.to_string(),
            description: RETRY_PROMPT.to_string(),
            origin: String::new(),
            uses: String::new(),
            detail: DetailPanel::hidden(),
        }
    }
}

/// State of the whole results region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsView {
    /// The region starts hidden and is revealed by the first preview.
    pub visible: bool,
    /// `data:` URL of the uploaded image.
    pub preview: Option<String>,
    pub fields: ResultFields,
}

/// Display layer the results view is bound to.
pub trait ResultsDisplay {
    /// Draws the current state of the results region.
    fn render(&mut self, view: &ResultsView);

    /// Brings the results region into view after a preview was shown.
    fn reveal(&mut self) {}
}

// blank database columns count as missing
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    present(value).unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Prediction;

    fn response(is_plant: bool, plant_info: Option<PlantInfo>) -> ClassificationResponse {
        ClassificationResponse {
            filename: Some("leaf.jpg".to_string()),
            prediction: Prediction {
                is_plant,
                class_name: "Aloe Vera".to_string(),
                confidence: 0.875,
            },
            plant_info,
        }
    }

    fn full_info() -> PlantInfo {
        PlantInfo {
            scientific_name: Some("Aloe barbadensis miller".to_string()),
            description: Some("A succulent.".to_string()),
            origin: Some("Arabian Peninsula".to_string()),
            uses: Some("Skin care".to_string()),
            family: Some("Asphodelaceae".to_string()),
            image_url: Some("/static/aloe.jpg".to_string()),
        }
    }

    #[test]
    fn test_plant_with_full_info() {
        let fields = ResultFields::from_response(&response(true, Some(full_info())));

        assert_eq!(fields.name, "Aloe Vera");
        assert_eq!(fields.scientific_name, "Aloe barbadensis miller");
        assert_eq!(fields.confidence_text, "87.50% confidence");
        assert_eq!(fields.confidence_width, "87.50%");
        assert_eq!(fields.description, "A succulent.");
        assert_eq!(fields.origin, "Arabian Peninsula");
        assert_eq!(fields.uses, "Skin care");
        assert!(fields.detail.visible);
        assert_eq!(fields.detail.family, "Asphodelaceae");
        assert_eq!(fields.detail.image_url.as_deref(), Some("/static/aloe.jpg"));
    }

    #[test]
    fn test_plant_with_partial_info_falls_back_per_field() {
        let info = PlantInfo {
            family: Some("Asphodelaceae".to_string()),
            ..PlantInfo::default()
        };
        let fields = ResultFields::from_response(&response(true, Some(info)));

        assert_eq!(fields.scientific_name, IDENTIFIED_PLANT);
        assert_eq!(fields.description, "Identified as Aloe Vera.");
        assert_eq!(fields.origin, ORIGIN_UNKNOWN);
        assert_eq!(fields.uses, USES_UNAVAILABLE);
        assert!(fields.detail.visible);
        assert!(fields.detail.image_url.is_none());
    }

    #[test]
    fn test_blank_info_fields_fall_back() {
        let info = PlantInfo {
            scientific_name: Some(String::new()),
            description: Some(String::new()),
            origin: Some("  ".to_string()),
            uses: Some(String::new()),
            family: Some(String::new()),
            image_url: Some(String::new()),
        };
        let fields = ResultFields::from_response(&response(true, Some(info)));

        assert_eq!(fields.scientific_name, IDENTIFIED_PLANT);
        assert_eq!(fields.description, "Identified as Aloe Vera.");
        assert_eq!(fields.origin, ORIGIN_UNKNOWN);
        assert_eq!(fields.uses, USES_UNAVAILABLE);
        assert!(fields.detail.visible);
        assert_eq!(fields.detail.family, FAMILY_UNKNOWN);
        assert_eq!(fields.detail.origin, ORIGIN_UNKNOWN);
        assert!(fields.detail.image_url.is_none());
    }

    #[test]
    fn test_plant_without_info() {
        let fields = ResultFields::from_response(&response(true, None));

        assert_eq!(fields.name, "Aloe Vera");
        assert_eq!(fields.scientific_name, IDENTIFIED_PLANT);
        assert_eq!(
            fields.description,
            "This has been identified as Aloe Vera with 87.50% confidence."
        );
        assert_eq!(fields.origin, SUNLIGHT_FALLBACK);
        assert_eq!(fields.uses, WATERING_FALLBACK);
        assert!(!fields.detail.visible);
    }

    #[test]
    fn test_not_a_plant_hides_detail_even_with_info() {
        let fields = ResultFields::from_response(&response(false, Some(full_info())));

        assert_eq!(fields.name, NOT_RECOGNIZED);
        assert_eq!(fields.scientific_name, "");
        assert_eq!(fields.confidence_text, "87.50% confidence");
        assert_eq!(fields.origin, NOT_APPLICABLE);
        assert_eq!(fields.uses, NOT_APPLICABLE);
        assert_eq!(fields.description, NOT_RECOGNIZED_DESCRIPTION);
        assert!(!fields.detail.visible);
    }

    #[test]
    fn test_error_fields() {
        let fields = ResultFields::from_error(&ClassifyError::Status(500));

        assert_eq!(fields.name, ERROR_MARKER);
        assert_eq!(fields.scientific_name, "Server error: 500");
        assert_eq!(fields.description, RETRY_PROMPT);
        assert_eq!(fields.confidence_width, "0%");
        assert_eq!(fields.origin, "");
        assert!(!fields.detail.visible);
    }

    #[test]
    fn test_confidence_rounding() {
        let mut resp = response(true, None);
        resp.prediction.confidence = 0.123456;
        let fields = ResultFields::from_response(&resp);
        assert_eq!(fields.confidence_width, "12.35%");

        resp.prediction.confidence = 1.0;
        let fields = ResultFields::from_response(&resp);
        assert_eq!(fields.confidence_text, "100.00% confidence");
    }
}
