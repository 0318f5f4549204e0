//! Valuation domain models.

use serde::{Deserialize, Serialize};

/// Self-reported condition of the property.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    NeedsWork,
    /// Anything the page sends that we do not recognize
    #[serde(other)]
    Unrecognized,
}

impl PropertyCondition {
    /// Parses the `data-value` of a condition card. Unknown values map to
    /// [`PropertyCondition::Unrecognized`] rather than failing.
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "excellent" => PropertyCondition::Excellent,
            "good" => PropertyCondition::Good,
            "fair" => PropertyCondition::Fair,
            "needs-work" => PropertyCondition::NeedsWork,
            _ => PropertyCondition::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCondition::Excellent => "excellent",
            PropertyCondition::Good => "good",
            PropertyCondition::Fair => "fair",
            PropertyCondition::NeedsWork => "needs-work",
            PropertyCondition::Unrecognized => "unrecognized",
        }
    }

    /// Price multiplier applied to the square-footage component.
    pub fn multiplier(&self) -> f64 {
        match self {
            PropertyCondition::Excellent => 1.2,
            PropertyCondition::Good => 1.0,
            PropertyCondition::Fair => 0.85,
            PropertyCondition::NeedsWork => 0.7,
            PropertyCondition::Unrecognized => 1.0,
        }
    }

    /// The four conditions offered as cards on the form.
    pub fn selectable() -> [PropertyCondition; 4] {
        [
            PropertyCondition::Excellent,
            PropertyCondition::Good,
            PropertyCondition::Fair,
            PropertyCondition::NeedsWork,
        ]
    }
}

/// Property attributes collected by the multi-step valuation form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationInput {
    pub square_footage: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub year_built: i64,
    pub condition: PropertyCondition,
}

impl Default for ValuationInput {
    fn default() -> Self {
        Self {
            square_footage: 1500.0,
            bedrooms: 3,
            bathrooms: 2,
            year_built: 1990,
            condition: PropertyCondition::Good,
        }
    }
}

/// Estimated price range, both ends rounded to the nearest thousand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub low: f64,
    pub high: f64,
}
