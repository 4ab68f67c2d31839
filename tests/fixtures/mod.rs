//! Form inputs and service replies shared by the integration tests

#![allow(dead_code)]

use crop_advisor::models::sample::FormFields;
use serde_json::{json, Value};

/// Required fields only; every optional input left blank.
pub fn loam_form() -> FormFields {
    FormFields::new()
        .with("area", "2.5")
        .with("soil_type", "loam")
        .with("duration", "short")
        .with("month", "6")
        .with("N", "")
        .with("P", "")
        .with("K", "")
        .with("pH", "")
        .with("moisture", "")
        .with("symptoms", "")
}

/// Every field filled in.
pub fn full_form() -> FormFields {
    loam_form()
        .with("N", "45")
        .with("P", "60")
        .with("K", "80")
        .with("pH", "5.4")
        .with("moisture", "33.5")
        .with("symptoms", "yellow_leaves")
}

pub const OPTIONAL_KEYS: &[&str] = &["N", "P", "K", "pH", "moisture", "symptoms"];

pub fn wheat_reply() -> Value {
    json!({"recommendation": "Wheat", "suggestions": ["Add nitrogen"]})
}

pub fn rice_reply_with_diseases() -> Value {
    json!({
        "recommendation": "Rice",
        "suggestions": [
            "Soil pH (5.4) is low. Consider adding liming materials.",
            "Nitrogen (N) (45.0 kg/ha) is low. Apply nitrogen-rich fertilizers."
        ],
        "disease_suggestions": [
            "Yellowing leaves may indicate nitrogen deficiency or root rot.",
            "Consider applying a balanced fertilizer containing nitrogen."
        ]
    })
}

pub fn invalid_month_reply() -> Value {
    json!({"error": "Invalid month"})
}
