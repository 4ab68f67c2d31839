use std::collections::HashMap;

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Raw form field values as submitted by the page.
///
/// Missing keys read as the empty string, the same as an untouched input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful for fixtures.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Request payload sent to the recommendation service.
///
/// Every optional field is always serialized: `None` goes out as `null`.
/// `area` and `month` are `None` only when the entry could not be read as a
/// number; the validation policy decides whether that blocks dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct SoilSample {
    #[garde(required)]
    pub area: Option<f64>,

    #[garde(skip)]
    pub soil_type: String,

    #[garde(skip)]
    pub duration: String,

    #[garde(required)]
    pub month: Option<i64>,

    #[serde(rename = "N")]
    #[garde(skip)]
    pub nitrogen: Option<f64>,

    #[serde(rename = "P")]
    #[garde(skip)]
    pub phosphorus: Option<f64>,

    #[serde(rename = "K")]
    #[garde(skip)]
    pub potassium: Option<f64>,

    #[serde(rename = "pH")]
    #[garde(skip)]
    pub ph: Option<f64>,

    #[garde(skip)]
    pub moisture: Option<f64>,

    #[garde(skip)]
    pub symptoms: Option<String>,
}
