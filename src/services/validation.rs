use std::fmt;

use garde::Validate;
use serde::Deserialize;
use strum::{Display, EnumString};
use tracing::warn;

use crate::models::sample::SoilSample;

/// What to do when `area` or `month` did not parse as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationPolicy {
    /// Send the sample anyway; the service sees `null` and decides.
    #[default]
    Passthrough,
    /// Block dispatch and report the malformed fields on the page.
    Reject,
}

/// Required fields that failed numeric coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub fields: Vec<String>,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.fields.len() == 1 { "is" } else { "are" };
        write!(f, "{} {} not a number", self.fields.join(", "), verb)
    }
}

impl ValidationPolicy {
    /// Apply the policy to a normalized sample.
    ///
    /// Only type coercion is checked. Range and vocabulary checks belong to
    /// the recommendation service.
    pub fn check(self, sample: &SoilSample) -> Result<(), Rejection> {
        let fields = unparsed_required_fields(sample);
        if fields.is_empty() {
            return Ok(());
        }

        match self {
            ValidationPolicy::Passthrough => {
                warn!(fields = ?fields, "Dispatching sample with unparsed required fields");
                Ok(())
            }
            ValidationPolicy::Reject => Err(Rejection { fields }),
        }
    }
}

fn unparsed_required_fields(sample: &SoilSample) -> Vec<String> {
    match sample.validate() {
        Ok(()) => Vec::new(),
        Err(report) => report.iter().map(|(path, _)| path.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample(area: Option<f64>, month: Option<i64>) -> SoilSample {
        SoilSample {
            area,
            soil_type: "clay".to_string(),
            duration: "long".to_string(),
            month,
            nitrogen: None,
            phosphorus: None,
            potassium: None,
            ph: None,
            moisture: None,
            symptoms: None,
        }
    }

    #[test]
    fn test_well_formed_sample_passes_both_policies() {
        let sample = sample(Some(1.0), Some(3));
        assert!(ValidationPolicy::Passthrough.check(&sample).is_ok());
        assert!(ValidationPolicy::Reject.check(&sample).is_ok());
    }

    #[test]
    fn test_passthrough_lets_malformed_sample_through() {
        let sample = sample(None, None);
        assert!(ValidationPolicy::Passthrough.check(&sample).is_ok());
    }

    #[test]
    fn test_reject_names_every_malformed_field() {
        let rejection = ValidationPolicy::Reject
            .check(&sample(None, None))
            .unwrap_err();
        assert!(rejection.fields.contains(&"area".to_string()));
        assert!(rejection.fields.contains(&"month".to_string()));
        assert_eq!(rejection.fields.len(), 2);
    }

    #[test]
    fn test_reject_single_field_message() {
        let rejection = ValidationPolicy::Reject
            .check(&sample(Some(2.0), None))
            .unwrap_err();
        assert_eq!(rejection.to_string(), "month is not a number");
    }

    #[test]
    fn test_out_of_range_month_is_not_rejected() {
        assert!(ValidationPolicy::Reject.check(&sample(Some(2.0), Some(13))).is_ok());
    }

    #[test]
    fn test_policy_parses_from_config_string() {
        assert_eq!(ValidationPolicy::from_str("reject").unwrap(), ValidationPolicy::Reject);
        assert_eq!(ValidationPolicy::Passthrough.to_string(), "passthrough");
        assert!(ValidationPolicy::from_str("strict").is_err());
    }
}
