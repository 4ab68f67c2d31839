use serde::{Deserialize, Deserializer};

/// Successful reply from the recommendation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationResult {
    pub recommendation: String,

    #[serde(default, deserialize_with = "nullable_list")]
    pub suggestions: Vec<String>,

    #[serde(default, deserialize_with = "nullable_list")]
    pub disease_suggestions: Vec<String>,
}

/// Body of a non-2xx reply. `error` may be missing entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Final outcome of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx with a parsed recommendation.
    Success(RecommendationResult),
    /// Completed exchange where the service reported a failure.
    ServiceError(String),
    /// The exchange never completed, or its success body was unreadable.
    TransportError(String),
}

impl Outcome {
    /// Metric label for this outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::ServiceError(_) => "service_error",
            Outcome::TransportError(_) => "transport_error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let result: RecommendationResult =
            serde_json::from_str(r#"{"recommendation":"Rice"}"#).unwrap();
        assert_eq!(result.recommendation, "Rice");
        assert!(result.suggestions.is_empty());
        assert!(result.disease_suggestions.is_empty());
    }

    #[test]
    fn test_null_lists_default_to_empty() {
        let result: RecommendationResult = serde_json::from_str(
            r#"{"recommendation":"Rice","suggestions":null,"disease_suggestions":["Rotate crops"]}"#,
        )
        .unwrap();
        assert!(result.suggestions.is_empty());
        assert_eq!(result.disease_suggestions, vec!["Rotate crops"]);
    }

    #[test]
    fn test_missing_recommendation_is_rejected() {
        let parsed = serde_json::from_str::<RecommendationResult>(r#"{"suggestions":[]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_error_body_without_error_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }
}
