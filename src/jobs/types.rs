use serde::{Deserialize, Deserializer, Serialize};

/// One search request body sent to the job-search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderQuery {
    pub search_terms: String,
    pub location: String,
    pub page: String,
    pub fetch_full_text: String,
    pub num_results: String,
}

/// A job record as the provider returns it. Every field is optional so that
/// any partial record still maps onto a `CanonicalJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProviderJob {
    #[serde(default, deserialize_with = "string_or_number")]
    pub job_id: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub linkedin_job_url_cleaned: Option<String>,
    #[serde(default)]
    pub job_url: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
}

// Provider ids arrive as either JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Treat missing and whitespace-only provider strings the same way.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_job_id_is_accepted() {
        let raw: RawProviderJob =
            serde_json::from_str(r#"{"job_id": 3829, "job_title": "Engineer"}"#).unwrap();
        assert_eq!(raw.job_id.as_deref(), Some("3829"));
        assert_eq!(raw.job_title.as_deref(), Some("Engineer"));
        assert!(raw.company_name.is_none());
    }

    #[test]
    fn test_null_and_unknown_fields_are_tolerated() {
        let raw: RawProviderJob = serde_json::from_str(
            r#"{"job_id": null, "location": null, "job_level": "Mid", "normalized_company_name": "acme"}"#,
        )
        .unwrap();
        assert_eq!(raw, RawProviderJob::default());
    }

    #[test]
    fn test_present_skips_blank() {
        assert_eq!(present(&Some("  ".to_string())), None);
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("Pune".to_string())), Some("Pune"));
    }
}
