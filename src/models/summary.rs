use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Success payload of the summarize endpoint.
///
/// Both fields default to empty so a structurally valid but incomplete
/// response decodes and can be rejected with a specific message instead of a
/// generic JSON error.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub id: String,
}

impl SummarizeResponse {
    pub fn is_complete(&self) -> bool {
        !self.summary.is_empty() && !self.id.is_empty()
    }
}

/// Client-held copy of a completed summarization, kept alongside the URL
/// that was submitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSummary {
    pub id: String,
    pub summary: String,
    pub original_url: String,
}

/// Persisted summary record returned by the lookup endpoint. Immutable once
/// created: resolving the same id always yields identical content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub id: String,
    pub summary: String,
    pub original_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
}

impl SummaryRecord {
    /// First line of the summary with markdown emphasis stripped, used as a
    /// display title.
    pub fn title(&self) -> String {
        self.summary
            .lines()
            .next()
            .unwrap_or("Resumo da Notícia")
            .replace(['*', '#'], "")
            .trim()
            .to_string()
    }
}

/// Firestore serializes timestamps as `{_seconds, _nanoseconds}`; other code
/// paths may hand back epoch milliseconds or an RFC 3339 string. Accept all
/// three, truncating sub-millisecond precision.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCreatedAt {
    Structured {
        #[serde(rename = "_seconds")]
        seconds: i64,
        #[serde(rename = "_nanoseconds")]
        nanoseconds: i64,
    },
    Millis(i64),
    Text(String),
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawCreatedAt::deserialize(deserializer)?;
    let parsed = match raw {
        RawCreatedAt::Structured {
            seconds,
            nanoseconds,
        } => Utc
            .timestamp_millis_opt(seconds * 1000 + nanoseconds / 1_000_000)
            .single(),
        RawCreatedAt::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
        RawCreatedAt::Text(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
    };
    parsed.ok_or_else(|| de::Error::custom("invalid createdAt value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(created_at: &str) -> String {
        format!(
            r##"{{
                "id": "abc123",
                "summary": "# Título\nCorpo do resumo",
                "originalUrl": "https://example.com/a",
                "category": "Tecnologia",
                "subcategory": "Inteligência Artificial",
                "createdAt": {created_at}
            }}"##
        )
    }

    #[test]
    fn decodes_firestore_timestamp_to_millis() {
        let json = record_json(r#"{"_seconds": 1700000000, "_nanoseconds": 500000000}"#);
        let record: SummaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.created_at.timestamp_millis(), 1_700_000_000_500);
    }

    #[test]
    fn decodes_epoch_millis_timestamp() {
        let json = record_json("1700000000500");
        let record: SummaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.created_at.timestamp_millis(), 1_700_000_000_500);
    }

    #[test]
    fn decodes_rfc3339_timestamp() {
        let json = record_json(r#""2023-11-14T22:13:20.500Z""#);
        let record: SummaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.created_at.timestamp_millis(), 1_700_000_000_500);
    }

    #[test]
    fn structured_and_millis_forms_agree() {
        let a: SummaryRecord = serde_json::from_str(&record_json(
            r#"{"_seconds": 1700000000, "_nanoseconds": 500000000}"#,
        ))
        .unwrap();
        let b: SummaryRecord = serde_json::from_str(&record_json("1700000000500")).unwrap();
        assert_eq!(a.created_at, b.created_at);
    }

    #[test]
    fn repeated_decodes_of_a_record_are_identical() {
        let json = record_json("1700000000500");
        let a: SummaryRecord = serde_json::from_str(&json).unwrap();
        let b: SummaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.original_url, b.original_url);
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let json = record_json(r#""not a date""#);
        assert!(serde_json::from_str::<SummaryRecord>(&json).is_err());
    }

    #[test]
    fn missing_category_defaults_to_empty() {
        let json = r#"{
            "id": "x",
            "summary": "s",
            "originalUrl": "https://example.com",
            "createdAt": 1700000000500
        }"#;
        let record: SummaryRecord = serde_json::from_str(json).unwrap();
        assert!(record.category.is_empty());
        assert!(record.subcategory.is_empty());
    }

    #[test]
    fn incomplete_summarize_response_is_flagged() {
        let complete: SummarizeResponse =
            serde_json::from_str(r##"{"summary": "# T", "id": "abc"}"##).unwrap();
        assert!(complete.is_complete());

        let missing_id: SummarizeResponse =
            serde_json::from_str(r##"{"summary": "# T"}"##).unwrap();
        assert!(!missing_id.is_complete());

        let empty_summary: SummarizeResponse =
            serde_json::from_str(r#"{"summary": "", "id": "abc"}"#).unwrap();
        assert!(!empty_summary.is_complete());
    }

    #[test]
    fn title_strips_markdown_from_first_line() {
        let record: SummaryRecord =
            serde_json::from_str(&record_json("1700000000500")).unwrap();
        assert_eq!(record.title(), "Título");
    }
}
