use serde::Deserialize;

/// Unprocessed source material for one question.
///
/// Accepts both `{ id, primaryText, secondaryText }` and the posts feed shape
/// `{ id, title, body }`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub id: i64,
    #[serde(alias = "title")]
    pub primary_text: String,
    #[serde(alias = "body")]
    pub secondary_text: String,
}

impl RawRecord {
    pub fn new(id: i64, primary_text: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            id,
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_posts_feed_shape() {
        let json = r#"[{"userId": 1, "id": 3, "title": "ea molestias", "body": "et iusto sed"}]"#;
        let records: Vec<RawRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records, vec![RawRecord::new(3, "ea molestias", "et iusto sed")]);
    }

    #[test]
    fn test_deserialize_canonical_shape() {
        let json = r#"{"id": 4, "primaryText": "eum et est", "secondaryText": "ullam et saepe"}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.primary_text, "eum et est");
        assert_eq!(record.secondary_text, "ullam et saepe");
    }

    #[test]
    fn test_missing_text_is_rejected() {
        let json = r#"{"id": 5, "title": "only a title"}"#;
        assert!(serde_json::from_str::<RawRecord>(json).is_err());
    }
}
