//! UK Parliament petitions feed (`petitions.json`).

use serde::Deserialize;

use crate::error::SentimentError;
use crate::types::FeedbackItem;

#[derive(Debug, Deserialize)]
struct PetitionsResponse {
    #[serde(default)]
    data: Option<Vec<PetitionRecord>>,
}

#[derive(Debug, Deserialize)]
struct PetitionRecord {
    #[serde(default)]
    attributes: Option<PetitionAttributes>,
}

#[derive(Debug, Default, Deserialize)]
struct PetitionAttributes {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    background: Option<String>,
}

/// Parse a feed body into at most `limit` items.
///
/// A record without `attributes` is read as one with empty fields.
pub(super) fn parse_feed(
    body: &[u8],
    url: &str,
    limit: usize,
) -> Result<Vec<FeedbackItem>, SentimentError> {
    let response: PetitionsResponse =
        serde_json::from_slice(body).map_err(|e| SentimentError::Deserialize {
            context: url.to_string(),
            source: e,
        })?;

    let items = response
        .data
        .unwrap_or_default()
        .into_iter()
        .take(limit)
        .filter_map(|record| {
            let attrs = record.attributes.unwrap_or_default();
            let item = FeedbackItem::new(
                attrs.action.unwrap_or_default(),
                attrs.background.unwrap_or_default(),
            );
            (!item.is_empty()).then_some(item)
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: &serde_json::Value, limit: usize) -> Vec<FeedbackItem> {
        parse_feed(value.to_string().as_bytes(), "test://feed", limit).unwrap()
    }

    #[test]
    fn combines_action_and_background() {
        let body = serde_json::json!({
            "data": [
                { "attributes": { "action": "Ban bad things", "background": "This is terrible and awful." } }
            ]
        });
        let items = parse(&body, 10);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Ban bad things. This is terrible and awful.");
        assert_eq!(items[0].title, "Ban bad things");
    }

    #[test]
    fn truncates_to_limit_and_keeps_blank_records() {
        let body = serde_json::json!({
            "data": [
                { "attributes": { "action": "", "background": "" } },
                { "attributes": { "action": "Second", "background": "kept" } },
                { "attributes": { "action": "Third", "background": "beyond the limit" } }
            ]
        });
        let items = parse(&body, 2);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, ".");
        assert_eq!(items[1].title, "Second");
    }

    #[test]
    fn blank_null_and_attributeless_records_count_as_items() {
        let body = serde_json::json!({
            "data": [
                { "attributes": { "action": "", "background": "" } },
                { "attributes": { "action": null, "background": null } },
                { "type": "petition" },
                { "attributes": { "action": "Real", "background": "one" } }
            ]
        });
        let items = parse(&body, 10);
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, [".", ".", ".", "Real. one"]);
    }

    #[test]
    fn null_and_missing_fields_default_to_empty() {
        let body = serde_json::json!({
            "data": [
                { "attributes": { "action": "Only a title", "background": null } },
                { "attributes": { "background": "Only a summary" } },
                { "type": "petition" }
            ]
        });
        let items = parse(&body, 10);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].text, "Only a title.");
        assert_eq!(items[1].text, ". Only a summary");
        assert_eq!(items[2].text, ".");
    }

    #[test]
    fn missing_data_yields_no_items() {
        assert!(parse(&serde_json::json!({}), 10).is_empty());
        assert!(parse(&serde_json::json!({ "data": null }), 10).is_empty());
    }

    #[test]
    fn invalid_json_is_a_deserialize_error() {
        let err = parse_feed(b"<html>not json</html>", "test://feed", 10).unwrap_err();
        assert!(
            matches!(err, SentimentError::Deserialize { ref context, .. } if context == "test://feed"),
            "got {err:?}"
        );
        assert!(err.is_fetch_error());
    }
}
