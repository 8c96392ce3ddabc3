//! List API
//!
//! The single network call of the app: fetch both lists.

use crate::error::FetchError;
use crate::models::{ListItem, ListsResponse};

/// GET the lists from `url`.
///
/// Transport failures, non-2xx statuses and bodies without a `lists` array are all errors.
pub async fn fetch_lists(url: &str) -> Result<Vec<ListItem>, FetchError> {
    web_sys::console::log_1(&format!("[API] GET {}", url).into());

    let resp = reqwest::get(url)
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    check_status(resp.status().as_u16())?;

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    parse_lists(&body)
}

/// Anything outside 2xx is a failed fetch
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

/// Validate the response body and extract the items in response order.
///
/// Only a missing or non-array `lists` is rejected. Array entries that are not
/// objects are skipped; they could not be shown in either column anyway.
pub fn parse_lists(body: &str) -> Result<Vec<ListItem>, FetchError> {
    let payload: ListsResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(payload
        .lists
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    #[test]
    fn test_parse_well_formed_payload() {
        let body = r#"{"lists":[
            {"id":1,"name":"A","description":"d1","list_number":1},
            {"id":2,"name":"B","description":"d2","list_number":2}
        ]}"#;

        let items = parse_lists(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId::Number(1));
        assert_eq!(items[0].name, "A");
        assert_eq!(items[1].description, "d2");
        assert_eq!(items[1].list_number, Some(2));
    }

    #[test]
    fn test_parse_keeps_response_order_and_string_ids() {
        let body = r#"{"lists":[
            {"id":"z","name":"Z","description":"","list_number":2},
            {"id":"a","name":"A","description":"","list_number":2}
        ]}"#;

        let items = parse_lists(body).unwrap();
        assert_eq!(items[0].id, ItemId::Text("z".into()));
        assert_eq!(items[1].id, ItemId::Text("a".into()));
    }

    #[test]
    fn test_parse_missing_text_fields_default_to_empty() {
        let items = parse_lists(r#"{"lists":[{"id":3,"list_number":1}]}"#).unwrap();
        assert_eq!(items[0].name, "");
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn test_parse_accepts_null_description() {
        let items =
            parse_lists(r#"{"lists":[{"id":1,"name":"A","description":null,"list_number":1}]}"#)
                .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "A");
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn test_parse_keeps_item_without_list_number() {
        let body = r#"{"lists":[
            {"id":1,"name":"A","description":"d1","list_number":1},
            {"id":2,"name":"B","description":"d2"}
        ]}"#;

        let items = parse_lists(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].list_number, None);
    }

    #[test]
    fn test_parse_accepts_odd_ids() {
        let body = r#"{"lists":[
            {"id":1.5,"name":"A","list_number":1},
            {"id":99999999999999999999,"name":"B","list_number":2}
        ]}"#;

        let items = parse_lists(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_parse_skips_non_object_entries() {
        let items = parse_lists(r#"{"lists":[3,"x",{"id":1,"list_number":2},null]}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::Number(1));
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(304), Err(FetchError::Status(304)));
        assert_eq!(check_status(404), Err(FetchError::Status(404)));
        assert_eq!(check_status(500), Err(FetchError::Status(500)));
    }

    #[test]
    fn test_parse_empty_lists() {
        assert!(parse_lists(r#"{"lists":[],"total":0}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_lists() {
        assert!(matches!(parse_lists("{}"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_non_array_lists() {
        assert!(matches!(parse_lists(r#"{"lists":{"id":1}}"#), Err(FetchError::Malformed(_))));
        assert!(matches!(parse_lists(r#"{"lists":null}"#), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(parse_lists("<html>502</html>"), Err(FetchError::Malformed(_))));
    }
}
