//! Frontend Models
//!
//! Data structures matching the list-creation API.
//!
//! Item fields are read leniently: a bad field degrades the item, it never fails the
//! whole response. Only a missing or non-array `lists` is a malformed payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Opaque item identifier. The API sends integers, but any JSON value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Number(i64),
    Text(String),
    /// Anything else (floats, oversized integers, null), kept as its JSON text
    Raw(String),
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Raw(Value::Null.to_string())
    }
}

impl From<Value> for ItemId {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => ItemId::Number(i),
                None => ItemId::Raw(n.to_string()),
            },
            Value::String(s) => ItemId::Text(s),
            other => ItemId::Raw(other.to_string()),
        }
    }
}

/// List item (matches API)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListItem {
    #[serde(default, deserialize_with = "any_id")]
    pub id: ItemId,
    #[serde(default, deserialize_with = "display_text")]
    pub name: String,
    #[serde(default, deserialize_with = "display_text")]
    pub description: String,
    /// Which source list the item belongs to (1 or 2); `None` if absent or not an integer
    #[serde(default, deserialize_with = "list_number")]
    pub list_number: Option<i64>,
}

/// Response body of `GET /list-creation/lists`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListsResponse {
    pub lists: Vec<Value>,
}

fn any_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ItemId, D::Error> {
    Value::deserialize(deserializer).map(ItemId::from)
}

/// Strings as-is, null as empty, other scalars as their JSON text
fn display_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn list_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_i64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: &str) -> ListItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_null_text_fields_become_empty() {
        let parsed = item(r#"{"id":1,"name":null,"description":null,"list_number":1}"#);
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.list_number, Some(1));
    }

    #[test]
    fn test_non_integer_list_number_is_none() {
        assert_eq!(item(r#"{"id":1,"list_number":"1"}"#).list_number, None);
        assert_eq!(item(r#"{"id":1,"list_number":1.5}"#).list_number, None);
        assert_eq!(item(r#"{"id":1}"#).list_number, None);
    }

    #[test]
    fn test_id_variants() {
        assert_eq!(item(r#"{"id":7}"#).id, ItemId::Number(7));
        assert_eq!(item(r#"{"id":"x7"}"#).id, ItemId::Text("x7".into()));
        assert_eq!(item(r#"{"id":2.5}"#).id, ItemId::Raw("2.5".into()));
        assert_eq!(
            item(r#"{"id":18446744073709551615}"#).id,
            ItemId::Raw("18446744073709551615".into())
        );
        assert_eq!(item(r#"{"name":"no id"}"#).id, ItemId::default());
    }
}
