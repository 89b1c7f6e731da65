//! Input items and output records

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// An input record, owned by the caller and read-only to the batch.
///
/// Items are identified by their zero-based position in the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    pub json: Value,
}

impl Item {
    pub fn new(json: Value) -> Self {
        Self { json }
    }

    /// Field of the item's JSON object, if the item is an object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.json.as_object().and_then(|object| object.get(name))
    }
}

/// Link from an output record back to the input item that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One element of the batch output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub json: Value,
    #[serde(rename = "pairedItem")]
    pub paired_item: PairedItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutputRecord {
    /// Successful record carrying (part of) a response payload.
    pub fn success(json: Value, index: usize) -> Self {
        Self { json, paired_item: PairedItem { item: index }, error: None }
    }

    /// Error-shaped record: `json` is `{"error": message}`.
    pub fn failure(message: impl Into<String>, index: usize) -> Self {
        let message = message.into();
        Self {
            json: json!({ "error": message }),
            paired_item: PairedItem { item: index },
            error: Some(message),
        }
    }

    pub fn item_index(&self) -> usize {
        self.paired_item.item
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
