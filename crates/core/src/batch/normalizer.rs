//! Response normalizer

use serde_json::Value;
use tootbatch_domain::OutputRecord;

/// Expand a raw response into output records paired with `index`.
///
/// A JSON array yields one record per element, in order; anything else
/// yields a single record holding the whole response. An empty array yields
/// no records.
pub fn normalize(raw: Value, index: usize) -> Vec<OutputRecord> {
    match raw {
        Value::Array(elements) => {
            elements.into_iter().map(|element| OutputRecord::success(element, index)).collect()
        }
        other => vec![OutputRecord::success(other, index)],
    }
}
