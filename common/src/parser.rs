//! 生ラベルJSONのパース
//!
//! 受け付ける形式:
//! - 文字列の配列 `["shirt", "jeans"]`
//! - 以前の出力結果（`raw_items` を持つオブジェクト）

use crate::error::{Error, Result};
use serde_json::Value;

pub fn parse_labels(json: &str) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(json.trim())?;

    let array = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("raw_items") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::InvalidLabels(
                    "object has no raw_items array".to_string(),
                ))
            }
        },
        _ => {
            return Err(Error::InvalidLabels(
                "expected an array of strings".to_string(),
            ))
        }
    };

    array
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::InvalidLabels(format!("element {} is not a string", i)))
        })
        .collect()
}
