use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "catalog": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "root": { "type": "string", "minLength": 1 },
                    "extension": { "type": "string", "pattern": "^[A-Za-z0-9]+$" },
                    "cache_cleared_marker": { "type": "string", "minLength": 1 },
                    "total_label": { "type": "string", "minLength": 1 }
                }
            },
            "selection": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "scenarios": { "type": "array", "items": { "type": "string" }, "minItems": 1 },
                    "locations": { "type": "array", "items": { "type": "string" }, "minItems": 1 }
                }
            }
        }
    })
});
