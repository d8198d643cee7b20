use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::InputError;

/// Read a flat JSON object of field name to string value.
pub fn load_field_inputs(path: &Path) -> Result<BTreeMap<String, String>, InputError> {
    let contents = fs::read_to_string(path)?;
    parse_field_inputs(&contents)
}

pub fn parse_field_inputs(contents: &str) -> Result<BTreeMap<String, String>, InputError> {
    let raw: BTreeMap<String, Value> = serde_json::from_str(contents)?;

    raw.into_iter()
        .map(|(name, value)| match value {
            Value::String(s) => Ok((name, s)),
            _ => Err(InputError::NotAString(name)),
        })
        .collect()
}
