//! Parameter file inspection

use crate::error::ParamError;
use serde_yaml::{Mapping, Value};
use std::{fs, path::Path};

/// Load the `ros__parameters` of every node in a YAML parameter file.
///
/// The path is used as given; a leading `~` is not expanded.
pub fn load_param_file(path: &Path) -> Result<Vec<(String, String)>, ParamError> {
    let content = fs::read_to_string(path)?;
    parse_params(&content)
}

/// Flatten parameter YAML of the form
///
/// ```yaml
/// node_name:
///   ros__parameters:
///     param1: value1
/// ```
pub fn parse_params(content: &str) -> Result<Vec<(String, String)>, ParamError> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let mut params = Vec::new();

    if let Value::Mapping(root_map) = yaml {
        for (_node_name, node_value) in root_map.iter() {
            if let Value::Mapping(node_map) = node_value {
                if let Some(Value::Mapping(params_map)) = node_map.get("ros__parameters") {
                    flatten_params("", params_map, &mut params);
                }
            }
        }
    }

    Ok(params)
}

fn flatten_params(prefix: &str, map: &Mapping, output: &mut Vec<(String, String)>) {
    for (key, value) in map.iter() {
        let Value::String(key_str) = key else {
            continue;
        };
        let full_key = if prefix.is_empty() {
            key_str.clone()
        } else {
            format!("{}.{}", prefix, key_str)
        };

        match value {
            Value::Mapping(nested_map) => flatten_params(&full_key, nested_map, output),
            Value::String(s) => output.push((full_key, s.clone())),
            Value::Number(n) => output.push((full_key, n.to_string())),
            Value::Bool(b) => output.push((full_key, b.to_string())),
            Value::Sequence(seq) => {
                // Arrays are rendered as JSON
                let json_str = serde_json::to_string(seq).unwrap_or_else(|_| format!("{:?}", seq));
                output.push((full_key, json_str));
            }
            Value::Null => output.push((full_key, "null".to_string())),
            other => output.push((full_key, format!("{:?}", other))),
        }
    }
}
