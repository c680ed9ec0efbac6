//! record.json data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root structure for record.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordJson {
    pub node: Vec<NodeRecord>,
    /// Always empty; no containers are planned
    pub container: Vec<serde_json::Value>,
    /// Always empty; no composable nodes are planned
    pub load_node: Vec<serde_json::Value>,
    pub lifecycle_node: Vec<String>,
    /// Parameter file contents keyed by the path used in `params_files`
    pub file_data: HashMap<String, String>,
}

impl RecordJson {
    pub fn new() -> Self {
        Self {
            node: Vec::new(),
            container: Vec::new(),
            load_node: Vec::new(),
            lifecycle_node: Vec::new(),
            file_data: HashMap::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for RecordJson {
    fn default() -> Self {
        Self::new()
    }
}

/// One node process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub executable: String,
    pub package: Option<String>,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub exec_name: Option<String>,
    pub params: Vec<(String, String)>,
    pub params_files: Vec<String>,
    pub remaps: Vec<(String, String)>,
    pub ros_args: Option<Vec<String>>,
    pub args: Option<Vec<String>>,
    pub cmd: Vec<String>,
    pub env: Option<Vec<(String, String)>>,
    pub respawn: Option<bool>,
    pub respawn_delay: Option<f64>,
    pub global_params: Option<Vec<(String, String)>>,
}
