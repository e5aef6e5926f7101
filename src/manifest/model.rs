//! Manifest struct definitions and defaults.

use super::DEFAULT_ENV_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top level of a manifest file.
///
/// The root always dispatches on its first positional argument, so it only
/// carries `commands`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Prefix for the environment variables flags are exported as.
    #[serde(default = "default_env_prefix")]
    pub env_prefix: String,

    /// Sub-commands selectable from the root.
    pub commands: BTreeMap<String, Node>,
}

/// One node of the command tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Short description, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Shell-style command line run by a terminal node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,

    /// Children of an intermediate node.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, Node>,
}

fn default_env_prefix() -> String {
    DEFAULT_ENV_PREFIX.to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            env_prefix: default_env_prefix(),
            commands: BTreeMap::new(),
        }
    }
}
