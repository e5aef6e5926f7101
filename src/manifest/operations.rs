//! Manifest loading, validation, and path resolution.

use super::DEFAULT_MANIFEST_FILE;
use super::model::{Manifest, Node};
use crate::error::{Result, SubcmdError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

impl Manifest {
    /// Load a manifest from a YAML file and validate it.
    ///
    /// # Returns
    ///
    /// * `Ok(Manifest)` - Successfully loaded and validated manifest
    /// * `Err(SubcmdError::ManifestError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SubcmdError::ManifestError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "loaded manifest");
        Self::from_yaml(&content)
    }

    /// Parse a manifest from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(yaml)
            .map_err(|e| SubcmdError::ManifestError(format!("failed to parse manifest YAML: {}", e)))?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize the manifest to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SubcmdError::ManifestError(format!("failed to serialize manifest to YAML: {}", e))
        })
    }

    /// Validate manifest values.
    ///
    /// Validation rules:
    /// - `env_prefix` must be non-empty ASCII alphanumerics or underscores
    /// - the root must declare at least one command
    /// - every node sets exactly one of `run` or `commands`
    /// - node names must be non-empty, must not start with `-`, and must not
    ///   contain whitespace
    /// - every `run` line must split into at least one word
    pub fn validate(&self) -> Result<()> {
        if self.env_prefix.is_empty()
            || !self
                .env_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(invalid(format!(
                "env_prefix must be non-empty and contain only ASCII letters, digits, or '_' (found '{}')",
                self.env_prefix
            )));
        }

        if self.commands.is_empty() {
            return Err(invalid("at least one command must be declared".to_string()));
        }

        validate_children(&self.commands, "")
    }

    /// Pick the manifest path from the `--manifest` flag, then the
    /// `SUBCMD_MANIFEST` environment value, then the default file name.
    ///
    /// Empty values are treated as unset.
    pub fn resolve_path(flag: Option<&str>, env: Option<&str>) -> PathBuf {
        flag.filter(|p| !p.is_empty())
            .or(env.filter(|p| !p.is_empty()))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE))
    }
}

impl Node {
    /// Returns true when this node runs a program instead of dispatching.
    pub fn is_terminal(&self) -> bool {
        self.run.is_some()
    }

    /// Split the `run` line into program and arguments.
    ///
    /// Returns an empty vector for intermediate nodes.
    pub fn argv(&self) -> Result<Vec<String>> {
        let Some(run) = &self.run else {
            return Ok(Vec::new());
        };

        shell_words::split(run)
            .map_err(|e| SubcmdError::ManifestError(format!("failed to split run line '{}': {}", run, e)))
    }
}

fn validate_children(commands: &BTreeMap<String, Node>, parent: &str) -> Result<()> {
    for (name, node) in commands {
        let path = if parent.is_empty() {
            name.clone()
        } else {
            format!("{} {}", parent, name)
        };

        if name.is_empty() {
            return Err(invalid("command names must be non-empty".to_string()));
        }
        if name.starts_with('-') {
            return Err(invalid(format!(
                "command '{}' must not start with '-' (it would be parsed as a flag)",
                path
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid(format!("command '{}' must not contain whitespace", path)));
        }

        match (&node.run, node.commands.is_empty()) {
            (Some(_), true) => {
                if node.argv()?.is_empty() {
                    return Err(invalid(format!("command '{}' has an empty run line", path)));
                }
            }
            (None, false) => validate_children(&node.commands, &path)?,
            (Some(_), false) => {
                return Err(invalid(format!(
                    "command '{}' must set either 'run' or 'commands', not both",
                    path
                )));
            }
            (None, true) => {
                return Err(invalid(format!(
                    "command '{}' must set either 'run' or 'commands'",
                    path
                )));
            }
        }
    }

    Ok(())
}

fn invalid(message: String) -> SubcmdError {
    SubcmdError::ManifestError(format!("manifest validation failed: {}", message))
}
