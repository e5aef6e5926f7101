//! Command manifest for the subcmd runner.
//!
//! A manifest is a YAML file (default `subcmd.yaml`) that describes a command
//! tree declaratively. Nodes either `run` an external program (terminal) or
//! hold nested `commands` (intermediate). Unknown fields are ignored for
//! forward compatibility; values are checked by [`Manifest::validate`].

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{Manifest, Node};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_MANIFEST_FILE: &str = "subcmd.yaml";

/// Environment variable that overrides the manifest path.
pub const MANIFEST_ENV_VAR: &str = "SUBCMD_MANIFEST";

/// Root-level flag that overrides the manifest path (`--manifest=<path>`).
pub const MANIFEST_FLAG: &str = "manifest";

/// Prefix of the environment variables flags are exported as.
pub const DEFAULT_ENV_PREFIX: &str = "SUBCMD_FLAG_";
