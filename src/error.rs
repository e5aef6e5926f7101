//! Error types for subcmd.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so the
//! process boundary can terminate with a meaningful status.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for subcmd operations.
#[derive(Error, Debug)]
pub enum SubcmdError {
    /// A flag token carried no name after its dashes (`-`, `--`).
    #[error("empty flag '{0}': flags must be written as --<name> or --<name>=<value>")]
    EmptyFlag(String),

    /// A process argument is not valid UTF-8.
    #[error("argument {0} is not valid UTF-8")]
    InvalidArgument(String),

    /// An intermediate command produced no next command.
    #[error("{}", incomplete_tree_message(.parent, .selector.as_deref()))]
    IncompleteTree {
        parent: String,
        selector: Option<String>,
    },

    /// The manifest could not be read, parsed, or validated.
    #[error("{0}")]
    ManifestError(String),

    /// A terminal action could not be started.
    #[error("failed to run command: {0}")]
    ProcessError(String),
}

fn incomplete_tree_message(parent: &str, selector: Option<&str>) -> String {
    match selector {
        Some(selector) => format!("no command is wired for '{}' under '{}'", selector, parent),
        None => format!("'{}' requires a sub-command", parent),
    }
}

impl SubcmdError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SubcmdError::EmptyFlag(_) => exit_codes::USAGE_ERROR,
            SubcmdError::InvalidArgument(_) => exit_codes::USAGE_ERROR,
            SubcmdError::IncompleteTree { .. } => exit_codes::CONFIG_ERROR,
            SubcmdError::ManifestError(_) => exit_codes::CONFIG_ERROR,
            SubcmdError::ProcessError(_) => exit_codes::PROCESS_FAILURE,
        }
    }
}

/// Result type alias for subcmd operations.
pub type Result<T> = std::result::Result<T, SubcmdError>;
