//! Exit code constants for subcmd.
//!
//! - 0: Success
//! - 1: Usage error (malformed flags such as a lone `-` or `--`)
//! - 2: Configuration error (incomplete command tree, invalid manifest)
//! - 3: Process failure (a terminal action could not be spawned)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: the invocation itself is malformed.
pub const USAGE_ERROR: i32 = 1;

/// Configuration error: the command tree or its manifest is unusable.
pub const CONFIG_ERROR: i32 = 2;

/// Process failure: a terminal action could not be started.
pub const PROCESS_FAILURE: i32 = 3;
