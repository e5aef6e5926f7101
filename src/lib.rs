//! subcmd: recursive sub-command dispatch.
//!
//! The core is two pieces:
//! - [`args::tokenize`] splits an argument vector into flags and positionals;
//! - [`command::Command`] is a tree of terminal and intermediate nodes that
//!   each tokenize their level and hand control downward.
//!
//! On top of that, [`manifest`] describes a command tree in YAML and
//! [`runner`] assembles it into commands that spawn external programs.
//!
//! ```
//! use std::rc::Rc;
//! use subcmd::command::Command;
//!
//! let upgrade = Command::terminal(|flags, args| {
//!     assert!(flags.contains_key("force"));
//!     assert_eq!(args, ["upgrade".to_string(), "repo".to_string()]);
//! });
//! let root = Command::intermediate(move |_, args| match args.get(1).map(String::as_str) {
//!     Some("upgrade") => Some(Rc::clone(&upgrade)),
//!     _ => None,
//! });
//!
//! let argv: Vec<String> = ["cli", "upgrade", "--force", "repo"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! root.try_execute(&argv)?;
//! # Ok::<(), subcmd::error::SubcmdError>(())
//! ```

pub mod args;
pub mod command;
pub mod error;
pub mod exit_codes;
pub mod manifest;
pub mod runner;

#[cfg(test)]
mod test_support;
