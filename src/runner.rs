//! Manifest-driven command runner.
//!
//! Turns a [`Manifest`] into a [`Command`] tree:
//! - nodes with `commands` become intermediate commands that select a child by
//!   the selector token and remember their flags for the levels below;
//! - nodes with `run` become terminal commands that spawn the configured
//!   program with the positional arguments appended and every effective flag
//!   exported as `<env_prefix><NAME>`.
//!
//! Handlers share a [`RunState`] borrowed from the caller. It accumulates
//! inherited flags during dispatch and records what the terminal action
//! returned. The root handler clears it, so every dispatch through a tree
//! starts from an empty state. The root-level `--manifest` flag only selects
//! the manifest file and is not exported.

use crate::args::Flags;
use crate::command::Command;
use crate::error::{Result, SubcmdError};
use crate::exit_codes;
use crate::manifest::{MANIFEST_FLAG, Manifest, Node};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// State shared by every handler of one runner tree.
#[derive(Debug, Default)]
pub struct RunState {
    inherited: RefCell<Flags>,
    outcome: RefCell<Option<Result<i32>>>,
}

impl RunState {
    /// Flags collected from the intermediate levels dispatched so far.
    pub fn inherited(&self) -> Flags {
        self.inherited.borrow().clone()
    }

    /// Exit code of the terminal action, or the reason it could not run.
    ///
    /// `None` until a terminal command has executed.
    pub fn take_outcome(&self) -> Option<Result<i32>> {
        self.outcome.borrow_mut().take()
    }

    fn reset(&self) {
        self.inherited.borrow_mut().clear();
        self.outcome.borrow_mut().take();
    }

    fn inherit(&self, flags: &Flags) {
        self.inherited
            .borrow_mut()
            .extend(flags.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Inherited flags overlaid with the terminal level's own flags.
    fn effective(&self, own: &Flags) -> Flags {
        let mut flags = self.inherited();
        flags.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
        flags
    }

    fn record(&self, outcome: Result<i32>) {
        *self.outcome.borrow_mut() = Some(outcome);
    }
}

/// Assemble the command tree described by `manifest`.
///
/// The root is always an intermediate command over the manifest's top-level
/// `commands`.
pub fn build<'a>(manifest: &Manifest, state: &'a RunState) -> Result<Rc<Command<'a>>> {
    build_intermediate(&manifest.commands, &manifest.env_prefix, state, true)
}

fn build_node<'a>(node: &Node, env_prefix: &str, state: &'a RunState) -> Result<Rc<Command<'a>>> {
    if node.is_terminal() {
        Ok(build_terminal(node.argv()?, env_prefix.to_string(), state))
    } else {
        build_intermediate(&node.commands, env_prefix, state, false)
    }
}

fn build_intermediate<'a>(
    commands: &BTreeMap<String, Node>,
    env_prefix: &str,
    state: &'a RunState,
    root: bool,
) -> Result<Rc<Command<'a>>> {
    let children = commands
        .iter()
        .map(|(name, node)| Ok((name.clone(), build_node(node, env_prefix, state)?)))
        .collect::<Result<HashMap<_, _>>>()?;

    Ok(Command::intermediate(move |flags, args| {
        if root {
            state.reset();
            let mut flags = flags.clone();
            flags.remove(MANIFEST_FLAG);
            state.inherit(&flags);
        } else {
            state.inherit(flags);
        }

        let selector = args.get(1)?;
        let next = children.get(selector).cloned();
        if next.is_none() {
            tracing::debug!(selector = %selector, "no sub-command matches selector");
        }
        next
    }))
}

fn build_terminal<'a>(argv: Vec<String>, env_prefix: String, state: &'a RunState) -> Rc<Command<'a>> {
    Command::terminal(move |flags, args| {
        let env = env_vars(&env_prefix, &state.effective(flags));
        let extra = args.get(1..).unwrap_or_default();
        state.record(spawn(&argv, extra, &env));
    })
}

/// Map flags to environment variables.
///
/// Names are upper-cased and every character outside `[A-Z0-9_]` becomes
/// `_`, so `--location.storage=/dev/null` is exported as
/// `<prefix>LOCATION_STORAGE=/dev/null`. Flags with an empty name are
/// skipped.
pub fn env_vars(prefix: &str, flags: &Flags) -> BTreeMap<String, String> {
    flags
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (format!("{}{}", prefix, env_name(name)), value.clone()))
        .collect()
}

fn env_name(flag: &str) -> String {
    flag.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn spawn(argv: &[String], extra: &[String], env: &BTreeMap<String, String>) -> Result<i32> {
    let (program, base) = argv
        .split_first()
        .ok_or_else(|| SubcmdError::ProcessError("empty command line".to_string()))?;

    tracing::debug!(program = %program, args = base.len() + extra.len(), "spawning");

    let status = std::process::Command::new(program)
        .args(base)
        .args(extra)
        .envs(env)
        .status()
        .map_err(|e| SubcmdError::ProcessError(format!("'{}': {}", program, e)))?;

    // Killed by a signal: no code to forward.
    Ok(status.code().unwrap_or(exit_codes::PROCESS_FAILURE))
}
