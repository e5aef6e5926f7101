//! Leaf of a command tree.

use crate::args::{self, Flags};
use crate::error::Result;

/// Handler run at the end of a dispatch chain.
pub type TerminalHandler<'a> = Box<dyn Fn(&Flags, &[String]) + 'a>;

/// Runs its handler with the flags and positionals of the final level.
pub struct TerminalCommand<'a> {
    handler: TerminalHandler<'a>,
}

impl<'a> TerminalCommand<'a> {
    /// Wrap `handler` as a terminal node.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Flags, &[String]) + 'a,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Tokenize `args` and hand the result to the handler.
    pub fn try_execute(&self, args: &[String]) -> Result<()> {
        let tokens = args::tokenize(args)?;
        tracing::debug!(
            command = tokens.args.first().map(String::as_str).unwrap_or_default(),
            "running terminal command"
        );
        (self.handler)(&tokens.flags, &tokens.args);
        Ok(())
    }
}
