//! Inner node of a command tree.

use super::Command;
use crate::args::{self, Flags};
use crate::error::{Result, SubcmdError};
use std::rc::Rc;

/// Handler that picks the next command of a dispatch chain.
///
/// Returning `None` means the tree has no command for this invocation, which
/// is reported as [`SubcmdError::IncompleteTree`].
pub type IntermediateHandler<'a> = Box<dyn Fn(&Flags, &[String]) -> Option<Rc<Command<'a>>> + 'a>;

/// Consumes its own flags and one selector token, then delegates.
pub struct IntermediateCommand<'a> {
    handler: IntermediateHandler<'a>,
}

impl<'a> IntermediateCommand<'a> {
    /// Wrap `handler` as an intermediate node.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Flags, &[String]) -> Option<Rc<Command<'a>>> + 'a,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Tokenize `args`, resolve the next command and execute it with the
    /// selector shifted into slot 0.
    pub fn try_execute(&self, args: &[String]) -> Result<()> {
        let tokens = args::tokenize(args)?;

        let Some(next) = (self.handler)(&tokens.flags, &tokens.args) else {
            return Err(SubcmdError::IncompleteTree {
                parent: tokens.args.first().cloned().unwrap_or_default(),
                selector: tokens.args.get(1).cloned(),
            });
        };

        let forwarded = if tokens.args.len() >= 2 {
            &tokens.args[1..]
        } else {
            &tokens.args[..]
        };

        tracing::debug!(
            from = tokens.args.first().map(String::as_str).unwrap_or_default(),
            to = forwarded.first().map(String::as_str).unwrap_or_default(),
            next = ?next,
            "descending into sub-command"
        );

        next.try_execute(forwarded)
    }
}
