//! Command tree and recursive dispatch.
//!
//! A tree is assembled up front from two kinds of nodes:
//! - [`TerminalCommand`]: the end of a dispatch chain, runs its handler.
//! - [`IntermediateCommand`]: parses its own flags, asks its handler for the
//!   next command, shifts the sub-command selector into slot 0, and delegates.
//!
//! Each level tokenizes the vector it receives with [`crate::args::tokenize`],
//! so every level owns the flags written directly after its own name:
//!
//! ```text
//! cli --global upgrade --force repo
//! ^^^ ^^^^^^^^ ^^^^^^^ ^^^^^^^
//! |   root     |       upgrade flags
//! |   flags    selector, slot 0 for the next level
//! program name
//! ```
//!
//! Faults never leave a level half-dispatched: a level's handler only runs
//! after its tokenization succeeded.

mod intermediate;
mod terminal;


pub use intermediate::{IntermediateCommand, IntermediateHandler};
pub use terminal::{TerminalCommand, TerminalHandler};

use crate::args::Flags;
use crate::error::Result;
use std::rc::Rc;

/// A node of a command tree.
pub enum Command<'a> {
    Terminal(TerminalCommand<'a>),
    Intermediate(IntermediateCommand<'a>),
}

impl<'a> Command<'a> {
    /// Wrap a terminal handler.
    pub fn terminal<F>(handler: F) -> Rc<Self>
    where
        F: Fn(&Flags, &[String]) + 'a,
    {
        Rc::new(Command::Terminal(TerminalCommand::new(handler)))
    }

    /// Wrap an intermediate handler.
    pub fn intermediate<F>(handler: F) -> Rc<Self>
    where
        F: Fn(&Flags, &[String]) -> Option<Rc<Command<'a>>> + 'a,
    {
        Rc::new(Command::Intermediate(IntermediateCommand::new(handler)))
    }

    /// Dispatch `args` through this node and everything below it.
    ///
    /// # Errors
    ///
    /// - [`SubcmdError::EmptyFlag`](crate::error::SubcmdError::EmptyFlag) when
    ///   a level's flag prefix contains a nameless flag.
    /// - [`SubcmdError::IncompleteTree`](crate::error::SubcmdError::IncompleteTree)
    ///   when an intermediate handler yields no next command.
    pub fn try_execute(&self, args: &[String]) -> Result<()> {
        match self {
            Command::Terminal(command) => command.try_execute(args),
            Command::Intermediate(command) => command.try_execute(args),
        }
    }

    /// Dispatch `args`, terminating the process on any fault.
    ///
    /// Prints the diagnostic to stderr and exits with the fault's exit code.
    pub fn execute(&self, args: &[String]) {
        if let Err(err) = self.try_execute(args) {
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }

    /// Returns true for the leaf variant.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Command::Terminal(_))
    }
}

impl std::fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Terminal(_) => f.write_str("Command::Terminal"),
            Command::Intermediate(_) => f.write_str("Command::Intermediate"),
        }
    }
}
