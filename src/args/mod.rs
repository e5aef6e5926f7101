//! Argument tokenizer.
//!
//! Splits a raw argument vector into a flag mapping and the residual
//! positional arguments. Element 0 is the invoking command's name and is never
//! a flag candidate. Flags are only recognized in the prefix that directly
//! follows it: the first token that does not start with `-` ends the scan, and
//! everything from there on stays positional.
//!
//! Accepted flag forms are `-name`, `--name`, `-name=value` and
//! `--name=value`. A flag without a value maps to the empty string, which is
//! distinct from the flag being absent.

use crate::error::{Result, SubcmdError};
use std::collections::HashMap;


/// Flag name to flag value. An empty value means "present without a value".
pub type Flags = HashMap<String, String>;

/// Output of [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Flags found in the scanned prefix.
    pub flags: Flags,
    /// Element 0 followed by every token from the end of the flag prefix on.
    pub args: Vec<String>,
}

/// Extract the flag prefix from `args`.
///
/// # Errors
///
/// Returns [`SubcmdError::EmptyFlag`] when a flag token has nothing after its
/// last dash (`-`, `--`). Tokens after the first positional argument are not
/// inspected.
pub fn tokenize(args: &[String]) -> Result<Tokens> {
    let mut flags = Flags::new();

    if args.len() <= 1 {
        return Ok(Tokens {
            flags,
            args: args.to_vec(),
        });
    }

    let mut index = 1;
    while let Some(token) = args.get(index) {
        if !token.starts_with('-') {
            break;
        }

        let (name, value) = parse_flag(token)?;
        flags.insert(name.to_string(), value.to_string());
        index += 1;
    }

    let mut residual = Vec::with_capacity(args.len() - index + 1);
    residual.push(args[0].clone());
    residual.extend_from_slice(&args[index..]);

    tracing::trace!(consumed = index - 1, flags = flags.len(), "tokenized arguments");

    Ok(Tokens {
        flags,
        args: residual,
    })
}

/// Split a single dash-prefixed token into its name and value.
///
/// The parameter is whatever follows the token's last `-`; its last `=`
/// separates name from value.
fn parse_flag(token: &str) -> Result<(&str, &str)> {
    let last_dash = token.rfind('-').unwrap_or(0);
    if last_dash + 1 == token.len() {
        return Err(SubcmdError::EmptyFlag(token.to_string()));
    }

    let parameter = &token[last_dash + 1..];
    match parameter.rfind('=') {
        Some(eq) => Ok((&parameter[..eq], &parameter[eq + 1..])),
        None => Ok((parameter, "")),
    }
}
