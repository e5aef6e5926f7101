//! subcmd: run the command tree described by a YAML manifest.
//!
//! This is the main entry point for the `subcmd` CLI. It locates and loads the
//! manifest, wires the command tree, dispatches the process arguments through
//! it, and exits with the code of the program that ran.

use std::process::ExitCode;
use subcmd::args;
use subcmd::error::{Result, SubcmdError};
use subcmd::exit_codes;
use subcmd::manifest::{MANIFEST_ENV_VAR, MANIFEST_FLAG, Manifest};
use subcmd::runner::{self, RunState};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize tracing with env filter (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match collect_args().and_then(|argv| run(&argv)) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(exit_codes::PROCESS_FAILURE as u8)),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Process arguments as UTF-8 strings; any other encoding is a usage error.
fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| SubcmdError::InvalidArgument(format!("{:?}", raw)))
        })
        .collect()
}

fn run(argv: &[String]) -> Result<i32> {
    // The root level is tokenized again during dispatch; this pass only looks
    // for --manifest before the tree exists.
    let root_flags = args::tokenize(argv)?.flags;
    let env_path = std::env::var(MANIFEST_ENV_VAR).ok();
    let path = Manifest::resolve_path(
        root_flags.get(MANIFEST_FLAG).map(String::as_str),
        env_path.as_deref(),
    );

    let manifest = Manifest::load(&path)?;
    let state = RunState::default();
    let root = runner::build(&manifest, &state)?;

    root.execute(argv);

    state.take_outcome().unwrap_or(Ok(exit_codes::SUCCESS))
}
