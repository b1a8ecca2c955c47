//! Wire parsed arguments to the core: logging, tag store, output.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::args::{Args, Commands};
use super::commands::Runner;
use crate::core::tags::Id3Store;

/// Logs go to stderr so stdout stays clean for status lines.
///
/// `RUST_LOG` wins; otherwise `--verbose` means debug and the default is warn.
pub fn init_logging(verbose: bool, no_color: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("logging initialized with level: {log_level}");
}

pub fn run(args: Args) -> Result<()> {
    init_logging(args.verbose, args.no_color);

    let options = args.options();
    debug!(?options, "starting tagger v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut runner = Runner::new(Id3Store, stdout.lock(), options);

    match args.command {
        Commands::Query { target, format } => runner.query(&target, format.as_deref())?,
        Commands::Tag { target, format, .. } => runner.tag(&target, &format)?,
        Commands::Manually { target, values, .. } => runner.manually(&target, &values.to_fields())?,
        Commands::Remove {
            target, selection, ..
        } => runner.remove(&target, &selection.fields())?,
        Commands::Rename { target, format, .. } => runner.rename(&target, &format)?,
    }

    Ok(())
}
