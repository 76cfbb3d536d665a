mod cli;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use substvar::{list_keys_in_stream, Error, Substvar};

use crate::cli::{create_input_reader, create_output_writer, Cli};

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let reader = create_input_reader(&cli.input)
        .with_context(|| format!("failed to open input '{}'", cli.input))?;
    let mut writer = create_output_writer(&cli.output)
        .with_context(|| format!("failed to open output '{}'", cli.output))?;

    if cli.list {
        let count = list_keys_in_stream(reader, &mut writer, config.escapes)?;
        debug!(count, "listed keys");
        return Ok(());
    }

    let mut engine = if cli.no_env {
        Substvar::with_config(config)
    } else {
        Substvar::from_env(config)
    };
    engine.add_variables(cli.variables.into_iter().map(|pair| {
        debug!(%pair, "variable from command line");
        pair.into_tuple()
    }));

    let summary = engine.replace_stream(reader, &mut writer, &mut io::stderr())?;
    debug!(lines = summary.lines, warnings = summary.warnings, "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Error>() {
                // The warning line has already been written.
                Some(Error::MissingVar { key, .. }) => error!(key = %key, "missing value, aborting"),
                _ => error!("{:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
