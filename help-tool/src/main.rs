use clap::Parser;
use help_tool::cli::Cli;
use help_tool::style::ConsoleDecorator;
use help_types::HelpError;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    if let Err(err) = help_tool::logging::init_tracing() {
        eprintln!("help: failed to initialize logging: {err}");
    }

    let cli = Cli::parse();
    cli.color.apply();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let deco = ConsoleDecorator::new();

    let result = help_tool::run(&mut out, &cli.positional(), &deco)
        .and_then(|()| out.flush().map_err(HelpError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => {
            debug!("stdout closed early: {}", err);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("help: {err}");
            ExitCode::FAILURE
        }
    }
}
