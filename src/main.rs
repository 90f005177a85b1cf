mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use cli::commands::{run_gen, run_parse};
use cli::config::{CliArgs, Command};
use cli::telemetry::init_telemetry;

fn main() -> ExitCode {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {:?}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    init_telemetry()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match &args.command {
        Command::Gen(gen_args) => run_gen(gen_args, &mut out)?,
        Command::Parse(parse_args) => run_parse(parse_args, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
