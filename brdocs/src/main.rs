// brdocs/src/main.rs
//! brdocs entry point.
//!
//! Sets up logging, builds the dispatcher from the configuration and runs the
//! selected command.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::{LevelFilter, debug};
use std::io;

use brdocs::cli::{Cli, Commands};
use brdocs::commands::brdocs::{
    ReportOptions, load_dispatcher, resolve_value, run_exec, run_format, run_request, run_validate,
};
use brdocs::logger;
use brdocs::ui::output_format::print_error_message;

fn main() {
    if let Err(e) = run() {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        let _ = print_error_message(&mut stderr.lock(), &format!("{:#}", e), supports_color);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    debug!("brdocs started. Version: {}", env!("CARGO_PKG_VERSION"));

    let dispatcher = load_dispatcher(args.config.as_deref())?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    match args.command {
        Commands::Validate(cmd) => {
            let value = resolve_value(cmd.value, io::stdin())?;
            let opts = ReportOptions { output: args.output, supports_color, fail_on_invalid: cmd.fail_on_invalid };
            run_validate(&dispatcher, cmd.kind.into(), &value, &mut writer, &opts)
        }
        Commands::Format(cmd) => {
            let value = resolve_value(cmd.value, io::stdin())?;
            run_format(&dispatcher, cmd.kind.into(), &value, &mut writer)
        }
        Commands::Exec(cmd) => {
            let value = resolve_value(cmd.value, io::stdin())?;
            let opts = ReportOptions { output: args.output, supports_color, fail_on_invalid: cmd.fail_on_invalid };
            run_exec(&dispatcher, &cmd.operation, &value, &mut writer, &opts)
        }
        Commands::Request => {
            let opts = ReportOptions { output: args.output, supports_color, fail_on_invalid: false };
            run_request(&dispatcher, io::stdin(), &mut writer, &opts)
        }
    }
}
