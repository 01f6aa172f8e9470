//! Notes CLI entry point.

use clap::Parser;
use notes::cli::commands;
use notes::cli::{Cli, Commands, OutputFormat};
use notes::config::open_repository;
use notes::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.silent {
        notes::SILENT.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.format == OutputFormat::Csv {
        notes::CSV_OUTPUT.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Set up tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    // Resolve effective JSON mode: --json OR --format json OR non-TTY stdout
    let json = cli.json
        || cli.format == OutputFormat::Json
        || !std::io::IsTerminal::is_terminal(&std::io::stdout());

    match run(&cli, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli, json: bool) -> Result<(), Error> {
    // The notes directory is created here, once, only for commands that use it
    let open = || open_repository(cli.dir.as_deref());

    match &cli.command {
        Commands::New(input) => commands::note::execute_new(input, &mut open()?, json),
        Commands::Show { id } => commands::note::execute_show(id, &open()?, json),
        Commands::Edit { id, input } => {
            commands::note::execute_edit(id, input, &mut open()?, json)
        }
        Commands::Delete { id } => commands::note::execute_delete(id, &mut open()?, json),
        Commands::List => commands::note::execute_list(&open()?, json),

        // Archive exchange
        Commands::Export { output, force } => {
            commands::archive::execute_export(output.as_ref(), *force, &open()?, json)
        }
        Commands::Import { path } => {
            commands::archive::execute_import(path, &mut open()?, cli.verbose > 0, json)
        }

        Commands::Status => commands::status::execute(&open()?, json),
        Commands::Version => commands::version::execute(json),
        Commands::Completions { shell } => commands::completions::execute(shell),
    }
}
