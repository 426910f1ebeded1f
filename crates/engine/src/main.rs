use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cadence_domain::config::LoggingConfig;
use cadence_domain::trace::TraceEvent;
use cadence_engine::cli::{self, Cli, Command, ConfigCommand, Output};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = cli::load_config()?;
    init_tracing(&config.logging);
    TraceEvent::ConfigLoaded {
        from_file: Path::new(&config_path).exists(),
        issues: config.validate().len(),
        path: config_path.clone(),
    }
    .emit();
    let out = Output::new(&config.output, cli.json);

    match cli.command {
        Command::Parse { cron } => {
            println!("{}", cli::inspect::parse_cmd(&cron, out)?);
        }
        Command::Build { file } => {
            let raw = cli::inspect::read_descriptor_input(file.as_deref())?;
            println!("{}", cli::inspect::build_cmd(&raw, out)?);
        }
        Command::Describe { cron } => {
            println!("{}", cli::inspect::describe_cmd(&cron, out)?);
        }
        Command::Edit { cron, edits } => {
            let transcript = cli::edit::run_edits(&cron, &edits)?;
            println!("{}", cli::edit::render(&transcript, out)?);
        }
        Command::Config(ConfigCommand::Validate) => {
            let report = cli::config::validate(&config, &config_path);
            println!("{}", report.text);
            if !report.ok {
                std::process::exit(1);
            }
        }
        Command::Config(ConfigCommand::Show) => {
            print!("{}", cli::config::show(&config)?);
        }
        Command::Version => {
            println!("cadence {}", env!("CARGO_PKG_VERSION"));
        }
    }
    Ok(())
}

/// Initialize stderr-only tracing so diagnostic output does not pollute
/// stdout. `RUST_LOG` wins over the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
