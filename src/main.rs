use clap::Parser;
use redactor::cli::{Cli, Commands};
use redactor::config::LoggingConfig;
use redactor::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Optional .env file; absence is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // The CLI logs to the console only; file logging is for library hosts
    // that call init_logging with their own LoggingConfig.
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &LoggingConfig::default()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Redactor - PII detection and redaction"
    );

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

async fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Redact(args) => args.execute(&cli.config).await,
        Commands::Scan(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
