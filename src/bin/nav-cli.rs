use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use quiz_navigator::config::{load_config, ConfigError};
use quiz_navigator::lifecycle::startup;
use quiz_navigator::observability::logging;
use quiz_navigator::routing::{Params, RouteTable};

#[derive(Parser)]
#[command(name = "nav-cli")]
#[command(about = "Inspect and exercise the quiz navigation table", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the built-in quiz table)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Query a running quiz-navigator instead of a local table
    #[arg(short, long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single navigation step
    Resolve { path: String },
    /// Resolve a path and follow its redirects
    Navigate { path: String },
    /// List the route table
    Routes,
    /// Build a path from a named route
    Href {
        name: String,
        /// Parameters as key=value
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Validate a configuration file
    Check { file: PathBuf },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(url) = &cli.server {
        return remote(url, cli.command).await;
    }

    match cli.command {
        Commands::Check { file } => Ok(check(&file)),
        Commands::Resolve { path } => {
            let resolution = local_table(cli.config.as_deref())?.resolve(&path);
            print_json(&resolution)?;
            Ok(exit_code(!resolution.is_not_found()))
        }
        Commands::Navigate { path } => {
            let navigation = local_table(cli.config.as_deref())?.navigate(&path)?;
            print_json(&navigation)?;
            Ok(exit_code(!navigation.is_not_found()))
        }
        Commands::Routes => {
            let table = local_table(cli.config.as_deref())?;
            print_json(&table.routes().collect::<Vec<_>>())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Href { name, params } => {
            let params: Params = params.into_iter().collect();
            let href = local_table(cli.config.as_deref())?.href(&name, &params)?;
            println!("{href}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn local_table(config: Option<&Path>) -> Result<RouteTable, Box<dyn std::error::Error>> {
    let config = startup::prepare(config)?;
    logging::init_stderr_logging(&config.observability);
    Ok(RouteTable::from_config(&config)?)
}

fn check(file: &Path) -> ExitCode {
    match load_config(file) {
        Ok(config) => {
            println!("{}: ok ({} routes)", file.display(), config.routes.len());
            ExitCode::SUCCESS
        }
        Err(ConfigError::Validation(errors)) => {
            eprintln!("{}: {} problem(s)", file.display(), errors.len());
            for error in errors {
                eprintln!("  - {error}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}: {e}", file.display());
            ExitCode::FAILURE
        }
    }
}

async fn remote(url: &str, command: Commands) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let url = url.trim_end_matches('/');

    let request = match command {
        Commands::Navigate { path } => client
            .get(format!("{url}/_nav/resolve"))
            .query(&[("path", path)]),
        Commands::Routes => client.get(format!("{url}/_nav/routes")),
        _ => {
            eprintln!("Error: only `navigate` and `routes` can be sent to a server");
            return Ok(ExitCode::FAILURE);
        }
    };

    let res = request.send().await?;
    let status = res.status();
    let json: Value = res.json().await?;
    print_json(&json)?;
    Ok(exit_code(status.is_success()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
