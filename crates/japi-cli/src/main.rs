//! japi - JSON:API request target composer
//!
//! Prints the canonical request target for a query built from flags or from
//! a JSON descriptor. Logs go to stderr so stdout can be piped.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use japi_core::config::QueryConfig;
use japi_query::{Query, QueryDescriptor};

mod args;

use args::{Cli, Command};

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<String> {
    dotenvy::dotenv().ok();
    let config = QueryConfig::from_env().context("Failed to load configuration")?;

    let query = match cli.command {
        Command::Build(args) => args
            .into_query(&config.pagination)
            .context("Invalid query arguments")?,
        Command::Describe { path } => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            QueryDescriptor::from_json(&json)
                .and_then(|descriptor| descriptor.into_query_with(&config.pagination))
                .with_context(|| format!("Invalid descriptor {}", path.display()))?
        }
    };

    render(&query, cli.base_url.as_deref().or(config.base_url.as_deref()))
}

fn render(query: &Query, base_url: Option<&str>) -> anyhow::Result<String> {
    debug!(?query, ?base_url, "Rendering query");
    match base_url {
        Some(base) => Ok(query.to_url_str(base)?.to_string()),
        None => Ok(query.serialize()),
    }
}
