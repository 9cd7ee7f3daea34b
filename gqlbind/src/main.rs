use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use gqlbind_client::LoaderBuilder;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// API region selecting the default endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Region {
    Us,
    Eu,
}

#[derive(Debug, Parser)]
#[command(
    name = "gqlbind",
    about = "Generate Rust bindings for GraphQL enums and input objects",
    version
)]
struct Cli {
    /// API token sent as a bearer credential
    #[arg(long, env = "GQLBIND_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Send the introspection request without credentials
    #[arg(long, conflicts_with = "token")]
    no_auth: bool,

    /// Explicit GraphQL endpoint (overrides --region)
    #[arg(long, env = "GQLBIND_ENDPOINT")]
    endpoint: Option<String>,

    /// API region
    #[arg(long, value_enum, default_value_t = Region::Us)]
    region: Region,

    /// Generate from a saved introspection document instead of fetching
    #[arg(long, value_name = "FILE", conflicts_with_all = ["save_schema", "no_auth"])]
    schema: Option<PathBuf>,

    /// Directory receiving enums.rs, inputs.rs and scalars.rs
    #[arg(long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Save the fetched introspection document to this file
    #[arg(long, value_name = "FILE")]
    save_schema: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        Err(_) => EnvFilter::new(log_level(verbose)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn loader_builder(cli: &Cli) -> LoaderBuilder {
    let mut builder = match cli.region {
        Region::Us => LoaderBuilder::new().use_us_region(),
        Region::Eu => LoaderBuilder::new().use_eu_region(),
    };
    if let Some(endpoint) = &cli.endpoint {
        builder = builder.endpoint(endpoint);
    }
    if cli.no_auth {
        builder = builder.without_authentication();
    } else if let Some(token) = &cli.token {
        builder = builder.api_token(token);
    }
    builder
}

async fn introspection_document(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.schema {
        tracing::info!("Reading schema from {}", path.display());
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schema file {}", path.display()));
    }

    if cli.token.is_none() && !cli.no_auth {
        bail!("no API token given: pass --token, set GQLBIND_API_TOKEN, or use --no-auth");
    }

    let loader = loader_builder(cli)
        .build()
        .context("invalid loader configuration")?;
    let raw = loader
        .fetch_raw()
        .await
        .with_context(|| format!("failed to fetch schema from {}", loader.endpoint()))?;

    if let Some(path) = &cli.save_schema {
        std::fs::write(path, &raw)
            .with_context(|| format!("failed to save schema to {}", path.display()))?;
        tracing::info!("Saved schema to {}", path.display());
    }

    Ok(raw)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = introspection_document(&cli).await?;
    let files = gqlbind_codegen::generate_from_json(&json).context("code generation failed")?;
    for file in files.iter().filter(|f| !f.formatted) {
        tracing::warn!("{} was written unformatted", file.name);
    }
    let written = gqlbind_codegen::write_files(&cli.out, &files)
        .with_context(|| format!("failed to write files to {}", cli.out.display()))?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlbind_client::{EU_ENDPOINT, US_ENDPOINT};

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["gqlbind", "--token", "secret"]).unwrap();
        assert_eq!(cli.region, Region::Us);
        assert_eq!(cli.out, PathBuf::from("."));
        assert_eq!(cli.verbose, 0);
        assert!(cli.schema.is_none());
    }

    #[test]
    fn test_region_selects_endpoint() {
        let cli = Cli::try_parse_from(["gqlbind", "--region", "eu", "--token", "t"]).unwrap();
        assert_eq!(loader_builder(&cli).endpoint_url(), EU_ENDPOINT);

        let cli = Cli::try_parse_from(["gqlbind", "--token", "t"]).unwrap();
        assert_eq!(loader_builder(&cli).endpoint_url(), US_ENDPOINT);
    }

    #[test]
    fn test_explicit_endpoint_overrides_region() {
        let cli = Cli::try_parse_from([
            "gqlbind",
            "--region",
            "eu",
            "--endpoint",
            "http://localhost:9000/query",
            "--no-auth",
        ])
        .unwrap();
        assert_eq!(
            loader_builder(&cli).endpoint_url(),
            "http://localhost:9000/query"
        );
    }

    #[test]
    fn test_token_conflicts_with_no_auth() {
        let result = Cli::try_parse_from(["gqlbind", "--token", "t", "--no-auth"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_conflicts_with_save_schema() {
        let result = Cli::try_parse_from([
            "gqlbind",
            "--schema",
            "in.json",
            "--save-schema",
            "out.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(5), "trace");

        let cli = Cli::try_parse_from(["gqlbind", "-vv", "--schema", "s.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
