//! Capability cache inspection CLI.
//!
//! Loads a capability document (a JSON file, or a bundled sample) into a
//! `ConnectionCapabilities` and answers questions against it.
//!
//! Usage:
//!   cargo run -p demo -- list
//!   cargo run -p demo -- check woql_select --db inventory --account acme
//!   cargo run -p demo -- --doc connect.json show inventory --account acme
//!   cargo run -p demo -- --config gate.toml check create_database

mod sample;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use terminus_authz_contracts::error::{AuthzError, AuthzResult};
use terminus_authz_core::{ConnectionCapabilities, GateConfig};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Inspect the client-side capability cache built from a connect response.
#[derive(Parser)]
#[command(
    name = "authz-demo",
    about = "Capability cache inspection tool",
    long_about = "Flattens a capability document into the per-resource action index\n\
                  and lists databases, shows metadata, or checks a permission."
)]
struct Cli {
    /// Capability document to load (JSON). The bundled sample is used if omitted.
    #[arg(long, global = true)]
    doc: Option<PathBuf>,

    /// Gate configuration (TOML). Defaults apply if omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every database the document grants access to.
    List,
    /// Show the metadata and granted actions of one database.
    Show {
        dbid: String,
        #[arg(long, default_value = "")]
        account: String,
    },
    /// Check whether an action is permitted.
    Check {
        action: String,
        #[arg(long)]
        db: Option<String>,
        #[arg(long)]
        account: Option<String>,
    },
    /// Print the document's JSON-LD context.
    Context,
    /// Print every flattened resource record.
    Dump,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see flatten and resolve steps.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AuthzResult<()> {
    let caps = load(&cli)?;

    match cli.command {
        Command::List => list(&caps),
        Command::Show { dbid, account } => show(&caps, &dbid, &account),
        Command::Check { action, db, account } => check(&caps, &action, db.as_deref(), account.as_deref()),
        Command::Context => print_json(&serde_json::Value::Object(caps.get_json_context())),
        Command::Dump => {
            let records: Vec<_> = caps.registry().resources().map(|r| r.to_value()).collect();
            print_json(&serde_json::Value::Array(records))
        }
    }
}

fn load(cli: &Cli) -> AuthzResult<ConnectionCapabilities> {
    let config = match &cli.config {
        Some(path) => GateConfig::from_file(path)?,
        None => GateConfig::default(),
    };
    let mut caps = ConnectionCapabilities::with_config(config);

    match &cli.doc {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| AuthzError::DocumentParse {
                reason: format!("failed to read '{}': {}", path.display(), e),
            })?;
            caps.set_capabilities_json(&json)?;
        }
        None => caps.set_capabilities(Some(&sample::connect_document())),
    }

    info!(
        resources = caps.registry().resources().count(),
        "capability document loaded"
    );
    Ok(caps)
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn list(caps: &ConnectionCapabilities) -> AuthzResult<()> {
    let dbs = caps.list_databases();
    if dbs.is_empty() {
        println!("No accessible databases.");
        return Ok(());
    }
    println!("{:<16} {:<20} DESCRIPTION", "ACCOUNT", "DATABASE");
    for meta in dbs {
        println!("{:<16} {:<20} {}", meta.account, meta.db, meta.description);
    }
    Ok(())
}

fn show(caps: &ConnectionCapabilities, dbid: &str, account: &str) -> AuthzResult<()> {
    let Some(record) = caps.get_db_record(dbid, account) else {
        println!("No cached record for '{}' (account '{}').", dbid, account);
        return Ok(());
    };
    let meta = caps.extract_metadata(record);
    println!("id:          {}", record.id());
    println!("account:     {}", meta.account);
    println!("database:    {}", meta.db);
    println!("description: {}", meta.description);
    println!("actions:");
    for action in record.authority() {
        println!("  - {}", action);
    }
    Ok(())
}

fn check(
    caps: &ConnectionCapabilities,
    action: &str,
    dbid: Option<&str>,
    account: Option<&str>,
) -> AuthzResult<()> {
    match caps.capabilities_permit(action, dbid, account) {
        Ok(permit) => {
            println!("PERMIT  {} on {}", permit.action, permit.resource);
            Ok(())
        }
        Err(e @ AuthzError::AccessDenied { .. }) => {
            println!("DENY    {}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_json(value: &serde_json::Value) -> AuthzResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AuthzError::DocumentParse {
        reason: format!("failed to render JSON: {}", e),
    })?;
    println!("{}", text);
    Ok(())
}
