use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use registry_sqlite::Store;
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

mod config;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat { Text, Json }

fn rfc3339_ms(ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(ms as i128 * 1_000_000)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_default()
}

#[derive(Debug, Parser)]
#[command(name = "dyndistcc", version, about = "dyndistcc host-registry administration")]
struct Cli {
    /// Path to the registry database. Default: ./dyndistcc.db, or the config value.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Optional config file (YAML). If omitted, loads ./dyndistcc.yaml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print version information
    Version,
    /// Create the registry store if missing, or migrate it to the current schema
    Init,
    /// Show store version and row counts
    Status {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Project registry operations
    #[command(subcommand)]
    Project(ProjectCmd),
    /// Host registry inspection
    #[command(subcommand)]
    Host(HostCmd),
}

#[derive(Debug, Subcommand)]
enum ProjectCmd {
    /// Register a new project and print its assigned id
    Create { name: String },
    /// List registered projects
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Subcommand)]
enum HostCmd {
    /// List known hosts and when they last checked in
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn resolve_db_path(cli_db: Option<PathBuf>, cfg: &config::Config) -> PathBuf {
    cli_db
        .or_else(|| cfg.registry.as_ref().and_then(|r| r.db.clone()))
        .unwrap_or_else(|| PathBuf::from("dyndistcc.db"))
}

/// Opening bootstraps a missing store and migrates an old one; any failure
/// here aborts before a single registry operation is served.
fn open_store(cli: &Cli) -> Result<(Store, PathBuf)> {
    let cfg = config::load_config(cli.config.as_deref()).unwrap_or_default();
    let db_path = resolve_db_path(cli.db.clone(), &cfg);
    let store = Store::open(&db_path)
        .with_context(|| format!("startup failed for registry store {}", db_path.display()))?;
    Ok((store, db_path))
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Version => {
            println!("dyndistcc {}", dyndistcc_core::version());
        }
        Commands::Init => {
            let (store, db_path) = open_store(&cli)?;
            let info = store.version()?;
            println!(
                "{}: schema v{} (software {})",
                db_path.display(),
                info.schema_version,
                info.software_version
            );
        }
        Commands::Status { format } => {
            let (store, db_path) = open_store(&cli)?;
            let info = store.version()?;
            let projects = store.project_count()?;
            let hosts = store.host_count()?;
            match format {
                OutputFormat::Text => {
                    println!("store: {}", db_path.display());
                    println!("software version: {}", info.software_version);
                    println!("schema version: {}", info.schema_version);
                    println!("projects: {projects}");
                    println!("hosts: {hosts}");
                }
                OutputFormat::Json => {
                    let out = serde_json::json!({
                        "store": db_path.display().to_string(),
                        "software_version": info.software_version,
                        "schema_version": info.schema_version,
                        "projects": projects,
                        "hosts": hosts,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
            }
        }
        Commands::Project(cmd) => match cmd {
            ProjectCmd::Create { name } => {
                let (store, _) = open_store(&cli)?;
                let id = store.create_project(name)?;
                println!("{id}");
            }
            ProjectCmd::List { format } => {
                let (store, _) = open_store(&cli)?;
                let projects = store.list_projects()?;
                match format {
                    OutputFormat::Text => {
                        for p in &projects {
                            println!("{}\t{}", p.id, p.name);
                        }
                    }
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&projects)?);
                    }
                }
            }
        },
        Commands::Host(cmd) => match cmd {
            HostCmd::List { format } => {
                let (store, _) = open_store(&cli)?;
                let hosts = store.list_hosts()?;
                match format {
                    OutputFormat::Text => {
                        for h in &hosts {
                            println!(
                                "{}\t{}\tproject={}\towner={}\tlast_contact={}",
                                h.id,
                                h.ip_address.as_deref().unwrap_or("-"),
                                h.project_id.map_or_else(|| "-".into(), |p| p.to_string()),
                                h.owner_name.as_deref().unwrap_or("-"),
                                h.last_contact.map_or_else(String::new, rfc3339_ms),
                            );
                        }
                    }
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&hosts)?);
                    }
                }
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RegistryConfig};

    #[test]
    fn db_path_prefers_flag_then_config_then_default() {
        let cfg = Config {
            registry: Some(RegistryConfig {
                db: Some(PathBuf::from("from-config.db")),
            }),
        };
        assert_eq!(
            resolve_db_path(Some(PathBuf::from("from-flag.db")), &cfg),
            PathBuf::from("from-flag.db")
        );
        assert_eq!(resolve_db_path(None, &cfg), PathBuf::from("from-config.db"));
        assert_eq!(
            resolve_db_path(None, &Config::default()),
            PathBuf::from("dyndistcc.db")
        );
    }
}
