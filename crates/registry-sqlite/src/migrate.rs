use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use crate::error::{Result, StoreError};

/// One schema upgrade step. `version` is the schema version the step brings
/// the store up to; `sql` performs that version's change and nothing else.
/// The version row is stamped separately, once, after every step has run.
pub struct Migration {
    pub version: i64,
    pub summary: &'static str,
    pub sql: &'static str,
}

/// Compares the recorded schema version against `schema_version` and applies
/// every outstanding step in ascending order.
pub(crate) fn check_and_upgrade(
    conn: &Connection,
    migrations: &[Migration],
    schema_version: i64,
    software_version: &str,
) -> Result<()> {
    let recorded = recorded_version(conn)?;
    if recorded > schema_version {
        return Err(StoreError::SchemaTooNew {
            found: recorded,
            supported: schema_version,
        });
    }
    if recorded < schema_version {
        info!(
            from = recorded,
            to = schema_version,
            "store must be upgraded"
        );
        run_upgrades(conn, migrations, recorded, schema_version, software_version)?;
        info!("store upgraded successfully");
    }
    Ok(())
}

fn recorded_version(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT schema_version FROM version_metadata", [], |r| {
        r.get(0)
    })
    .optional()?
    .ok_or(StoreError::CorruptMetadata)
}

/// Selecting the first outstanding step also selects every later one: every
/// version in `(from, to]` runs exactly one step, ascending, then the version
/// row is stamped once. A version with no registered step aborts the run.
fn run_upgrades(
    conn: &Connection,
    migrations: &[Migration],
    from: i64,
    to: i64,
    software_version: &str,
) -> Result<()> {
    for version in (from + 1)..=to {
        let step = migrations
            .iter()
            .find(|m| m.version == version)
            .ok_or(StoreError::MissingStep { version })?;
        info!(version, summary = step.summary, "applying migration step");
        conn.execute_batch(step.sql)
            .map_err(|source| StoreError::MigrationStep { version, source })?;
    }

    conn.execute(
        "UPDATE version_metadata SET schema_version=?, software_version=?",
        params![to, software_version],
    )
    .map_err(|source| StoreError::Write { source })?;
    Ok(())
}
