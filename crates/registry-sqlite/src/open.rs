use std::path::Path;

use rusqlite::{params, Connection};
use tracing::info;

use crate::error::{Result, StoreError};
use crate::migrate::{self, Migration};
use crate::schema::{MIGRATIONS, SCHEMA_CURRENT, SCHEMA_VERSION, SOFTWARE_VERSION};

#[derive(Debug)]
pub struct Store {
    pub(crate) conn: Connection,
}

impl Store {
    /// Opens the registry store at `path`. A missing file is created and
    /// bootstrapped at the current schema version; an existing file is
    /// version-checked and migrated forward if an older release wrote it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, MIGRATIONS, SCHEMA_VERSION, SOFTWARE_VERSION)
    }

    // Version-parametric so tests can drive synthetic migration tables.
    pub(crate) fn open_with(
        path: impl AsRef<Path>,
        migrations: &[Migration],
        schema_version: i64,
        software_version: &str,
    ) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        apply_pragmas(&conn).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut store = Store { conn };
        // The existence check must come first: a fresh store gets the full
        // current layout and never sees the upgrade runner, while a
        // pre-existing store must never have its tables re-created.
        if store.table_exists("version_metadata")? {
            migrate::check_and_upgrade(&store.conn, migrations, schema_version, software_version)?;
        } else {
            store.create_schema(schema_version, software_version)?;
            info!(schema_version, path = %path.display(), "created fresh registry store");
        }
        Ok(store)
    }

    fn create_schema(&mut self, schema_version: i64, software_version: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(SCHEMA_CURRENT)?;
        tx.execute(
            "INSERT INTO version_metadata (software_version, schema_version) VALUES (?,?)",
            params![software_version, schema_version],
        )
        .map_err(|source| StoreError::Write { source })?;
        tx.commit()?;
        Ok(())
    }
}

fn apply_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "journal_mode", &"WAL")?;
    conn.pragma_update(None, "synchronous", &"NORMAL")?;
    conn.pragma_update(None, "foreign_keys", &"ON")?;
    Ok(())
}
