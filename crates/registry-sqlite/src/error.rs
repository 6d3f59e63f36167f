use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database file could not be opened or created.
    #[error("failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The store pre-existed but version_metadata holds no row.
    #[error("corrupt store: version_metadata holds no row")]
    CorruptMetadata,

    /// The store was written by a newer release than this binary supports.
    #[error("store schema version {found} is newer than supported version {supported}")]
    SchemaTooNew { found: i64, supported: i64 },

    /// The step table has no entry for a version inside the upgrade range.
    #[error("no migration step registered for schema version {version}")]
    MissingStep { version: i64 },

    /// An upgrade step failed; the store may be left mid-migration.
    #[error("migration failed at step {version}: {source}")]
    MigrationStep {
        version: i64,
        #[source]
        source: rusqlite::Error,
    },

    /// An insert or update against the store failed.
    #[error("store write failed: {source}")]
    Write {
        #[source]
        source: rusqlite::Error,
    },

    /// Any other SQLite failure on the read path.
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
}
