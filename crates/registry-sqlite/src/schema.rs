use crate::migrate::Migration;

/// Version pair recorded into a freshly created store, and stamped after a
/// successful upgrade run.
pub const SOFTWARE_VERSION: &str = dyndistcc_core::version();
pub const SCHEMA_VERSION: i64 = 1;

/// Full table layout at `SCHEMA_VERSION`. Applied in one transaction when the
/// store is created; the version row is inserted in the same transaction.
pub const SCHEMA_CURRENT: &str = r#"
CREATE TABLE version_metadata (
  software_version TEXT NOT NULL,
  schema_version   INTEGER NOT NULL
);

CREATE TABLE projects (
  project_id  INTEGER PRIMARY KEY AUTOINCREMENT,
  name        TEXT
);

CREATE TABLE hosts (
  host_id      INTEGER PRIMARY KEY AUTOINCREMENT,
  ip_address   TEXT,
  project_id   INTEGER,
  owner_name   TEXT,
  last_contact NUMERIC
);

CREATE INDEX idx_hosts_project ON hosts(project_id);
"#;

/// Upgrade steps for stores created by older releases, ascending by version.
/// Version 1 is the baseline laid down by `SCHEMA_CURRENT`; the first entry
/// here lands together with schema version 2.
pub const MIGRATIONS: &[Migration] = &[];
