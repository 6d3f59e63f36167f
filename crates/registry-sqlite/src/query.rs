use rusqlite::OptionalExtension;

use crate::error::{Result, StoreError};
use crate::models::{Host, Project, VersionInfo};
use crate::{ProjectId, Store};

impl Store {
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let cnt: i64 = self.conn.query_row(
            "SELECT COUNT(1) FROM sqlite_master WHERE type='table' AND name=?",
            [name],
            |r| r.get(0),
        )?;
        Ok(cnt > 0)
    }

    /// The version pair recorded in the store. A pre-existing store without
    /// its singleton row is corrupt, not merely empty.
    pub fn version(&self) -> Result<VersionInfo> {
        self.conn
            .query_row(
                "SELECT software_version, schema_version FROM version_metadata",
                [],
                |r| {
                    Ok(VersionInfo {
                        software_version: r.get(0)?,
                        schema_version: r.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or(StoreError::CorruptMetadata)
    }

    pub fn get_project(&self, id: ProjectId) -> Result<Option<Project>> {
        let row = self
            .conn
            .query_row(
                "SELECT project_id, name FROM projects WHERE project_id=?",
                [id],
                |r| {
                    Ok(Project {
                        id: r.get(0)?,
                        name: r.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare("SELECT project_id, name FROM projects ORDER BY project_id")?;
        let rows = stmt.query_map([], |r| {
            Ok(Project {
                id: r.get(0)?,
                name: r.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn list_hosts(&self) -> Result<Vec<Host>> {
        let mut stmt = self.conn.prepare(
            "SELECT host_id, ip_address, project_id, owner_name, last_contact FROM hosts ORDER BY host_id",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(Host {
                id: r.get(0)?,
                ip_address: r.get(1)?,
                project_id: r.get(2)?,
                owner_name: r.get(3)?,
                last_contact: r.get(4)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn project_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(1) FROM projects", [], |r| r.get(0))?)
    }

    pub fn host_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(1) FROM hosts", [], |r| r.get(0))?)
    }
}
