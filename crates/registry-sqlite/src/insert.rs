use rusqlite::params;

use crate::error::{Result, StoreError};
use crate::{ProjectId, Store};

impl Store {
    /// Appends a project row and returns the id the store assigned to it.
    /// Names are not required to be unique or non-empty.
    pub fn create_project(&self, name: &str) -> Result<ProjectId> {
        self.conn
            .execute("INSERT INTO projects (name) VALUES (?)", params![name])
            .map_err(|source| StoreError::Write { source })?;
        Ok(self.conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use crate::Store;

    #[test]
    fn project_ids_are_distinct_and_increasing() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("registry.db")).unwrap();

        let alpha = store.create_project("alpha").unwrap();
        let beta = store.create_project("beta").unwrap();
        assert_eq!(alpha, 1);
        assert_eq!(beta, 2);

        let got = store.get_project(alpha).unwrap().unwrap();
        assert_eq!(got.name, "alpha");
        let got = store.get_project(beta).unwrap().unwrap();
        assert_eq!(got.name, "beta");

        assert_eq!(store.list_projects().unwrap().len(), 2);
    }

    #[test]
    fn duplicate_and_empty_names_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("registry.db")).unwrap();

        let a = store.create_project("mirror").unwrap();
        let b = store.create_project("mirror").unwrap();
        let c = store.create_project("").unwrap();
        assert!(a < b && b < c);
        assert_eq!(store.get_project(c).unwrap().unwrap().name, "");
    }

    #[test]
    fn missing_project_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("registry.db")).unwrap();
        assert!(store.get_project(42).unwrap().is_none());
    }
}
