use serde::{Deserialize, Serialize};

use crate::{HostId, ProjectId};

/// The singleton version row recorded in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub software_version: String,
    pub schema_version: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// A compilation host known to the registry. All fields beyond the id are
/// nullable in the schema; nothing in this crate writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub id: HostId,
    pub ip_address: Option<String>,
    pub project_id: Option<ProjectId>,
    pub owner_name: Option<String>,
    pub last_contact: Option<i64>,
}
