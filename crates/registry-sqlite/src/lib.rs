mod error;
mod insert;
mod migrate;
mod models;
mod open;
mod query;
mod schema;

pub use error::{Result, StoreError};
pub use migrate::Migration;
pub use models::*;
pub use open::Store;
pub use schema::{MIGRATIONS, SCHEMA_VERSION, SOFTWARE_VERSION};

pub type ProjectId = i64;
pub type HostId = i64;
