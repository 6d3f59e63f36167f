//! Shared version information for the dyndistcc registry.

/// Version of the running software, as stamped into the store's version row.
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
