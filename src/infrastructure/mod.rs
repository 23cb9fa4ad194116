// Server-side data sources
pub mod permission_store;

pub use permission_store::{init_permission_store, permission_store, PermissionStore};
