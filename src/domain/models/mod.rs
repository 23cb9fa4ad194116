// Domain models (navigation entities)
// Pure Rust, no framework dependencies

pub mod menu;
pub mod permission;

pub use menu::{ItemId, MenuItem, SubMenuItem, LANDING_PATH};
pub use permission::{PermissionEntry, PermissionMap, PermissionState};
