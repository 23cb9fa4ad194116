/// Permission profile endpoints (REST mirror of the `get_permissions` server function)
pub mod permissions;

pub use permissions::{
    active_permissions_handler, profile_permissions_handler, reload_permissions_handler,
    ReloadResponse,
};
