//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::PermissionMap;

/// Permission map of the active profile.
/// Keys match `MenuItem::permission_key`; a missing key means no access.
#[server]
pub async fn get_permissions() -> Result<PermissionMap, ServerFnError> {
    use crate::infrastructure::permission_store;
    use crate::shared::logging::{
        log_permission_fetch_error, log_permission_fetch_start, log_permission_fetch_success,
    };

    let store = permission_store().map_err(|e| ServerFnError::new(e.to_string()))?;
    let profile = store.active_profile();

    log_permission_fetch_start(profile);
    match store.active_permissions() {
        Ok(permissions) => {
            log_permission_fetch_success(profile, permissions.len());
            Ok(permissions)
        }
        Err(e) => {
            log_permission_fetch_error(profile, &e.to_string());
            Err(ServerFnError::new(e.to_string()))
        }
    }
}
