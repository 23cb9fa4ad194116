use dioxus::prelude::*;

use crate::domain::models::{PermissionMap, PermissionState};
use crate::server_fns::get_permissions;

/// Permission map of the current profile, fetched once per session
#[derive(Clone, Copy)]
pub struct UsePermissionsReturn {
    pub permissions: Resource<Result<PermissionMap, ServerFnError>>,
}

impl UsePermissionsReturn {
    /// Snapshot of the fetch. Reading it subscribes the caller.
    pub fn state(&self) -> PermissionState {
        match &*self.permissions.read() {
            None => PermissionState::Loading,
            Some(Ok(permissions)) => PermissionState::Ready(permissions.clone()),
            Some(Err(e)) => PermissionState::Failed(e.to_string()),
        }
    }

    /// Drop the cached map and fetch it again (profile changed)
    pub fn invalidate(&self) {
        let mut permissions = self.permissions;
        permissions.restart();
    }
}

pub fn use_permissions() -> UsePermissionsReturn {
    let permissions = use_resource(|| async move { get_permissions().await });

    UsePermissionsReturn { permissions }
}
