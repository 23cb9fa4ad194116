use axum::{
    extract::Path,
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::domain::models::PermissionMap;
use crate::infrastructure::permission_store::permission_store;
use crate::shared::errors::AppError;
use crate::shared::logging::{
    log_permission_fetch_error, log_permission_fetch_start, log_permission_fetch_success,
};

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub profiles: usize,
}

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::UnknownProfile(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn profile_permissions(profile: Option<&str>) -> Result<PermissionMap, StatusCode> {
    let store = permission_store().map_err(|e| {
        tracing::error!("Permission store unavailable: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let profile = profile.unwrap_or(store.active_profile());

    log_permission_fetch_start(profile);
    match store.permissions_for(profile) {
        Ok(permissions) => {
            log_permission_fetch_success(profile, permissions.len());
            Ok(permissions)
        }
        Err(e) => {
            log_permission_fetch_error(profile, &e.to_string());
            Err(status_for(&e))
        }
    }
}

/// GET /api/permissions
/// Permission map of the configured profile
pub async fn active_permissions_handler() -> Result<Json<PermissionMap>, StatusCode> {
    profile_permissions(None).map(Json)
}

/// GET /api/permissions/{profile}
/// Permission map of a named profile (404 when unknown)
pub async fn profile_permissions_handler(
    Path(profile): Path<String>,
) -> Result<Json<PermissionMap>, StatusCode> {
    profile_permissions(Some(&profile)).map(Json)
}

/// POST /api/permissions/reload
/// Re-read the permissions file
pub async fn reload_permissions_handler() -> Result<Json<ReloadResponse>, StatusCode> {
    let store = permission_store().map_err(|e| {
        tracing::error!("Permission store unavailable: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let profiles = store.reload().map_err(|e| {
        tracing::error!("Failed to reload permissions: {}", e);
        status_for(&e)
    })?;

    Ok(Json(ReloadResponse { profiles }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_errors() {
        assert_eq!(status_for(&AppError::UnknownProfile("x".to_string())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&AppError::PermissionFile("unreadable".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
