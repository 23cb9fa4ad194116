//! Structured logging module for the admin dashboard
//!
//! Provides consistent, contextual logging across client and server.
//! Every event carries an `operation` field so menu and permission
//! activity can be filtered together.

use std::path::Path;

/// Log operations for the navigation menu and its data sources
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuFilter,
    RouteSync,
    MenuClick,
    PermissionFetch,
    PermissionStore,
    SubmenuAnimation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuFilter => "menu_filter",
            LogOperation::RouteSync => "route_sync",
            LogOperation::MenuClick => "menu_click",
            LogOperation::PermissionFetch => "permission_fetch",
            LogOperation::PermissionStore => "permission_store",
            LogOperation::SubmenuAnimation => "submenu_animation",
        }
    }
}

/// Log menu filtering result
pub fn log_menu_filtered(total_items: usize, visible_items: usize, permission_keys: usize) {
    tracing::debug!(
        operation = LogOperation::MenuFilter.as_str(),
        total_items = total_items,
        visible_items = visible_items,
        permission_keys = permission_keys,
        "Menu filtered against permissions"
    );
}

/// Log a parent entry hidden because its key has no permission entry
pub fn log_missing_permission_key(item: &str, key: &str) {
    tracing::trace!(
        operation = LogOperation::MenuFilter.as_str(),
        item = item,
        permission_key = key,
        "No permission entry, hiding menu item"
    );
}

/// Log route synchronization outcome
pub fn log_route_sync(route: &str, active_item: Option<&str>, expanded_item: Option<u32>) {
    match active_item {
        Some(active) => tracing::debug!(
            operation = LogOperation::RouteSync.as_str(),
            route = route,
            active_item = active,
            expanded_item = ?expanded_item,
            "Menu synchronized with route"
        ),
        None => tracing::debug!(
            operation = LogOperation::RouteSync.as_str(),
            route = route,
            "No menu item matches route, clearing menu state"
        ),
    }
}

/// Log a click on a top-level entry
pub fn log_menu_click(item: &str, expanded_item: Option<u32>, navigate_to: Option<&str>) {
    tracing::debug!(
        operation = LogOperation::MenuClick.as_str(),
        item = item,
        expanded_item = ?expanded_item,
        navigate_to = ?navigate_to,
        "Menu item clicked"
    );
}

/// Log a navigation request the router cannot resolve
pub fn log_navigation_rejected(path: &str) {
    tracing::warn!(
        operation = LogOperation::MenuClick.as_str(),
        path = path,
        "Menu path is not a known route, navigation ignored"
    );
}

/// Log permission fetch start
pub fn log_permission_fetch_start(profile: &str) {
    tracing::debug!(
        operation = LogOperation::PermissionFetch.as_str(),
        profile = profile,
        "Fetching permissions"
    );
}

/// Log permission fetch success
pub fn log_permission_fetch_success(profile: &str, key_count: usize) {
    tracing::info!(
        operation = LogOperation::PermissionFetch.as_str(),
        profile = profile,
        permission_keys = key_count,
        "Permissions loaded"
    );
}

/// Log permission fetch failure
pub fn log_permission_fetch_error(profile: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::PermissionFetch.as_str(),
        profile = profile,
        error = error,
        "Failed to load permissions"
    );
}

/// Log permission profiles loaded into the store
pub fn log_permission_store_loaded(source: Option<&Path>, profile_count: usize) {
    match source {
        Some(path) => tracing::info!(
            operation = LogOperation::PermissionStore.as_str(),
            source = %path.display(),
            profile_count = profile_count,
            "Permission profiles loaded from file"
        ),
        None => tracing::info!(
            operation = LogOperation::PermissionStore.as_str(),
            profile_count = profile_count,
            "Using built-in permission profiles"
        ),
    }
}

/// Log expired cache entry being refreshed
pub fn log_permission_cache_expired(profile: &str) {
    tracing::debug!(
        operation = LogOperation::PermissionStore.as_str(),
        profile = profile,
        "Permission cache expired, reloading profiles"
    );
}

/// Log a new submenu height transition
pub fn log_submenu_transition(from: f64, to: f64) {
    tracing::trace!(
        operation = LogOperation::SubmenuAnimation.as_str(),
        from_height = from,
        to_height = to,
        "Submenu height transition started"
    );
}
