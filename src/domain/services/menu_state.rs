//! Active/expanded state of the navigation menu
//!
//! A small state machine driven by two events: the route changed, or a
//! top-level entry was clicked. At most one entry is expanded at a time.

use crate::domain::models::{ItemId, MenuItem, PermissionState};
use crate::domain::services::menu_filter::visible_menu;
use crate::shared::logging::{log_menu_click, log_route_sync};

/// What the caller must do after a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// Nothing beyond re-rendering
    None,
    /// Navigate the router to this path
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuUiState {
    active_item_name: Option<String>,
    expanded_item_id: Option<ItemId>,
}

impl MenuUiState {
    /// Initial state with the landing entry highlighted
    pub fn new(default_active: &str) -> Self {
        Self {
            active_item_name: Some(default_active.to_string()),
            expanded_item_id: None,
        }
    }

    pub fn active_item_name(&self) -> Option<&str> {
        self.active_item_name.as_deref()
    }

    pub fn expanded_item_id(&self) -> Option<ItemId> {
        self.expanded_item_id
    }

    pub fn is_active(&self, item: &MenuItem) -> bool {
        self.active_item_name.as_deref() == Some(item.name.as_str())
    }

    pub fn is_expanded(&self, item: &MenuItem) -> bool {
        self.expanded_item_id == Some(item.id)
    }

    /// Re-derive active/expanded from the current route.
    ///
    /// An entry whose own path is the route takes precedence over any entry
    /// owning it through a sub-item; within each kind the first in menu
    /// order wins. Entries with children are expanded on match.
    pub fn sync_route(&mut self, items: &[MenuItem], route: &str) {
        let owner = items
            .iter()
            .find(|item| item.owns_path(route))
            .or_else(|| items.iter().find(|item| item.owns_sub_path(route)));

        match owner {
            Some(item) => {
                self.active_item_name = Some(item.name.clone());
                self.expanded_item_id = item.has_children().then_some(item.id);
            }
            None => {
                self.active_item_name = None;
                self.expanded_item_id = None;
            }
        }

        log_route_sync(route, self.active_item_name.as_deref(), self.expanded_item_id);
    }

    /// Route-sync against what the user can actually see.
    ///
    /// Once permissions are ready only the filtered menu is searched, so
    /// the expanded entry is always a visible parent. Until then the full
    /// menu is used.
    pub fn sync_visible(&mut self, items: &[MenuItem], permissions: &PermissionState, route: &str) {
        match visible_menu(items, permissions) {
            Some(visible) => self.sync_route(&visible, route),
            None => self.sync_route(items, route),
        }
    }

    /// Handle a click on a top-level entry.
    ///
    /// Parents toggle their submenu and leave the active entry alone.
    /// Leaves become active, collapse any open submenu and request
    /// navigation to their path.
    pub fn click(&mut self, item: &MenuItem) -> MenuCommand {
        let command = if item.has_children() {
            self.expanded_item_id = if self.is_expanded(item) {
                None
            } else {
                Some(item.id)
            };
            MenuCommand::None
        } else {
            self.active_item_name = Some(item.name.clone());
            self.expanded_item_id = None;
            match &item.path {
                Some(path) => MenuCommand::Navigate(path.clone()),
                None => MenuCommand::None,
            }
        };

        let navigate_to = match &command {
            MenuCommand::Navigate(path) => Some(path.as_str()),
            MenuCommand::None => None,
        };
        log_menu_click(&item.name, self.expanded_item_id, navigate_to);

        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PermissionEntry, SubMenuItem};

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::leaf(1, "Dashboard", "🏠", "/"),
            MenuItem::parent(
                2,
                "Packages",
                "📦",
                vec![
                    SubMenuItem::new(1, "Create Package", "➕", "/package/create-package"),
                    SubMenuItem::new(2, "Manage Packages", "🗂️", "/package/manage-package"),
                ],
            ),
            MenuItem::leaf(3, "Bookings", "📅", "/bookings"),
            MenuItem::parent(
                4,
                "Coupons",
                "🎟️",
                vec![SubMenuItem::new(1, "Manage Coupons", "🗂️", "/coupon/manage-coupon")],
            ),
        ]
    }

    #[test]
    fn test_initial_state_highlights_default() {
        let state = MenuUiState::new("Dashboard");

        assert_eq!(state.active_item_name(), Some("Dashboard"));
        assert_eq!(state.expanded_item_id(), None);
    }

    #[test]
    fn test_sync_route_on_sub_path_expands_parent() {
        let mut state = MenuUiState::new("Dashboard");

        state.sync_route(&menu(), "/package/manage-package");

        assert_eq!(state.active_item_name(), Some("Packages"));
        assert_eq!(state.expanded_item_id(), Some(2));
    }

    #[test]
    fn test_sync_route_on_leaf_path_clears_expanded() {
        let items = menu();
        let mut state = MenuUiState::new("Dashboard");
        state.sync_route(&items, "/package/create-package");

        state.sync_route(&items, "/bookings");

        assert_eq!(state.active_item_name(), Some("Bookings"));
        assert_eq!(state.expanded_item_id(), None);
    }

    #[test]
    fn test_sync_route_every_leaf() {
        let items = menu();
        for item in items.iter().filter(|item| !item.has_children()) {
            let mut state = MenuUiState::new("Dashboard");
            let path = item.path.clone().unwrap_or_default();

            state.sync_route(&items, &path);

            assert_eq!(state.active_item_name(), Some(item.name.as_str()));
            assert_eq!(state.expanded_item_id(), None);
        }
    }

    #[test]
    fn test_sync_route_unknown_clears_state() {
        let mut state = MenuUiState::new("Dashboard");
        state.sync_route(&menu(), "/coupon/manage-coupon");

        state.sync_route(&menu(), "/does/not/exist");

        assert_eq!(state.active_item_name(), None);
        assert_eq!(state.expanded_item_id(), None);
    }

    #[test]
    fn test_sync_route_own_path_beats_earlier_sub_path() {
        let items = vec![
            MenuItem::parent(
                1,
                "Reports",
                "📊",
                vec![SubMenuItem::new(1, "Booking Report", "📄", "/bookings")],
            ),
            MenuItem::leaf(2, "Bookings", "📅", "/bookings"),
        ];
        let mut state = MenuUiState::new("Dashboard");

        state.sync_route(&items, "/bookings");

        assert_eq!(state.active_item_name(), Some("Bookings"));
        assert_eq!(state.expanded_item_id(), None);
    }

    fn permissions(entries: &[(&str, PermissionEntry)]) -> PermissionState {
        PermissionState::Ready(
            entries
                .iter()
                .map(|(key, entry)| (key.to_string(), *entry))
                .collect(),
        )
    }

    #[test]
    fn test_sync_visible_hidden_sub_path_clears_state() {
        let ready = permissions(&[("packages", PermissionEntry::show_only())]);
        let mut state = MenuUiState::new("Dashboard");

        state.sync_visible(&menu(), &ready, "/package/create-package");

        assert_eq!(state.active_item_name(), None);
        assert_eq!(state.expanded_item_id(), None);
    }

    #[test]
    fn test_sync_visible_missing_key_clears_state() {
        let ready = permissions(&[("packages", PermissionEntry::full())]);
        let mut state = MenuUiState::new("Dashboard");
        state.sync_visible(&menu(), &ready, "/package/manage-package");
        assert_eq!(state.expanded_item_id(), Some(2));

        state.sync_visible(&menu(), &ready, "/coupon/manage-coupon");

        assert_eq!(state.active_item_name(), None);
        assert_eq!(state.expanded_item_id(), None);
    }

    #[test]
    fn test_sync_visible_while_loading_uses_full_menu() {
        let mut state = MenuUiState::new("Dashboard");

        state.sync_visible(&menu(), &PermissionState::Loading, "/package/create-package");

        assert_eq!(state.active_item_name(), Some("Packages"));
        assert_eq!(state.expanded_item_id(), Some(2));
    }

    #[test]
    fn test_sync_visible_allowed_sub_path_expands_parent() {
        let ready = permissions(&[("packages", PermissionEntry::full())]);
        let mut state = MenuUiState::new("Dashboard");

        state.sync_visible(&menu(), &ready, "/package/create-package");

        assert_eq!(state.active_item_name(), Some("Packages"));
        assert_eq!(state.expanded_item_id(), Some(2));
    }

    #[test]
    fn test_click_leaf_navigates() {
        let items = menu();
        let mut state = MenuUiState::new("Dashboard");
        state.click(&items[1]);

        let command = state.click(&items[2]);

        assert_eq!(command, MenuCommand::Navigate("/bookings".to_string()));
        assert_eq!(state.active_item_name(), Some("Bookings"));
        assert_eq!(state.expanded_item_id(), None);
    }

    #[test]
    fn test_click_parent_toggles_without_changing_active() {
        let items = menu();
        let mut state = MenuUiState::new("Dashboard");

        assert_eq!(state.click(&items[1]), MenuCommand::None);
        assert_eq!(state.expanded_item_id(), Some(2));
        assert_eq!(state.active_item_name(), Some("Dashboard"));

        state.click(&items[1]);
        assert_eq!(state.expanded_item_id(), None);
        assert_eq!(state.active_item_name(), Some("Dashboard"));
    }

    #[test]
    fn test_at_most_one_expanded() {
        let items = menu();
        let mut state = MenuUiState::new("Dashboard");

        state.click(&items[1]);
        state.click(&items[3]);

        assert!(!state.is_expanded(&items[1]));
        assert!(state.is_expanded(&items[3]));
        assert_eq!(state.expanded_item_id(), Some(4));

        let expanded_count = items.iter().filter(|item| state.is_expanded(item)).count();
        assert_eq!(expanded_count, 1);
    }
}
