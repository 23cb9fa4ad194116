use dioxus::prelude::*;

use crate::domain::models::{MenuItem, PermissionState};
use crate::domain::services::{MenuCommand, MenuUiState};

/// Reactive wrapper around [`MenuUiState`]
#[derive(Clone, Copy)]
pub struct MenuController {
    pub state: Signal<MenuUiState>,
}

impl MenuController {
    pub fn sync_visible(&mut self, items: &[MenuItem], permissions: &PermissionState, route: &str) {
        self.state.write().sync_visible(items, permissions, route);
    }

    pub fn click(&mut self, item: &MenuItem) -> MenuCommand {
        self.state.write().click(item)
    }

    pub fn is_active(&self, item: &MenuItem) -> bool {
        self.state.read().is_active(item)
    }

    pub fn is_expanded(&self, item: &MenuItem) -> bool {
        self.state.read().is_expanded(item)
    }
}

pub fn use_menu_state(default_active: &str) -> MenuController {
    let default_active = default_active.to_string();
    let state = use_signal(move || MenuUiState::new(&default_active));

    MenuController { state }
}
