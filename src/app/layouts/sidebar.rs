use dioxus::prelude::*;

use crate::app::components::{MenuEntry, MenuSkeleton};
use crate::app::pages::routes::Route;
use crate::domain::models::MenuItem;
use crate::domain::services::{visible_menu, MenuCommand};
use crate::shared::constants::{DEFAULT_ACTIVE_ITEM, MENU_ITEMS, MENU_SKELETON_ROWS};
use crate::shared::hooks::{use_menu_state, UsePermissionsReturn};
use crate::shared::logging::log_navigation_rejected;

/// Permission-filtered navigation menu
#[component]
pub fn Sidebar() -> Element {
    let permissions = use_context::<UsePermissionsReturn>();
    let mut menu = use_menu_state(DEFAULT_ACTIVE_ITEM);
    let nav = navigator();
    let current_path = use_route::<Route>().to_string();

    // Route-sync: on every route change, and again once permissions resolve
    use_effect(use_reactive((&current_path,), move |(path,)| {
        menu.sync_visible(&MENU_ITEMS, &permissions.state(), &path);
    }));

    let menu_body = match visible_menu(&MENU_ITEMS, &permissions.state()) {
        Some(items) => rsx! {
            ul { class: "c-menu",
                for item in items {
                    MenuEntry {
                        key: "{item.id}",
                        active: menu.is_active(&item),
                        expanded: menu.is_expanded(&item),
                        current_path: current_path.clone(),
                        on_select: move |selected: MenuItem| {
                            if let MenuCommand::Navigate(path) = menu.click(&selected) {
                                match path.parse::<Route>() {
                                    Ok(route) => {
                                        nav.push(route);
                                    }
                                    Err(_) => log_navigation_rejected(&path),
                                }
                            }
                        },
                        item: item.clone(),
                    }
                }
            }
        },
        // Never a partially filtered menu
        None => rsx! {
            MenuSkeleton { rows: MENU_SKELETON_ROWS }
        },
    };

    rsx! {
        aside { class: "c-sidebar",
            div { class: "c-sidebar__header",
                h2 { "Admin" }
            }
            nav { class: "c-sidebar__nav",
                {menu_body}
            }
        }
    }
}
