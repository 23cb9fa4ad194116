use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::domain::models::PermissionState;
use crate::shared::hooks::UsePermissionsReturn;

#[component]
pub fn Navbar() -> Element {
    let permissions = use_context::<UsePermissionsReturn>();
    let is_loading = permissions.state() == PermissionState::Loading;

    rsx! {
        nav { class: "c-navbar",
            Link {
                to: Route::Dashboard {},
                class: "c-navbar__logo",
                "🛰️ Admin Dashboard"
            }

            div { class: "c-navbar__actions",
                // Profile changed elsewhere (identity provider): refetch the permission map
                button {
                    class: "c-button",
                    disabled: is_loading,
                    title: "Reload permissions",
                    onclick: move |_| permissions.invalidate(),
                    "⟳ Permissions"
                }
            }
        }
    }
}
