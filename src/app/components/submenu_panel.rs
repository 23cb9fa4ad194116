use dioxus::prelude::*;

use crate::shared::hooks::use_submenu_height;

/// Collapsible container for a submenu list.
///
/// The list stays mounted while collapsed; its size is observed so the
/// open height follows content changes.
#[component]
pub fn SubmenuPanel(expanded: bool, children: Element) -> Element {
    let submenu = use_submenu_height(expanded);
    let height = submenu.css_height();

    rsx! {
        div {
            class: if expanded { "c-submenu c-submenu--open" } else { "c-submenu" },
            style: "height: {height};",
            aria_hidden: if expanded { "false" } else { "true" },
            ul {
                class: "c-submenu__list",
                onmounted: move |evt| async move {
                    if let Ok(rect) = evt.data().get_client_rect().await {
                        submenu.measure(rect.size.height);
                    }
                },
                onresize: move |evt| {
                    if let Ok(size) = evt.data().get_border_box_size() {
                        submenu.measure(size.height);
                    }
                },
                {children}
            }
        }
    }
}
