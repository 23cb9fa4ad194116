use dioxus::prelude::*;

use crate::app::components::SubmenuPanel;
use crate::domain::models::MenuItem;

/// One top-level menu entry, with its submenu when it has children.
/// Clicks are reported upward; sub-items are plain links.
#[component]
pub fn MenuEntry(
    item: MenuItem,
    active: bool,
    expanded: bool,
    current_path: String,
    on_select: EventHandler<MenuItem>,
) -> Element {
    let has_children = item.has_children();
    let clicked = item.clone();

    let aria_expanded = has_children.then(|| expanded.to_string());
    let aria_current = (active && !has_children).then_some("page");
    let chevron_class = if expanded {
        "c-menu__chevron c-menu__chevron--open"
    } else {
        "c-menu__chevron"
    };

    let entry_class = match (active, expanded) {
        (true, true) => "c-menu__entry c-menu__entry--active c-menu__entry--expanded",
        (true, false) => "c-menu__entry c-menu__entry--active",
        (false, true) => "c-menu__entry c-menu__entry--expanded",
        (false, false) => "c-menu__entry",
    };

    rsx! {
        li { class: "{entry_class}",
            button {
                class: "c-menu__item",
                aria_expanded,
                aria_current,
                onclick: move |_| on_select.call(clicked.clone()),
                span { class: "c-menu__icon", "{item.icon}" }
                span { class: "c-menu__label", "{item.name}" }
                if has_children {
                    span { class: "{chevron_class}", "▾" }
                }
            }

            if has_children {
                SubmenuPanel { expanded,
                    for sub in item.children() {
                        li {
                            key: "{sub.sub_id}",
                            class: if sub.sub_path == current_path { "c-submenu__item c-submenu__item--current" } else { "c-submenu__item" },
                            Link {
                                to: sub.sub_path.clone(),
                                class: "c-submenu__link",
                                span { class: "c-submenu__icon", "{sub.sub_icon}" }
                                span { class: "c-submenu__label", "{sub.sub_name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
