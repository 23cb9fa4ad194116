use dioxus::prelude::*;

/// Placeholder drawn while permissions load.
/// Always the same number of rows so the sidebar does not jump.
#[component]
pub fn MenuSkeleton(rows: usize) -> Element {
    rsx! {
        ul {
            class: "c-menu c-menu--loading",
            aria_busy: "true",
            for row in 0..rows {
                li { key: "{row}", class: "c-menu__skeleton",
                    span { class: "c-menu__skeleton-icon" }
                    span { class: "c-menu__skeleton-label" }
                }
            }
        }
    }
}
