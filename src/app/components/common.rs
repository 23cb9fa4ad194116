use dioxus::prelude::*;

// Page title bar (BEM: c-page-header)
#[component]
pub fn PageHeader(title: String) -> Element {
    rsx! {
        header { class: "c-page-header",
            h1 { class: "c-page-header__title", "{title}" }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(icon: String, title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
        }
    }
}
