//! Management screens reachable from the navigation menu.
//! Each one is a shell until its form or table lands.

use dioxus::prelude::*;

use crate::app::components::{EmptyState, PageHeader};

#[component]
fn AdminPage(icon: String, title: String, description: String) -> Element {
    rsx! {
        section { class: "c-page",
            PageHeader { title: title.clone() }
            EmptyState {
                icon,
                title,
                description,
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AdminPage {
            icon: "🏠",
            title: "Dashboard",
            description: "Overview of networks, packages, bookings and subscriptions.",
        }
    }
}

#[component]
pub fn CreatePackage() -> Element {
    rsx! {
        AdminPage { icon: "➕", title: "Create Package", description: "Define a new package offer." }
    }
}

#[component]
pub fn ManagePackages() -> Element {
    rsx! {
        AdminPage { icon: "📦", title: "Manage Packages", description: "Edit, publish or retire packages." }
    }
}

#[component]
pub fn CreateNetwork() -> Element {
    rsx! {
        AdminPage { icon: "➕", title: "Create Network", description: "Register a new network." }
    }
}

#[component]
pub fn ManageNetworks() -> Element {
    rsx! {
        AdminPage { icon: "🌐", title: "Manage Networks", description: "Browse and update registered networks." }
    }
}

#[component]
pub fn CreateCoupon() -> Element {
    rsx! {
        AdminPage { icon: "➕", title: "Create Coupon", description: "Issue a new discount coupon." }
    }
}

#[component]
pub fn ManageCoupons() -> Element {
    rsx! {
        AdminPage { icon: "🎟️", title: "Manage Coupons", description: "Review coupon usage and expiry." }
    }
}

#[component]
pub fn AddUser() -> Element {
    rsx! {
        AdminPage { icon: "➕", title: "Add User", description: "Invite a user to the platform." }
    }
}

#[component]
pub fn ManageUsers() -> Element {
    rsx! {
        AdminPage { icon: "👥", title: "Manage Users", description: "Search, suspend or update users." }
    }
}

#[component]
pub fn SubscriptionPlans() -> Element {
    rsx! {
        AdminPage { icon: "📋", title: "Subscription Plans", description: "Plans available to subscribers." }
    }
}

#[component]
pub fn ManageSubscriptions() -> Element {
    rsx! {
        AdminPage { icon: "💳", title: "Manage Subscriptions", description: "Active and lapsed subscriptions." }
    }
}

#[component]
pub fn Bookings() -> Element {
    rsx! {
        AdminPage { icon: "📅", title: "Bookings", description: "Upcoming and past bookings." }
    }
}

#[component]
pub fn AddEmploye() -> Element {
    rsx! {
        AdminPage { icon: "➕", title: "Add Employe", description: "Create an employee account." }
    }
}

#[component]
pub fn ManageEmploye() -> Element {
    rsx! {
        AdminPage { icon: "🧑‍💼", title: "Manage Employe", description: "Roles and access of employees." }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        AdminPage {
            icon: "🧭",
            title: "Page not found",
            description: "Nothing lives at {path}.",
        }
    }
}
