use crate::app::layouts::{Navbar, Sidebar};
use crate::app::pages::admin::{
    AddEmploye, AddUser, Bookings, CreateCoupon, CreateNetwork, CreatePackage, Dashboard,
    ManageCoupons, ManageEmploye, ManageNetworks, ManagePackages, ManageSubscriptions,
    ManageUsers, NotFound, SubscriptionPlans,
};
use crate::domain::models::PermissionState;
use crate::shared::hooks::use_permissions;
use crate::shared::logging::log_permission_fetch_error;

use dioxus::prelude::*;
use dioxus::document;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Landing page
    #[route("/")]
    Dashboard {},

    #[route("/package/create-package")]
    CreatePackage {},
    #[route("/package/manage-package")]
    ManagePackages {},

    #[route("/network/create-network")]
    CreateNetwork {},
    #[route("/network/manage-network")]
    ManageNetworks {},

    #[route("/coupon/create-coupon")]
    CreateCoupon {},
    #[route("/coupon/manage-coupon")]
    ManageCoupons {},

    #[route("/user/add-user")]
    AddUser {},
    #[route("/user/manage-user")]
    ManageUsers {},

    #[route("/subscription/plans")]
    SubscriptionPlans {},
    #[route("/subscription/manage-subscription")]
    ManageSubscriptions {},

    #[route("/bookings")]
    Bookings {},

    #[route("/employe/add-employe")]
    AddEmploye {},
    #[route("/employe/manage-employe")]
    ManageEmploye {},

    // Anything else: menu state is cleared on these
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Admin dashboard initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    // Fetched once here, shared with the navbar (invalidate) and sidebar (filter)
    let permissions = use_permissions();
    use_context_provider(|| permissions);

    use_effect(move || {
        if let PermissionState::Failed(error) = permissions.state() {
            log_permission_fetch_error("current", &error);
        }
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}

            div { class: "c-layout__body",
                Sidebar {}

                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
