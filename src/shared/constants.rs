//! Static navigation configuration
//!
//! Shared, read-only menu definition. Consumers derive filtered views from
//! it and never modify it.

use crate::domain::models::{MenuItem, SubMenuItem};
use once_cell::sync::Lazy;

/// Entry highlighted before the first route sync
pub const DEFAULT_ACTIVE_ITEM: &str = "Dashboard";

/// Number of rows drawn by the sidebar placeholder while permissions load
pub const MENU_SKELETON_ROWS: usize = 7;

/// Active permission profile when none is configured
pub const DEFAULT_PROFILE: &str = "admin";

pub static MENU_ITEMS: Lazy<Vec<MenuItem>> = Lazy::new(|| {
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
        MenuItem::parent(
            3,
            "Networks",
            "🌐",
            vec![
                SubMenuItem::new(1, "Create Network", "➕", "/network/create-network"),
                SubMenuItem::new(2, "Manage Networks", "🗂️", "/network/manage-network"),
            ],
        ),
        MenuItem::parent(
            4,
            "Coupons",
            "🎟️",
            vec![
                SubMenuItem::new(1, "Create Coupon", "➕", "/coupon/create-coupon"),
                SubMenuItem::new(2, "Manage Coupons", "🗂️", "/coupon/manage-coupon"),
            ],
        ),
        MenuItem::parent(
            5,
            "Users",
            "👥",
            vec![
                SubMenuItem::new(1, "Add User", "➕", "/user/add-user"),
                SubMenuItem::new(2, "Manage Users", "🗂️", "/user/manage-user"),
            ],
        ),
        MenuItem::parent(
            6,
            "Subscriptions",
            "💳",
            vec![
                SubMenuItem::new(1, "Subscription Plans", "📋", "/subscription/plans"),
                SubMenuItem::new(2, "Manage Subscriptions", "🗂️", "/subscription/manage-subscription"),
            ],
        ),
        MenuItem::leaf(7, "Bookings", "📅", "/bookings"),
        MenuItem::parent(
            8,
            "Employe",
            "🧑‍💼",
            vec![
                SubMenuItem::new(1, "Add Employe", "➕", "/employe/add-employe"),
                SubMenuItem::new(2, "Manage Employe", "🗂️", "/employe/manage-employe"),
            ],
        ),
    ]
});
