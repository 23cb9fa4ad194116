// Custom Dioxus hooks
pub mod use_menu_state;
pub mod use_permissions;
pub mod use_submenu_height;

pub use use_menu_state::{use_menu_state, MenuController};
pub use use_permissions::{use_permissions, UsePermissionsReturn};
pub use use_submenu_height::{use_submenu_height, UseSubmenuHeightReturn};
