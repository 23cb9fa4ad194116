// Navigation services
// Framework-agnostic, 100% testable

pub mod menu_filter;
pub mod menu_state;
pub mod submenu_animator;

pub use menu_filter::{filter_menu, visible_menu};
pub use menu_state::{MenuCommand, MenuUiState};
pub use submenu_animator::{ease_in_out, SubmenuAnimator, SUBMENU_TRANSITION_MS};
