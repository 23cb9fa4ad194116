pub mod common;
pub mod menu_entry;
pub mod menu_skeleton;
pub mod submenu_panel;

pub use common::{EmptyState, PageHeader};
pub use menu_entry::MenuEntry;
pub use menu_skeleton::MenuSkeleton;
pub use submenu_panel::SubmenuPanel;
