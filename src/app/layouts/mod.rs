pub mod navbar;
pub mod sidebar;

pub use navbar::Navbar;
pub use sidebar::Sidebar;
