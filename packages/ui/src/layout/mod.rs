//! Application shell: sidebar navigation and the responsive frame around
//! every page.

mod app_layout;
mod sidebar;

pub use app_layout::Layout;
pub use sidebar::Sidebar;
