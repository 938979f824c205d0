//! Page components for route-based navigation.

mod card_detail_page;
mod dashboard_page;
mod login_page;
mod settings_page;
mod users_page;

pub use card_detail_page::CardDetailPage;
pub use dashboard_page::DashboardPage;
pub use login_page::LoginPage;
pub use settings_page::SettingsPage;
pub use users_page::UsersPage;
