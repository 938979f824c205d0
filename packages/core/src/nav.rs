//! Sidebar navigation table.

/// One entry of the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    /// Only shown to administrators.
    pub admin_only: bool,
}

pub static NAVIGATION: [NavItem; 4] = [
    NavItem {
        name: "Dashboard",
        href: "/",
        icon: "⌂",
        admin_only: false,
    },
    NavItem {
        name: "Cards de Conteúdo",
        href: "/cards",
        icon: "▤",
        admin_only: false,
    },
    NavItem {
        name: "Usuários",
        href: "/users",
        icon: "◍",
        admin_only: true,
    },
    NavItem {
        name: "Configurações",
        href: "/settings",
        icon: "⚙",
        admin_only: false,
    },
];

/// Navigation entries visible to the current user.
pub fn visible_nav_items(is_admin: bool) -> impl Iterator<Item = &'static NavItem> {
    NAVIGATION
        .iter()
        .filter(move |item| !item.admin_only || is_admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_only_entries_are_hidden_from_others() {
        let names: Vec<_> = visible_nav_items(false).map(|i| i.name).collect();
        assert!(!names.contains(&"Usuários"));
        assert_eq!(names.len(), 3);

        assert_eq!(visible_nav_items(true).count(), NAVIGATION.len());
    }
}
