use crate::models::{MenuItem, MenuSet};

/// MenuItemConfig
///
/// One compiled-in navigation entry. The four group tables below are the single
/// source of truth for the sidebar; `generate_menu_items` never invents entries,
/// it only filters and (for the dashboard) rewrites copies of these records.
#[derive(Debug, Clone, Copy)]
pub struct MenuItemConfig {
    pub text: &'static str,
    pub permission: &'static str,
    pub path: &'static str,
    pub color: &'static str,
}

/// Wildcard permission granting unrestricted access to every menu entry and route.
pub const FULL_ACCESS: &str = "*";

// --- Static Menu Configuration ---
//
// Every path listed here must also appear in access::ROUTE_PERMISSIONS, so that
// an entry a user can see is always an entry they can navigate to.

/// Main navigation group: the core business screens.
pub const MAIN_MENU: &[MenuItemConfig] = &[
    MenuItemConfig {
        text: "Reports",
        permission: "dashboard",
        path: "/reports",
        color: "#7c4dff",
    },
    MenuItemConfig {
        text: "Clients",
        permission: "clients",
        path: "/clients",
        color: "#00bcd4",
    },
    MenuItemConfig {
        text: "Projects",
        permission: "projects",
        path: "/projects",
        color: "#4caf50",
    },
    MenuItemConfig {
        text: "Team",
        permission: "team",
        path: "/team",
        color: "#ff9800",
    },
    MenuItemConfig {
        text: "Meetings",
        permission: "meetings",
        path: "/meetings",
        color: "#e91e63",
    },
];

/// Expenses group. The expense sub-permissions are independent capabilities,
/// not a hierarchy: holding `expenses_view` says nothing about `expenses_review`.
pub const EXPENSES_MENU: &[MenuItemConfig] = &[
    MenuItemConfig {
        text: "Expenses",
        permission: "expenses_view",
        path: "/expenses",
        color: "#3f51b5",
    },
    MenuItemConfig {
        text: "Review Expenses",
        permission: "expenses_review",
        path: "/review-expenses",
        color: "#9c27b0",
    },
    MenuItemConfig {
        text: "Expense Categories",
        permission: "categories",
        path: "/expense-categories",
        color: "#607d8b",
    },
];

/// Account group: the user's own records.
pub const ACCOUNT_MENU: &[MenuItemConfig] = &[
    MenuItemConfig {
        text: "My Leaves",
        permission: "my_leaves",
        path: "/my-leaves",
        color: "#009688",
    },
    MenuItemConfig {
        text: "Attendance",
        permission: "attendance",
        path: "/attendance",
        color: "#795548",
    },
];

/// Company group: organization-wide administration screens.
pub const COMPANY_MENU: &[MenuItemConfig] = &[
    MenuItemConfig {
        text: "Employees",
        permission: "employees",
        path: "/employees",
        color: "#2196f3",
    },
    MenuItemConfig {
        text: "Leaves",
        permission: "leaves",
        path: "/leaves",
        color: "#8bc34a",
    },
    MenuItemConfig {
        text: "Holidays",
        permission: "holidays",
        path: "/holidays",
        color: "#ffc107",
    },
];

/// generate_menu_items
///
/// Derives the four visible navigation groups from a normalized permission list
/// and the user's role. Pure and idempotent: identical inputs always produce
/// structurally identical output, and the relative order of the static tables
/// is preserved (stable filter, no re-sort).
///
/// Inclusion rule: the wildcard `"*"` grants every entry; otherwise an entry is
/// included iff its exact permission string is a member of `permissions`.
/// Entries whose permission is absent are dropped silently.
///
/// Role is only consulted for one rewrite: a visible dashboard entry becomes
/// `Dashboard` at `/dashboard` for non-admin roles, while admins keep the
/// original `Reports` at `/reports`.
pub fn generate_menu_items(permissions: &[String], role: &str) -> MenuSet {
    let full_access = has_full_access(permissions);

    let derive = |group: &[MenuItemConfig]| -> Vec<MenuItem> {
        group
            .iter()
            .filter(|item| full_access || permissions.iter().any(|p| p == item.permission))
            .map(|item| {
                if item.permission == "dashboard" && role != "admin" {
                    // Non-admins get a differently-routed, differently-labeled
                    // dashboard entry. This is the only role-conditional rewrite.
                    MenuItem {
                        text: "Dashboard".to_string(),
                        permission: item.permission.to_string(),
                        path: "/dashboard".to_string(),
                        color: item.color.to_string(),
                    }
                } else {
                    MenuItem {
                        text: item.text.to_string(),
                        permission: item.permission.to_string(),
                        path: item.path.to_string(),
                        color: item.color.to_string(),
                    }
                }
            })
            .collect()
    };

    MenuSet {
        main_menu: derive(MAIN_MENU),
        expenses_menu: derive(EXPENSES_MENU),
        account_menu: derive(ACCOUNT_MENU),
        company_menu: derive(COMPANY_MENU),
    }
}

/// has_full_access
///
/// True iff the permission list contains the wildcard. Shared by the menu
/// deriver and the route checker so the two consumers can never disagree on
/// what "unrestricted" means.
pub fn has_full_access(permissions: &[String]) -> bool {
    permissions.iter().any(|p| p == FULL_ACCESS)
}

/// all_groups
///
/// The four static tables with their group names, in display order. Used by the
/// route checker's agreement tests and anywhere the full configuration needs to
/// be walked.
pub fn all_groups() -> [(&'static str, &'static [MenuItemConfig]); 4] {
    [
        ("main", MAIN_MENU),
        ("expenses", EXPENSES_MENU),
        ("account", ACCOUNT_MENU),
        ("company", COMPANY_MENU),
    ]
}
