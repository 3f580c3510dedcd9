use ops_portal::access::{ROUTE_PERMISSIONS, has_route_access, required_permission};
use ops_portal::nav::{all_groups, generate_menu_items};

fn perms(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_wildcard_allows_every_tabled_route() {
    let wildcard = perms(&["*"]);
    for (route, _) in ROUTE_PERMISSIONS {
        assert!(
            has_route_access(route, &wildcard),
            "wildcard must allow {route}"
        );
    }
}

#[test]
fn test_wildcard_short_circuits_before_table_lookup() {
    // A route nobody configured is still reachable for an unrestricted session.
    assert!(has_route_access("/anything-not-in-table", &perms(&["*"])));
}

#[test]
fn test_unknown_route_is_denied() {
    // Fail closed: unknown routes are inaccessible by default, silently.
    let list = perms(&["clients", "expenses_view", "dashboard"]);
    assert!(!has_route_access("/anything-not-in-table", &list));
    assert!(!has_route_access("", &list));
    assert!(!has_route_access("/clients/42", &list));
}

#[test]
fn test_exact_permission_match() {
    let list = perms(&["clients", "expenses_view"]);

    assert!(has_route_access("/clients", &list));
    assert!(has_route_access("/expenses", &list));
    // expenses_view must not unlock the review screen.
    assert!(!has_route_access("/review-expenses", &list));
    assert!(!has_route_access("/projects", &list));
}

#[test]
fn test_empty_permissions_deny_everything() {
    for (route, _) in ROUTE_PERMISSIONS {
        assert!(!has_route_access(route, &[]));
    }
}

#[test]
fn test_both_dashboard_routes_share_one_permission() {
    // The admin and non-admin dashboard variants are guarded by the same
    // capability, so the role rewrite can never strand a user on a route
    // they cannot open.
    let list = perms(&["dashboard"]);
    assert!(has_route_access("/reports", &list));
    assert!(has_route_access("/dashboard", &list));
}

#[test]
fn test_route_table_is_injective_by_construction() {
    // Each route appears exactly once, so lookups are unambiguous.
    for (i, (route, _)) in ROUTE_PERMISSIONS.iter().enumerate() {
        let duplicates = ROUTE_PERMISSIONS
            .iter()
            .skip(i + 1)
            .filter(|(other, _)| other == route)
            .count();
        assert_eq!(duplicates, 0, "route {route} appears more than once");
    }
}

#[test]
fn test_required_permission_lookup() {
    assert_eq!(required_permission("/review-expenses"), Some("expenses_review"));
    assert_eq!(required_permission("/nowhere"), None);
}

#[test]
fn test_every_menu_path_is_tabled() {
    // Static agreement: each configured menu path has a guard entry, so a
    // visible item can never point at an untabled (always denied) route.
    for (group, items) in all_groups() {
        for item in items {
            assert!(
                required_permission(item.path).is_some(),
                "menu path {} in group {group} missing from route table",
                item.path
            );
        }
    }
}

#[test]
fn test_menu_and_route_guard_agree() {
    // The two consumers of the permission list must never disagree: every
    // entry the deriver shows must pass the route guard for the same list.
    // Checked per single-permission session, per role (the dashboard rewrite
    // changes the path, so both variants are covered).
    for (_, items) in all_groups() {
        for item in items {
            for role in ["admin", "manager", "sales"] {
                let list = perms(&[item.permission]);
                let menu = generate_menu_items(&list, role);

                for visible in menu
                    .main_menu
                    .iter()
                    .chain(&menu.expenses_menu)
                    .chain(&menu.account_menu)
                    .chain(&menu.company_menu)
                {
                    assert!(
                        has_route_access(&visible.path, &list),
                        "visible item {} not navigable for role {role}",
                        visible.path
                    );
                }
            }
        }
    }
}

#[test]
fn test_wildcard_menu_agrees_with_route_guard() {
    let list = perms(&["*"]);
    for role in ["admin", "sales"] {
        let menu = generate_menu_items(&list, role);
        for visible in menu
            .main_menu
            .iter()
            .chain(&menu.expenses_menu)
            .chain(&menu.account_menu)
            .chain(&menu.company_menu)
        {
            assert!(has_route_access(&visible.path, &list));
        }
    }
}
