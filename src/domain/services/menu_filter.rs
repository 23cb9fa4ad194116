//! Permission filtering for the navigation menu
//!
//! Derives the menu a profile may see from the static menu definition.
//! The definition is shared process-wide, so filtering always builds a
//! new tree and never touches its input.

use crate::domain::models::{MenuItem, PermissionMap, PermissionState, SubMenuItem};
use crate::shared::logging::{log_menu_filtered, log_missing_permission_key};

/// Filter `items` down to what `permissions` allows, preserving order.
pub fn filter_menu(items: &[MenuItem], permissions: &PermissionMap) -> Vec<MenuItem> {
    let visible: Vec<MenuItem> = items
        .iter()
        .filter_map(|item| filter_item(item, permissions))
        .collect();

    log_menu_filtered(items.len(), visible.len(), permissions.len());
    visible
}

/// Filtered menu, or `None` until the permission map is ready.
///
/// Authorization data is never partially applied: a loading or failed
/// fetch yields no menu at all.
pub fn visible_menu(items: &[MenuItem], state: &PermissionState) -> Option<Vec<MenuItem>> {
    state
        .permissions()
        .map(|permissions| filter_menu(items, permissions))
}

fn filter_item(item: &MenuItem, permissions: &PermissionMap) -> Option<MenuItem> {
    if item.is_landing() {
        return Some(item.clone());
    }

    let key = item.permission_key();
    let Some(entry) = permissions.get(&key) else {
        log_missing_permission_key(&item.name, &key);
        return None;
    };

    if !item.has_children() {
        return entry.show.then(|| item.clone());
    }

    let allowed: Vec<SubMenuItem> = item
        .children()
        .iter()
        .filter(|sub| {
            if sub.is_creation_entry() {
                entry.create
            } else {
                entry.show
            }
        })
        .cloned()
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(MenuItem {
        items: Some(allowed),
        ..item.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PermissionEntry;

    fn packages() -> MenuItem {
        MenuItem::parent(
            2,
            "Packages",
            "📦",
            vec![
                SubMenuItem::new(1, "Create Package", "➕", "/package/create-package"),
                SubMenuItem::new(2, "Manage Packages", "🗂️", "/package/manage-package"),
            ],
        )
    }

    fn employe() -> MenuItem {
        MenuItem::parent(
            7,
            "Employe",
            "🧑‍💼",
            vec![
                SubMenuItem::new(1, "Add Employe", "➕", "/employe/add-employe"),
                SubMenuItem::new(2, "Manage Employe", "🗂️", "/employe/manage-employe"),
            ],
        )
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::leaf(1, "Dashboard", "🏠", "/"),
            packages(),
            MenuItem::leaf(3, "Bookings", "📅", "/bookings"),
            employe(),
        ]
    }

    fn entry(show: bool, create: bool) -> PermissionEntry {
        PermissionEntry { show, create, ..PermissionEntry::default() }
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_create_entry_requires_create_capability() {
        let permissions = PermissionMap::from([("packages".to_string(), entry(true, false))]);

        let filtered = filter_menu(&[packages()], &permissions);

        assert_eq!(filtered.len(), 1);
        let subs: Vec<&str> = filtered[0].children().iter().map(|s| s.sub_name.as_str()).collect();
        assert_eq!(subs, vec!["Manage Packages"]);
    }

    #[test]
    fn test_create_only_profile_keeps_creation_entries() {
        let permissions = PermissionMap::from([("packages".to_string(), entry(false, true))]);

        let filtered = filter_menu(&[packages()], &permissions);

        let subs: Vec<&str> = filtered[0].children().iter().map(|s| s.sub_name.as_str()).collect();
        assert_eq!(subs, vec!["Create Package"]);
    }

    #[test]
    fn test_parent_without_allowed_children_is_omitted() {
        let permissions = PermissionMap::from([("packages".to_string(), entry(false, false))]);

        let filtered = filter_menu(&[packages()], &permissions);

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_missing_key_hides_whole_parent() {
        let permissions = PermissionMap::from([
            ("packages".to_string(), entry(true, true)),
            ("bookings".to_string(), entry(true, false)),
        ]);

        let filtered = filter_menu(&menu(), &permissions);

        assert_eq!(names(&filtered), vec!["Dashboard", "Packages", "Bookings"]);
    }

    #[test]
    fn test_landing_item_always_visible() {
        let filtered = filter_menu(&menu(), &PermissionMap::new());

        assert_eq!(names(&filtered), vec!["Dashboard"]);
    }

    #[test]
    fn test_leaf_requires_show() {
        let hidden = PermissionMap::from([("bookings".to_string(), entry(false, true))]);
        let shown = PermissionMap::from([("bookings".to_string(), entry(true, false))]);

        let leaf = [MenuItem::leaf(3, "Bookings", "📅", "/bookings")];
        assert!(filter_menu(&leaf, &hidden).is_empty());
        assert_eq!(filter_menu(&leaf, &shown).len(), 1);
    }

    #[test]
    fn test_explicit_key_overrides_name() {
        let item = MenuItem::leaf(4, "Coupons", "🎟️", "/coupons").with_key("coupon");
        let permissions = PermissionMap::from([("coupon".to_string(), entry(true, false))]);

        assert_eq!(filter_menu(&[item.clone()], &permissions).len(), 1);

        let by_name = PermissionMap::from([("coupons".to_string(), entry(true, false))]);
        assert!(filter_menu(&[item], &by_name).is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_source() {
        let source = menu();
        let snapshot = source.clone();
        let permissions = PermissionMap::from([
            ("packages".to_string(), entry(true, false)),
            ("bookings".to_string(), entry(true, false)),
            ("employe".to_string(), entry(true, false)),
        ]);

        let first = filter_menu(&source, &permissions);
        let second = filter_menu(&source, &permissions);

        assert_eq!(source, snapshot);
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["Dashboard", "Packages", "Bookings", "Employe"]);
        assert_eq!(source[1].children().len(), 2);
        assert_eq!(first[1].children().len(), 1);
    }

    #[test]
    fn test_no_empty_parent_for_any_capability_combination() {
        for show in [false, true] {
            for create in [false, true] {
                let permissions = PermissionMap::from([
                    ("packages".to_string(), entry(show, create)),
                    ("employe".to_string(), entry(show, create)),
                ]);

                for item in filter_menu(&menu(), &permissions) {
                    if item.items.is_some() {
                        assert!(item.has_children(), "{} rendered without children", item.name);
                    }
                    for sub in item.children() {
                        let expected = if sub.is_creation_entry() { create } else { show };
                        assert!(expected, "{} should be hidden", sub.sub_name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_visible_menu_waits_for_permissions() {
        assert!(visible_menu(&menu(), &PermissionState::Loading).is_none());
        assert!(visible_menu(&menu(), &PermissionState::Failed("timeout".to_string())).is_none());

        let ready = PermissionState::Ready(PermissionMap::new());
        assert_eq!(visible_menu(&menu(), &ready).map(|m| m.len()), Some(1));
    }
}
