use serde::{Deserialize, Serialize};

/// Identifier of a top-level menu entry
pub type ItemId = u32;

/// Path of the landing page, always reachable from the menu
pub const LANDING_PATH: &str = "/";

/// Top-level navigation entry.
///
/// An entry either routes directly (`path`) or expands into `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SubMenuItem>>,
}

/// Child navigation target nested under a [`MenuItem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMenuItem {
    pub parent_id: ItemId,
    pub sub_id: u32,
    pub sub_icon: String,
    pub sub_name: String,
    pub sub_path: String,
}

impl MenuItem {
    /// Leaf entry routing straight to `path`
    pub fn leaf(id: ItemId, name: &str, icon: &str, path: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            key: None,
            icon: icon.to_string(),
            path: Some(path.to_string()),
            items: None,
        }
    }

    /// Expandable entry; sub-items get `id` as their parent
    pub fn parent(id: ItemId, name: &str, icon: &str, items: Vec<SubMenuItem>) -> Self {
        let items = items
            .into_iter()
            .map(|sub| SubMenuItem { parent_id: id, ..sub })
            .collect();

        Self {
            id,
            name: name.to_string(),
            key: None,
            icon: icon.to_string(),
            path: None,
            items: Some(items),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Permission lookup key, falling back to the lowercased name
    pub fn permission_key(&self) -> String {
        match &self.key {
            Some(key) => key.clone(),
            None => self.name.to_lowercase(),
        }
    }

    /// Sub-items, empty for leaf entries
    pub fn children(&self) -> &[SubMenuItem] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn is_landing(&self) -> bool {
        self.path.as_deref() == Some(LANDING_PATH)
    }

    pub fn owns_path(&self, route: &str) -> bool {
        self.path.as_deref() == Some(route)
    }

    /// True when one of the sub-items points at the route
    pub fn owns_sub_path(&self, route: &str) -> bool {
        self.children().iter().any(|sub| sub.sub_path == route)
    }
}

impl SubMenuItem {
    /// Sub-item template; `parent_id` is filled in by [`MenuItem::parent`]
    pub fn new(sub_id: u32, name: &str, icon: &str, path: &str) -> Self {
        Self {
            parent_id: 0,
            sub_id,
            sub_icon: icon.to_string(),
            sub_name: name.to_string(),
            sub_path: path.to_string(),
        }
    }

    /// Creation entries ("Create Package", "Add User") need the create capability
    pub fn is_creation_entry(&self) -> bool {
        let name = self.sub_name.to_lowercase();
        name.contains("add") || name.contains("create")
    }
}
