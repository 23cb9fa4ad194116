use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Capability flags for one permission key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    #[serde(default)]
    pub show: bool,
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub update: bool,
    #[serde(default)]
    pub delete: bool,
}

impl PermissionEntry {
    pub fn show_only() -> Self {
        Self { show: true, ..Self::default() }
    }

    pub fn full() -> Self {
        Self { show: true, create: true, update: true, delete: true }
    }
}

/// Permission key -> capability flags for the current profile
pub type PermissionMap = HashMap<String, PermissionEntry>;

/// Lifecycle of the fetched permission map
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionState {
    Loading,
    Ready(PermissionMap),
    Failed(String),
}

impl PermissionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, PermissionState::Ready(_))
    }

    pub fn permissions(&self) -> Option<&PermissionMap> {
        match self {
            PermissionState::Ready(map) => Some(map),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_default_to_false() {
        let map: PermissionMap =
            serde_json::from_str(r#"{ "packages": { "show": true } }"#).unwrap();

        let entry = map["packages"];
        assert!(entry.show);
        assert!(!entry.create);
        assert!(!entry.update);
        assert!(!entry.delete);
    }

    #[test]
    fn test_state_permissions() {
        assert!(PermissionState::Loading.permissions().is_none());
        assert!(PermissionState::Failed("boom".to_string()).permissions().is_none());

        let ready = PermissionState::Ready(PermissionMap::new());
        assert!(ready.is_ready());
        assert!(ready.permissions().is_some());
    }
}
