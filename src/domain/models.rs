use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;

/// Commands the device understands, plus their display grouping.
///
/// Groups keep the order in which the backend listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CommandCatalog {
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default, deserialize_with = "ordered_groups")]
    pub groups: Vec<(String, Vec<String>)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogMismatches {
    /// Group members that are not listed in `commands`.
    pub unknown_in_groups: Vec<String>,
    /// Commands that no group shows.
    pub ungrouped: Vec<String>,
}

impl CatalogMismatches {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unknown_in_groups.is_empty() && self.ungrouped.is_empty()
    }
}

impl CommandCatalog {
    pub fn group_members(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(String::as_str))
    }

    #[must_use]
    pub fn mismatches(&self) -> CatalogMismatches {
        let known: HashSet<&str> = self.commands.iter().map(String::as_str).collect();
        let grouped: HashSet<&str> = self.group_members().collect();

        let mut unknown_in_groups = Vec::new();
        for member in self.group_members() {
            if !known.contains(member) && !unknown_in_groups.iter().any(|m| m == member) {
                unknown_in_groups.push(member.to_string());
            }
        }

        let ungrouped = self
            .commands
            .iter()
            .filter(|c| !grouped.contains(c.as_str()))
            .cloned()
            .collect();

        CatalogMismatches {
            unknown_in_groups,
            ungrouped,
        }
    }
}

/// Body of `GET /api/status`. Only the power flag is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DeviceStatus {
    #[serde(default)]
    pub last_power_command: Option<bool>,
}

fn ordered_groups<'de, D>(deserializer: D) -> Result<Vec<(String, Vec<String>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<(String, Vec<String>)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of group name to command list")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, members)) = map.next_entry::<String, Vec<String>>()? {
                groups.push((name, members));
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keeps_group_order() {
        let json = r#"{
            "commands": ["volumeUp", "inputHdmi", "menuUp"],
            "groups": {
                "volume": ["volumeUp"],
                "input": ["inputHdmi"],
                "menu": ["menuUp"]
            }
        }"#;
        let catalog: CommandCatalog = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = catalog.groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["volume", "input", "menu"]);
        assert_eq!(catalog.commands.len(), 3);
    }

    #[test]
    fn test_catalog_missing_fields_default_to_empty() {
        let catalog: CommandCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.commands.is_empty());
        assert!(catalog.groups.is_empty());
    }

    #[test]
    fn test_catalog_mismatches() {
        let catalog = CommandCatalog {
            commands: vec!["a".into(), "b".into(), "c".into()],
            groups: vec![
                ("g".into(), vec!["a".into(), "x".into()]),
                ("h".into(), vec!["x".into(), "b".into()]),
            ],
        };
        let m = catalog.mismatches();
        assert_eq!(m.unknown_in_groups, vec!["x".to_string()]);
        assert_eq!(m.ungrouped, vec!["c".to_string()]);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_status_parsing() {
        let s: DeviceStatus = serde_json::from_str(r#"{"last_power_command": true}"#).unwrap();
        assert_eq!(s.last_power_command, Some(true));

        let s: DeviceStatus =
            serde_json::from_str(r#"{"last_power_command": null, "uptime": 12}"#).unwrap();
        assert_eq!(s.last_power_command, None);

        let s: DeviceStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(s.last_power_command, None);
    }
}
