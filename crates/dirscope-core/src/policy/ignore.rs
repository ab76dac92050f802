/// Silent-exclusion rules for system-reserved paths and shortcut files.
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Substrings that mark system volume metadata, trash, paging files,
/// crash dumps and performance logs.
const DEFAULT_RESERVED: &[&str] = &[
    "$Recycle.Bin",
    "System Volume Information",
    "pagefile.sys",
    "hiberfil.sys",
    "swapfile.sys",
    "DumpStack.log",
    "PerfLogs",
];

const DEFAULT_SHORTCUT_EXTENSIONS: &[&str] = &[".lnk"];

/// Rules are OR'd; any match excludes the path. All comparisons ignore
/// ASCII/Unicode case, matching the host file system's treatment of
/// reserved names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnorePolicy {
    /// Excluded when the full path contains any of these.
    pub reserved: Vec<String>,
    /// Excluded when any path component starts with this token.
    /// `None` disables the rule.
    pub system_marker_prefix: Option<String>,
    /// Excluded when the path ends with any of these.
    pub shortcut_extensions: Vec<String>,
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self {
            reserved: DEFAULT_RESERVED.iter().map(|s| s.to_string()).collect(),
            system_marker_prefix: Some("$".to_string()),
            shortcut_extensions: DEFAULT_SHORTCUT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl IgnorePolicy {
    /// Decide whether `path` is excluded from traversal.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let lowered = path.to_string_lossy().to_lowercase();

        if self
            .reserved
            .iter()
            .any(|r| !r.is_empty() && lowered.contains(&r.to_lowercase()))
        {
            return true;
        }

        if self
            .shortcut_extensions
            .iter()
            .any(|ext| !ext.is_empty() && lowered.ends_with(&ext.to_lowercase()))
        {
            return true;
        }

        self.has_system_marker(path)
    }

    fn has_system_marker(&self, path: &Path) -> bool {
        let Some(prefix) = self.system_marker_prefix.as_deref() else {
            return false;
        };
        if prefix.is_empty() {
            return false;
        }
        path.components().any(|c| match c {
            Component::Normal(name) => name.to_string_lossy().starts_with(prefix),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl IgnorePolicy {
        /// A policy that ignores nothing.
        fn permissive() -> Self {
            Self {
                reserved: Vec::new(),
                system_marker_prefix: None,
                shortcut_extensions: Vec::new(),
            }
        }
    }
    use std::path::PathBuf;

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn test_reserved_substrings_case_insensitive() {
        let policy = IgnorePolicy::default();
        assert!(policy.should_ignore(&p("/mnt/c/$RECYCLE.BIN")));
        assert!(policy.should_ignore(&p("/mnt/c/pagefile.sys")));
        assert!(policy.should_ignore(&p("/mnt/c/system volume information/x")));
        assert!(policy.should_ignore(&p("/mnt/c/PerfLogs")));
        assert!(!policy.should_ignore(&p("/mnt/c/Users/me/notes.txt")));
    }

    #[test]
    fn test_system_marker_matches_component_prefix_only() {
        let policy = IgnorePolicy::default();
        assert!(policy.should_ignore(&p("/data/$Extend")));
        assert!(policy.should_ignore(&p("/data/$WinREAgent/file.bin")));
        // A dollar sign inside a name is not a system marker.
        assert!(!policy.should_ignore(&p("/data/price$list.csv")));
    }

    #[test]
    fn test_shortcut_extension() {
        let policy = IgnorePolicy::default();
        assert!(policy.should_ignore(&p("/desk/Game.lnk")));
        assert!(policy.should_ignore(&p("/desk/Game.LNK")));
        assert!(!policy.should_ignore(&p("/desk/Game.lnkx")));
    }

    #[test]
    fn test_marker_rule_can_be_disabled() {
        let policy = IgnorePolicy {
            system_marker_prefix: None,
            ..IgnorePolicy::default()
        };
        assert!(!policy.should_ignore(&p("/data/$Extend")));
        assert!(policy.should_ignore(&p("/data/$Recycle.Bin")));
    }

    #[test]
    fn test_permissive_policy_ignores_nothing() {
        let policy = IgnorePolicy::permissive();
        assert!(!policy.should_ignore(&p("/$RECYCLE.BIN/a.lnk")));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let policy: IgnorePolicy =
            serde_json::from_str(r#"{"reserved": ["node_modules"]}"#).unwrap();
        assert!(policy.should_ignore(&p("/src/node_modules/x.js")));
        assert!(!policy.should_ignore(&p("/pagefile.sys")));
        assert_eq!(policy.system_marker_prefix.as_deref(), Some("$"));
    }
}
