use serde::{Deserialize, Serialize};

/// Separator between module name and parent key, as in `design@acme`.
pub const MODULE_SEPARATOR: char = '@';

/// A project records can be tracked against.
///
/// A key of the form `<module>@<parent>` denotes a module of the parent
/// project. Module time rolls up into the parent in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
}

impl Project {
    pub fn new(key: &str) -> Self {
        Project { key: key.to_string() }
    }

    /// Returns the parent key if this project is a module.
    pub fn parent(&self) -> Option<&str> {
        parent_of(&self.key)
    }

    pub fn is_module(&self) -> bool {
        self.parent().is_some()
    }

    /// Module name without the parent suffix, or the whole key.
    pub fn module_name(&self) -> &str {
        self.key.split(MODULE_SEPARATOR).next().unwrap_or(&self.key)
    }

    /// Key used for grouping: the parent for modules, the key itself otherwise.
    pub fn group_key(&self) -> &str {
        self.parent().unwrap_or(&self.key)
    }
}

/// Parses the parent out of a `module@parent` key.
///
/// Only the segment directly after the first `@` counts as the parent, and an
/// empty parent segment means the key is not a module.
pub fn parent_of(key: &str) -> Option<&str> {
    key.split(MODULE_SEPARATOR).nth(1).filter(|parent| !parent.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_project() {
        let project = Project::new("acme");
        assert_eq!(project.parent(), None);
        assert!(!project.is_module());
        assert_eq!(project.module_name(), "acme");
        assert_eq!(project.group_key(), "acme");
    }

    #[test]
    fn test_module_project() {
        let project = Project::new("design@acme");
        assert_eq!(project.parent(), Some("acme"));
        assert!(project.is_module());
        assert_eq!(project.module_name(), "design");
        assert_eq!(project.group_key(), "acme");
    }

    #[test]
    fn test_empty_parent_is_not_a_module() {
        assert_eq!(parent_of("design@"), None);
        assert_eq!(parent_of("a@b@c"), Some("b"));
    }

    #[test]
    fn test_project_json() {
        let json = serde_json::to_string(&Project::new("design@acme")).unwrap();
        assert_eq!(json, r#"{"key":"design@acme"}"#);
    }
}
