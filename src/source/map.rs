//! Provide the in-memory [`Environment`] double.
use crate::Environment;
use std::collections::BTreeMap;

/// An [`Environment`] backed by two plain maps.
///
/// The double gives a test full control over both namespaces: lookups are
/// exact-case and return exactly what was inserted, with none of the
/// platform normalization the system-backed provider inherits from the
/// environment snapshot.
///
/// ```
/// use sysenv::{Environment, MapEnvironment};
///
/// let env = MapEnvironment::new()
///     .with_property("line.separator", "\n")
///     .with_variable("PATH", "/usr/bin");
/// assert_eq!(Some("\n".to_owned()), env.get_property("line.separator"));
/// assert_eq!(Some("/usr/bin".to_owned()), env.get_variable("PATH"));
/// assert_eq!(None, env.get_variable("HOME"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    props: BTreeMap<String, String>,
    vars: BTreeMap<String, String>,
}

impl MapEnvironment {
    /// Create an empty double: every lookup answers [`None`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, chainable.
    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Add a variable, chainable.
    pub fn with_variable<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set a property in place, returning the previous value if any.
    pub fn set_property<K: Into<String>, V: Into<String>>(
        &mut self,
        name: K,
        value: V,
    ) -> Option<String> {
        self.props.insert(name.into(), value.into())
    }

    /// Set a variable in place, returning the previous value if any.
    pub fn set_variable<K: Into<String>, V: Into<String>>(
        &mut self,
        name: K,
        value: V,
    ) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }
}

impl Environment for MapEnvironment {
    fn get_property(&self, name: &str) -> Option<String> {
        self.props.get(name).cloned()
    }

    fn get_variable(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeMap;

    #[test]
    fn namespaces_are_distinct_test() {
        let env = MapEnvironment::new()
            .with_property("shared.name", "property")
            .with_variable("SHARED_NAME", "variable");
        assert_eq!(Some("property".to_owned()), env.get_property("shared.name"));
        assert_eq!(None, env.get_variable("shared.name"));
        assert_eq!(Some("variable".to_owned()), env.get_variable("SHARED_NAME"));
        assert_eq!(None, env.get_property("SHARED_NAME"));
    }

    #[test]
    fn no_normalization_test() {
        let env = MapEnvironment::new().with_variable("Path", "/opt");
        assert_eq!(Some("/opt".to_owned()), env.get_variable("Path"));
        assert_eq!(None, env.get_variable("PATH"));
        assert_eq!(None, env.get_variable("path"));
    }

    #[test]
    fn set_in_place_test() {
        let mut env = MapEnvironment::new().with_variable("PATH", "/usr/bin");
        assert_eq!(
            Some("/usr/bin".to_owned()),
            env.set_variable("PATH", "/opt")
        );
        assert_eq!(Some("/opt".to_owned()), env.get_variable("PATH"));
        assert_eq!(None, env.set_property("fresh", "1"));
        assert_eq!(Some("1".to_owned()), env.get_property("fresh"));
    }

    #[quickcheck]
    fn double_returns_what_was_inserted(
        props: BTreeMap<String, String>,
        vars: BTreeMap<String, String>,
    ) -> bool {
        let mut env = MapEnvironment::new();
        for (name, value) in &props {
            env.set_property(name.clone(), value.clone());
        }
        for (name, value) in &vars {
            env.set_variable(name.clone(), value.clone());
        }
        props
            .iter()
            .all(|(name, value)| env.get_property(name) == Some(value.clone()))
            && vars
                .iter()
                .all(|(name, value)| env.get_variable(name) == Some(value.clone()))
    }
}
