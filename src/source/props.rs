//! Provide the process property table.
//!
//! The table is a process-wide map of string names to string values,
//! empty until seeded from command line definitions or [`set_property`]
//! calls, and mutable for the lifetime of the process. Reads copy the
//! current value; a later write is visible to every later read from any
//! thread.
use crate::NOT_POSSIBLE;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[cfg(feature = "enable_log")]
use log::debug;

lazy_static::lazy_static! {
    static ref SYS_PROPS: RwLock<BTreeMap<String, String>> = RwLock::new(BTreeMap::new());
}

/// Get the value of `name` in the property table, or [`None`] when unset.
pub fn get_property(name: &str) -> Option<String> {
    SYS_PROPS.read().expect(NOT_POSSIBLE).get(name).cloned()
}

/// Set `name` to `value`, returning the previous value if any.
pub fn set_property<K: Into<String>, V: Into<String>>(name: K, value: V) -> Option<String> {
    SYS_PROPS
        .write()
        .expect(NOT_POSSIBLE)
        .insert(name.into(), value.into())
}

/// Remove `name` from the table, returning the removed value if any.
pub fn remove_property(name: &str) -> Option<String> {
    SYS_PROPS.write().expect(NOT_POSSIBLE).remove(name)
}

/// Copy of the whole table at the time of the call.
///
/// The copy does not track later [`set_property`] calls.
pub fn properties() -> BTreeMap<String, String> {
    SYS_PROPS.read().expect(NOT_POSSIBLE).clone()
}

/// Insert a parsed batch under one write lock.
pub(crate) fn apply(defs: Vec<(String, String)>) -> usize {
    let mut table = SYS_PROPS.write().expect(NOT_POSSIBLE);
    let count = defs.len();
    for (name, value) in defs {
        table.insert(name, value);
    }
    #[cfg(feature = "enable_log")]
    debug!("Loaded {} property definitions.", count);
    count
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn property_table_test() {
        assert_eq!(None, get_property("props.missing"));
        assert_eq!(None, set_property("line.separator", "\n"));
        assert_eq!(Some("\n".to_owned()), get_property("line.separator"));
        // no intervening write, reads agree
        assert_eq!(
            get_property("line.separator"),
            get_property("line.separator")
        );
        assert_eq!(
            Some("\n".to_owned()),
            set_property("line.separator", "\r\n")
        );
        assert_eq!(Some("\r\n".to_owned()), remove_property("line.separator"));
        assert_eq!(None, get_property("line.separator"));
    }

    #[test]
    fn properties_copy_test() {
        set_property("props.copy", "1");
        let snap = properties();
        assert_eq!(Some(&"1".to_owned()), snap.get("props.copy"));
        set_property("props.copy", "2");
        assert_eq!(Some(&"1".to_owned()), snap.get("props.copy"));
        assert_eq!(Some("2".to_owned()), get_property("props.copy"));
    }

    #[test]
    fn value_returned_verbatim_test() {
        set_property("props.verbatim", "  Mixed Case, spaces kept  ");
        assert_eq!(
            Some("  Mixed Case, spaces kept  ".to_owned()),
            get_property("props.verbatim")
        );
    }
}
