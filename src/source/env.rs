//! Provide the cached OS environment snapshot.
use std::collections::BTreeMap;

#[cfg(feature = "enable_log")]
use log::{debug, warn};

lazy_static::lazy_static! {
    static ref SNAPSHOT: EnvSnapshot = EnvSnapshot::capture();
}

/// A one-shot capture of the OS environment.
///
/// The shared instance behind [`env_snapshot`] is captured on first use
/// and never refreshed: two reads with no process restart in between
/// return identical results, and mutations of the real environment after
/// capture are invisible. Variables whose name or value is not valid
/// Unicode are skipped.
///
/// Lookup is exact, except on Windows where a miss falls back to an
/// ASCII-uppercase index so that `path`, `Path` and `PATH` all resolve,
/// matching the platform's case-insensitive variable names. An exact
/// match always wins over the index.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
    folded: BTreeMap<String, String>,
    case_insensitive: bool,
}

impl EnvSnapshot {
    fn capture() -> Self {
        let mut pairs = vec![];
        let mut skipped = 0;
        for (name, value) in std::env::vars_os() {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => pairs.push((name, value)),
                _ => skipped += 1,
            }
        }
        let snapshot = Self::from_pairs(pairs, cfg!(windows));
        #[cfg(feature = "enable_log")]
        {
            if skipped > 0 {
                warn!("Skipped {} non-unicode environment variables.", skipped);
            }
            debug!("Captured {} environment variables.", snapshot.vars.len());
        }
        #[cfg(not(feature = "enable_log"))]
        let _ = skipped;
        snapshot
    }

    pub(crate) fn from_pairs(pairs: Vec<(String, String)>, case_insensitive: bool) -> Self {
        let mut vars = BTreeMap::new();
        let mut folded = BTreeMap::new();
        for (name, value) in pairs {
            if case_insensitive {
                folded.insert(name.to_ascii_uppercase(), value.clone());
            }
            vars.insert(name, value);
        }
        EnvSnapshot {
            vars,
            folded,
            case_insensitive,
        }
    }

    /// Get the value of `name` in this capture.
    pub fn value(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.vars.get(name) {
            return Some(value);
        }
        if self.case_insensitive {
            return self
                .folded
                .get(&name.to_ascii_uppercase())
                .map(|value| &value[..]);
        }
        None
    }

    /// The captured name to value map.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

/// The shared snapshot, captured on first use.
pub fn env_snapshot() -> &'static EnvSnapshot {
    &SNAPSHOT
}

/// Get the value of `name` from the shared snapshot, or [`None`] when
/// unset.
pub fn get_variable(name: &str) -> Option<String> {
    SNAPSHOT.value(name).map(str::to_owned)
}
