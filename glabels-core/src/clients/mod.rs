//! Typed clients for the gLabels batch tools.
//!
//! Responsibilities:
//! - Translate typed option structs into each tool's flag vocabulary
//! - Validate option combinations before anything is spawned
//! - Route template / input / explicit stdin bytes onto the child's stdin
//! - Delegate execution to the `CommandInvoker`
//!
//! `glabels3` wraps `glabels-3-batch`, `qt` wraps `glabels-batch-qt`.

pub mod glabels3;
pub mod qt;

pub use glabels3::{Glabels3Batch, Glabels3Options};
pub use qt::{GlabelsBatchQt, QtOptions};

use std::ffi::OsString;

/// Validated argument tokens and stdin payload for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedInvocation {
    /// Tokens appended after the invoker's base prefix
    pub args: Vec<OsString>,
    /// Bytes fed to the child's stdin (empty when nothing is streamed)
    pub stdin: Vec<u8>,
    /// True when output goes to stdout and is returned to the caller
    pub returns_stdout: bool,
}

/// Ordered string mapping for `--define` substitutions.
///
/// Iteration follows insertion order. Inserting an existing key replaces its
/// value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineMap {
    entries: Vec<(String, String)>,
}

impl DefineMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a variable, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DefineMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for DefineMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Appends `flag value` for a count option. Zero counts as unset.
pub(crate) fn push_count(args: &mut Vec<OsString>, flag: &str, value: Option<u32>) {
    if let Some(n) = value.filter(|n| *n != 0) {
        args.push(flag.into());
        args.push(n.to_string().into());
    }
}

/// Appends a bare flag when enabled.
pub(crate) fn push_switch(args: &mut Vec<OsString>, flag: &str, enabled: bool) {
    if enabled {
        args.push(flag.into());
    }
}
