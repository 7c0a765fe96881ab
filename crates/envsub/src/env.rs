//! Environment accessor helpers.
//!
//! Independent of the parser: nothing here parses `.env` text, and nothing
//! in the parser touches an environment. Compose the two with explicit
//! imports of both modules.

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};

/// Destination for resolved variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvTarget {
    kind: TargetKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TargetKind {
    /// The current process environment, written through [`env::set_var`].
    Process,
    /// An in-memory map, leaving the process environment untouched.
    Memory(BTreeMap<String, String>),
}

/// Counts reported by [`EnvTarget::apply_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyReport {
    pub applied: usize,
    pub skipped: usize,
}

impl Default for EnvTarget {
    fn default() -> Self {
        Self::memory()
    }
}

impl EnvTarget {
    /// Target the current process environment.
    ///
    /// # Safety
    ///
    /// Writes go through [`env::set_var`], which mutates global process
    /// state. The caller must ensure no other threads concurrently read or
    /// write the process environment while this target is in use.
    pub unsafe fn process() -> Self {
        Self {
            kind: TargetKind::Process,
        }
    }

    /// An empty in-memory target.
    pub fn memory() -> Self {
        Self::from_memory(BTreeMap::new())
    }

    /// An in-memory target over an existing map.
    pub fn from_memory(map: BTreeMap<String, String>) -> Self {
        Self {
            kind: TargetKind::Memory(map),
        }
    }

    /// Read a variable from the target.
    pub fn get(&self, key: &str) -> Option<String> {
        match &self.kind {
            TargetKind::Process => env::var(key).ok(),
            TargetKind::Memory(map) => map.get(key).cloned(),
        }
    }

    /// Whether the target already has a binding for `key`.
    pub fn contains(&self, key: &str) -> bool {
        match &self.kind {
            TargetKind::Process => env::var_os(key).is_some(),
            TargetKind::Memory(map) => map.contains_key(key),
        }
    }

    /// Write one binding into the target.
    pub fn set(&mut self, key: &str, value: &str) {
        match &mut self.kind {
            TargetKind::Process => unsafe { env::set_var(key, value) },
            TargetKind::Memory(map) => {
                map.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Borrow the underlying map of an in-memory target.
    pub fn as_memory(&self) -> Option<&BTreeMap<String, String>> {
        match &self.kind {
            TargetKind::Memory(map) => Some(map),
            TargetKind::Process => None,
        }
    }

    /// Write every pair of a resolved map into the target, in key order.
    ///
    /// Resolution is already complete by the time a map reaches this point,
    /// so existing bindings are overwritten and never read back. Returns the
    /// number of bindings written.
    pub fn apply(&mut self, vars: &HashMap<String, String>) -> usize {
        let mut pairs: Vec<_> = vars.iter().collect();
        pairs.sort();
        for (key, value) in pairs {
            self.set(key, value);
        }
        vars.len()
    }

    /// Like [`EnvTarget::apply`], but keys the target already has win.
    pub fn apply_if_absent(&mut self, vars: &HashMap<String, String>) -> ApplyReport {
        let mut report = ApplyReport::default();
        let mut pairs: Vec<_> = vars.iter().collect();
        pairs.sort();
        for (key, value) in pairs {
            if self.contains(key) {
                report.skipped += 1;
            } else {
                self.set(key, value);
                report.applied += 1;
            }
        }
        report
    }
}

/// Read a variable from the process environment.
pub fn var(name: &str) -> Result<String, VarError> {
    env::var(name)
}

/// Read a variable from the process environment, falling back to a default.
pub fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
