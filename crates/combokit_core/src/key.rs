//! Stable unique key generation for component instances.
//!
//! Builders created in loops or closures would collide if keyed by source
//! location alone, so each instance mixes a UUID into its key. An explicit
//! key can be supplied instead when deterministic behavior is needed (tests,
//! programmatic access).

use std::cell::OnceCell;
use uuid::Uuid;

/// Generates a stable unique key for a component instance.
///
/// Key format: `{prefix}@{file}:{line}:{uuid}`. The key is generated lazily
/// on first access and cached for the builder's lifetime.
pub struct InstanceKey {
    key: OnceCell<String>,
    prefix: &'static str,
    file: &'static str,
    line: u32,
}

impl InstanceKey {
    /// Create from the caller's source location with an auto-generated UUID.
    #[track_caller]
    pub fn new(prefix: &'static str) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            key: OnceCell::new(),
            prefix,
            file: loc.file(),
            line: loc.line(),
        }
    }

    /// Create with an explicit user-provided key.
    pub fn explicit(key: impl Into<String>) -> Self {
        let instance = Self {
            key: OnceCell::new(),
            prefix: "",
            file: "",
            line: 0,
        };
        let _ = instance.key.set(key.into());
        instance
    }

    /// Get or generate the unique key.
    pub fn get(&self) -> &str {
        self.key.get_or_init(|| {
            format!(
                "{}@{}:{}:{}",
                self.prefix,
                self.file,
                self.line,
                Uuid::new_v4().as_simple()
            )
        })
    }

    /// Create a derived key for internal sub-state (`"{key}_{suffix}"`).
    pub fn derive(&self, suffix: &str) -> String {
        format!("{}_{}", self.get(), suffix)
    }
}

impl std::fmt::Debug for InstanceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InstanceKey({})", self.get())
    }
}

impl Clone for InstanceKey {
    fn clone(&self) -> Self {
        // A clone must address the same instance, so it pins the same key.
        Self::explicit(self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_unique_in_loop() {
        let mut keys = std::collections::HashSet::new();
        for _ in 0..8 {
            keys.insert(InstanceKey::new("combobox").get().to_string());
        }
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_explicit_key_is_verbatim() {
        assert_eq!(InstanceKey::explicit("country-picker").get(), "country-picker");
    }

    #[test]
    fn test_key_stable_across_reads() {
        let key = InstanceKey::new("combobox");
        assert_eq!(key.get(), key.get());
    }

    #[test]
    fn test_derive_and_clone() {
        let key = InstanceKey::explicit("base");
        assert_eq!(key.derive("open"), "base_open");
        assert_eq!(key.clone().get(), "base");
    }
}
