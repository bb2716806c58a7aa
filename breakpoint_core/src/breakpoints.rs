// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered breakpoint table: unique names mapped to exact trigger widths.
//!
//! Order matters. [`classify`](crate::classify::classify) walks the entries in
//! insertion order and the first exact match wins, so two names sharing a
//! trigger width always resolve to the one declared first.
//!
//! ```
//! use breakpoint_core::breakpoints::Breakpoints;
//!
//! let bps = Breakpoints::from_pairs([("sm", 750), ("md", 970), ("lg", 1170)]).unwrap();
//! assert_eq!(bps.find_exact(970), Some("md"));
//! assert_eq!(bps.find_exact(971), None);
//! assert_eq!(bps.names().collect::<Vec<_>>(), ["sm", "md", "lg"]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;

/// A width in measurement units (pixels).
pub type Width = u32;

/// A single named breakpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    /// Unique breakpoint name, e.g. `"md"`.
    pub name: String,
    /// Exact width the reference element takes on while this breakpoint is active.
    pub trigger_width: Width,
}

/// Ordered mapping from breakpoint name to trigger width.
///
/// Names are unique. Re-inserting a name replaces its width but keeps its
/// original position, the same way assigning an existing key of an ordered
/// map does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
}

impl Breakpoints {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The Bootstrap 3 container widths: `sm = 750`, `md = 970`, `lg = 1170`.
    ///
    /// Pair with a default breakpoint of `"xs"`.
    pub fn bootstrap() -> Self {
        let mut out = Self::new();
        for (name, width) in [("sm", 750), ("md", 970), ("lg", 1170)] {
            out.entries.push(Breakpoint {
                name: name.into(),
                trigger_width: width,
            });
        }
        out
    }

    /// Build a table from `(name, width)` pairs, in order.
    pub fn from_pairs<N, I>(pairs: I) -> Result<Self, ConfigError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Width)>,
    {
        let mut out = Self::new();
        for (name, width) in pairs {
            out.insert(name, width)?;
        }
        Ok(out)
    }

    /// Insert or replace a breakpoint.
    ///
    /// Returns the previous trigger width if `name` was already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        trigger_width: Width,
    ) -> Result<Option<Width>, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if trigger_width == 0 {
            return Err(ConfigError::ZeroTriggerWidth { name });
        }
        if let Some(existing) = self.entries.iter_mut().find(|b| b.name == name) {
            let old = existing.trigger_width;
            existing.trigger_width = trigger_width;
            return Ok(Some(old));
        }
        self.entries.push(Breakpoint {
            name,
            trigger_width,
        });
        Ok(None)
    }

    /// Remove a breakpoint by name, returning its trigger width.
    pub fn remove(&mut self, name: &str) -> Option<Width> {
        let pos = self.entries.iter().position(|b| b.name == name)?;
        Some(self.entries.remove(pos).trigger_width)
    }

    /// Trigger width of `name`, if configured.
    pub fn get(&self, name: &str) -> Option<Width> {
        self.entries
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.trigger_width)
    }

    /// Whether `name` is configured.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|b| b.name == name)
    }

    /// Name of the first breakpoint whose trigger width equals `width` exactly.
    pub fn find_exact(&self, width: Width) -> Option<&str> {
        self.entries
            .iter()
            .find(|b| b.trigger_width == width)
            .map(|b| b.name.as_str())
    }

    /// Iterate entries in configured order.
    pub fn iter(&self) -> core::slice::Iter<'_, Breakpoint> {
        self.entries.iter()
    }

    /// Iterate names in configured order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|b| b.name.as_str())
    }

    /// Number of configured breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no breakpoints are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Breakpoints {
    type Item = &'a Breakpoint;
    type IntoIter = core::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::string::String;
    use core::fmt;

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Breakpoints, Width};

    impl Serialize for Breakpoints {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for bp in self {
                map.serialize_entry(&bp.name, &bp.trigger_width)?;
            }
            map.end()
        }
    }

    struct BreakpointsVisitor;

    impl<'de> Visitor<'de> for BreakpointsVisitor {
        type Value = Breakpoints;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of breakpoint names to trigger widths")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Breakpoints, A::Error> {
            let mut out = Breakpoints::new();
            while let Some((name, width)) = access.next_entry::<String, Width>()? {
                out.insert(name, width).map_err(de::Error::custom)?;
            }
            Ok(out)
        }
    }

    impl<'de> Deserialize<'de> for Breakpoints {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(BreakpointsVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn bootstrap_table_is_ordered() {
        let bps = Breakpoints::bootstrap();
        assert_eq!(bps.names().collect::<Vec<_>>(), vec!["sm", "md", "lg"]);
        assert_eq!(bps.get("lg"), Some(1170));
        assert_eq!(bps.len(), 3);
    }

    // Re-assigning a name keeps its slot so tie-breaking does not shift.
    #[test]
    fn reinsert_keeps_position() {
        let mut bps = Breakpoints::from_pairs([("a", 10), ("b", 20)]).unwrap();
        assert_eq!(bps.insert("a", 30), Ok(Some(10)));
        assert_eq!(bps.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bps.get("a"), Some(30));
    }

    #[test]
    fn rejects_empty_name_and_zero_width() {
        let mut bps = Breakpoints::new();
        assert_eq!(bps.insert("", 10), Err(ConfigError::EmptyName));
        assert_eq!(
            bps.insert("sm", 0),
            Err(ConfigError::ZeroTriggerWidth { name: "sm".into() })
        );
        assert!(bps.is_empty());
    }

    #[test]
    fn find_exact_prefers_earlier_entry() {
        let bps = Breakpoints::from_pairs([("first", 500), ("second", 500)]).unwrap();
        assert_eq!(bps.find_exact(500), Some("first"));
        assert_eq!(bps.find_exact(499), None);
    }

    #[test]
    fn remove_entry() {
        let mut bps = Breakpoints::bootstrap();
        assert_eq!(bps.remove("md"), Some(970));
        assert_eq!(bps.remove("md"), None);
        assert!(!bps.contains("md"));
        assert_eq!(bps.names().collect::<Vec<_>>(), vec!["sm", "lg"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_preserves_source_order() {
        let bps: Breakpoints = serde_json::from_str(r#"{"lg": 1170, "sm": 750}"#).unwrap();
        assert_eq!(bps.names().collect::<Vec<_>>(), vec!["lg", "sm"]);
        let json = serde_json::to_string(&bps).unwrap();
        assert_eq!(json, r#"{"lg":1170,"sm":750}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_non_map() {
        assert!(serde_json::from_str::<Breakpoints>("[750, 970]").is_err());
        assert!(serde_json::from_str::<Breakpoints>(r#""sm""#).is_err());
        assert!(serde_json::from_str::<Breakpoints>(r#"{"sm": 0}"#).is_err());
    }
}
