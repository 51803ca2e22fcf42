//! Per-class preference schema.
//!
//! A [`ClassPreferenceSchema`] records every declared preference of a class,
//! keyed by name, in declaration order. Redeclaring a name replaces its
//! metadata in place; the position it was first declared at is kept.
//!
//! Subclasses never share a schema with their parent. [`derive`] produces a
//! fresh schema by replaying each parent entry, and the subclass declares on
//! top of that copy.
//!
//! [`derive`]: ClassPreferenceSchema::derive

use crate::meta::{PreferenceMetadata, PreferenceOptions};
use indexmap::IndexMap;
use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassPreferenceSchema {
    // IndexMap keeps the first insertion position on re-insert.
    prefs: IndexMap<String, PreferenceMetadata>,
}

impl ClassPreferenceSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or redeclare) a preference.
    pub fn declare(&mut self, name: &str, opts: PreferenceOptions) -> &PreferenceMetadata {
        let meta = PreferenceMetadata::new(name, opts);
        tracing::debug!(
            pref = name,
            pref_type = ?meta.pref_type(),
            group = meta.group(),
            redeclared = self.prefs.contains_key(name),
            "Declared preference"
        );
        let (index, _) = self.prefs.insert_full(name.to_string(), meta);
        &self.prefs[index]
    }

    /// Replay every entry of this schema into `child`, in order.
    ///
    /// Entries `child` already has are overwritten but keep their position.
    pub fn inherit_into(&self, child: &mut ClassPreferenceSchema) {
        for (name, meta) in &self.prefs {
            child.declare(name, meta.to_options());
        }
        tracing::debug!(inherited = self.prefs.len(), "Inherited preference schema");
    }

    /// A new schema starting from a snapshot of this one.
    pub fn derive(&self) -> ClassPreferenceSchema {
        let mut child = ClassPreferenceSchema::new();
        self.inherit_into(&mut child);
        child
    }

    /// Registered metadata for `name`.
    pub fn get(&self, name: &str) -> Option<&PreferenceMetadata> {
        self.prefs.get(name)
    }

    /// Registered metadata for `name`, or bare metadata carrying only the
    /// name when nothing is registered.
    pub fn metadata_for(&self, name: &str) -> Cow<'_, PreferenceMetadata> {
        match self.prefs.get(name) {
            Some(meta) => Cow::Borrowed(meta),
            None => Cow::Owned(PreferenceMetadata::bare(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prefs.contains_key(name)
    }

    /// Declared names in declaration order.
    pub fn names_in_order(&self) -> Vec<&str> {
        self.prefs.keys().map(String::as_str).collect()
    }

    /// `(name, metadata)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PreferenceMetadata)> {
        self.prefs.iter().map(|(name, meta)| (name.as_str(), meta))
    }

    pub fn len(&self) -> usize {
        self.prefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefs.is_empty()
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.prefs.get(name).and_then(PreferenceMetadata::description)
    }

    /// Distinct groups in first-seen order. `None` (no group) is included
    /// when any preference is ungrouped.
    pub fn groups(&self) -> Vec<Option<&str>> {
        let mut groups: Vec<Option<&str>> = Vec::new();
        for meta in self.prefs.values() {
            if !groups.contains(&meta.group()) {
                groups.push(meta.group());
            }
        }
        groups
    }

    /// Group names sorted, with the ungrouped set rendered as `""`.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .groups()
            .into_iter()
            .map(|g| g.unwrap_or_default().to_string())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::PrefType;
    use crate::value::PrefValue;

    fn base_schema() -> ClassPreferenceSchema {
        let mut schema = ClassPreferenceSchema::new();
        schema.declare(
            "base_boolean",
            PreferenceOptions::new().default(false).group("base"),
        );
        schema
    }

    #[test]
    fn declare_records_order() {
        let mut schema = ClassPreferenceSchema::new();
        schema.declare("first", PreferenceOptions::new().default(false));
        schema.declare("second", PreferenceOptions::new().default(1));
        assert_eq!(schema.names_in_order(), vec!["first", "second"]);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn redeclare_updates_meta_without_moving() {
        let mut schema = ClassPreferenceSchema::new();
        schema.declare("a", PreferenceOptions::new().default(1));
        schema.declare("b", PreferenceOptions::new().default(2));
        let meta = schema.declare("a", PreferenceOptions::new().default("x").group("g"));
        assert_eq!(meta.pref_type(), PrefType::String);

        assert_eq!(schema.names_in_order(), vec!["a", "b"]);
        assert_eq!(schema.get("a").unwrap().group(), Some("g"));
    }

    #[test]
    fn derive_copies_and_isolates() {
        let parent = base_schema();
        let mut child = parent.derive();
        child.declare("sub_1_pref", PreferenceOptions::new().default("Hello there"));
        child.declare("base_boolean", PreferenceOptions::new().default(true));

        assert_eq!(parent.names_in_order(), vec!["base_boolean"]);
        assert_eq!(
            parent.get("base_boolean").unwrap().default(),
            Some(&PrefValue::Boolean(false))
        );
        assert_eq!(child.names_in_order(), vec!["base_boolean", "sub_1_pref"]);
        assert_eq!(
            child.get("base_boolean").unwrap().default(),
            Some(&PrefValue::Boolean(true))
        );
    }

    #[test]
    fn derive_preserves_metadata() {
        let parent = base_schema();
        let child = parent.derive();
        assert_eq!(child.get("base_boolean"), parent.get("base_boolean"));
    }

    #[test]
    fn inherit_into_existing_child_keeps_child_positions() {
        let parent = base_schema();
        let mut child = ClassPreferenceSchema::new();
        child.declare("own", PreferenceOptions::new().default(1));
        parent.inherit_into(&mut child);
        assert_eq!(child.names_in_order(), vec!["own", "base_boolean"]);
    }

    #[test]
    fn metadata_for_unknown_is_bare() {
        let schema = base_schema();
        let meta = schema.metadata_for("missing");
        assert!(matches!(meta, Cow::Owned(_)));
        assert_eq!(meta.name(), "missing");
        assert_eq!(meta.default(), None);
        assert_eq!(meta.group(), None);
        assert_eq!(meta.pref_type(), PrefType::Untyped);

        assert!(matches!(schema.metadata_for("base_boolean"), Cow::Borrowed(_)));
    }

    #[test]
    fn groups_are_first_seen_and_include_ungrouped() {
        let mut schema = ClassPreferenceSchema::new();
        schema.declare("a", PreferenceOptions::new().group("g1"));
        schema.declare("b", PreferenceOptions::new().group("g2"));
        schema.declare("c", PreferenceOptions::new());
        schema.declare("d", PreferenceOptions::new().group("g1"));
        assert_eq!(schema.groups(), vec![Some("g1"), Some("g2"), None]);
        assert_eq!(schema.group_names(), vec!["", "g1", "g2"]);
    }

    #[test]
    fn description_lookup() {
        let mut schema = ClassPreferenceSchema::new();
        schema.declare("a", PreferenceOptions::new().description("About a"));
        schema.declare("b", PreferenceOptions::new());
        assert_eq!(schema.description("a"), Some("About a"));
        assert_eq!(schema.description("b"), None);
        assert_eq!(schema.description("zzz"), None);
    }
}
