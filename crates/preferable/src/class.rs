//! Class descriptors.
//!
//! A [`PreferableClass`] is the explicit stand-in for "a class that declares
//! preferences": it owns a [`ClassPreferenceSchema`] and an accessor for every
//! declared name. Subclasses are created with [`PreferableClass::subclass`],
//! which starts from a snapshot of the parent's schema.
//!
//! ```
//! use preferable::{PreferableClass, PreferenceOptions};
//!
//! let mut base = PreferableClass::new("Base");
//! base.declare("base_boolean", PreferenceOptions::new().default(false).group("base"));
//!
//! let mut sub = base.subclass("Sub1");
//! sub.declare("sub_1_pref", PreferenceOptions::new().default("Hello there"));
//!
//! assert_eq!(sub.schema().names_in_order(), vec!["base_boolean", "sub_1_pref"]);
//! assert_eq!(base.schema().names_in_order(), vec!["base_boolean"]);
//! ```

use crate::accessor::PreferenceAccessor;
use crate::config::PreferableConfig;
use crate::error::{PreferableError, Result};
use crate::meta::PreferenceOptions;
use crate::schema::ClassPreferenceSchema;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PreferableClass {
    name: String,
    config: PreferableConfig,
    schema: ClassPreferenceSchema,
    accessors: HashMap<String, PreferenceAccessor>,
}

impl PreferableClass {
    /// A root class with the default config.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, PreferableConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: PreferableConfig) -> Self {
        Self {
            name: name.into(),
            config,
            schema: ClassPreferenceSchema::new(),
            accessors: HashMap::new(),
        }
    }

    /// A subclass starting from this class's current schema and config.
    ///
    /// Declarations made on either class afterwards are not seen by the other.
    pub fn subclass(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(parent = %self.name, class = %name, "Deriving preference subclass");
        let mut child = Self::with_config(name, self.config.clone());
        self.schema.inherit_into(&mut child.schema);
        child.rebuild_accessors();
        child
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &PreferableConfig {
        &self.config
    }

    pub fn schema(&self) -> &ClassPreferenceSchema {
        &self.schema
    }

    /// Declare a preference and register its accessor.
    pub fn declare(&mut self, name: &str, opts: PreferenceOptions) -> &PreferenceAccessor {
        let meta = self.schema.declare(name, opts).clone();
        let accessor = PreferenceAccessor::new(meta, self.config.clone());
        self.accessors.insert(name.to_string(), accessor);
        &self.accessors[name]
    }

    /// The accessor registered for `name`.
    pub fn accessor(&self, name: &str) -> Option<&PreferenceAccessor> {
        self.accessors.get(name)
    }

    /// Like [`accessor`](Self::accessor), but unknown names are an error.
    pub fn require(&self, name: &str) -> Result<&PreferenceAccessor> {
        self.accessor(name)
            .ok_or_else(|| PreferableError::UnknownPreference(name.to_string()))
    }

    /// Accessors in declaration order.
    pub fn accessors(&self) -> impl Iterator<Item = &PreferenceAccessor> {
        self.schema
            .names_in_order()
            .into_iter()
            .filter_map(|name| self.accessors.get(name))
    }

    fn rebuild_accessors(&mut self) {
        self.accessors = self
            .schema
            .iter()
            .map(|(name, meta)| {
                (
                    name.to_string(),
                    PreferenceAccessor::new(meta.clone(), self.config.clone()),
                )
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrefValue;

    #[test]
    fn declare_registers_accessor() {
        let mut class = PreferableClass::new("Base");
        let acc = class.declare("flag", PreferenceOptions::new().default(false));
        assert_eq!(acc.name(), "flag");
        assert!(class.accessor("flag").is_some());
        assert!(class.accessor("other").is_none());
    }

    #[test]
    fn require_unknown_is_error() {
        let class = PreferableClass::new("Base");
        let err = class.require("nope").unwrap_err();
        assert!(matches!(err, PreferableError::UnknownPreference(name) if name == "nope"));
    }

    #[test]
    fn redeclare_replaces_accessor_metadata() {
        let mut class = PreferableClass::new("Base");
        class.declare("flag", PreferenceOptions::new().default(false));
        class.declare("flag", PreferenceOptions::new().default(true));
        assert_eq!(
            class.accessor("flag").unwrap().meta().default(),
            Some(&PrefValue::Boolean(true))
        );
        assert_eq!(class.accessors().count(), 1);
    }

    #[test]
    fn subclass_gets_accessors_for_inherited_prefs() {
        let mut base = PreferableClass::new("Base");
        base.declare("base_boolean", PreferenceOptions::new().default(false));
        let sub = base.subclass("Sub1");
        assert!(sub.accessor("base_boolean").is_some());
        assert_eq!(sub.name(), "Sub1");
    }

    #[test]
    fn later_parent_declarations_do_not_leak() {
        let mut base = PreferableClass::new("Base");
        base.declare("early", PreferenceOptions::new().default(1));
        let sub = base.subclass("Sub");
        base.declare("late", PreferenceOptions::new().default(2));

        assert!(sub.accessor("late").is_none());
        assert_eq!(sub.schema().names_in_order(), vec!["early"]);
    }

    #[test]
    fn subclass_inherits_config() {
        let config = PreferableConfig {
            reject_invalid_options: false,
            ..PreferableConfig::default()
        };
        let base = PreferableClass::with_config("Base", config.clone());
        assert_eq!(base.subclass("Sub").config(), &config);
    }

    #[test]
    fn accessors_follow_declaration_order() {
        let mut class = PreferableClass::new("Seq");
        for name in ["first", "second", "third"] {
            class.declare(name, PreferenceOptions::new().default(false));
        }
        let names: Vec<_> = class.accessors().map(|a| a.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
