//! Preference metadata and declaration options.
//!
//! A [`PreferenceMetadata`] is built once, at declaration time, from a
//! [`PreferenceOptions`] and never changes afterwards. Redeclaring a name
//! produces a new metadata value that replaces the old one in the schema.

use crate::coerce::coerce_value;
use crate::value::{PrefValue, ScalarType};

/// The declared type of a preference.
///
/// This determines how raw values are coerced on every read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefType {
    String,
    Boolean,
    Integer,
    Float,
    Symbol,

    /// Closed set of allowed values, all of the given base kind.
    ///
    /// Values are coerced to the base kind; membership is checked by the
    /// accessor at write time.
    Option(ScalarType),

    /// No type could be determined (no default, no explicit type).
    /// Values pass through unchanged.
    Untyped,
}

impl PrefType {
    /// Infer the type from a default value's kind.
    pub fn infer(default: Option<&PrefValue>) -> Self {
        default.map_or(PrefType::Untyped, |v| v.kind().into())
    }

    /// The scalar kind values are coerced to, if any.
    pub fn base(self) -> Option<ScalarType> {
        match self {
            PrefType::String => Some(ScalarType::String),
            PrefType::Boolean => Some(ScalarType::Boolean),
            PrefType::Integer => Some(ScalarType::Integer),
            PrefType::Float => Some(ScalarType::Float),
            PrefType::Symbol => Some(ScalarType::Symbol),
            PrefType::Option(base) => Some(base),
            PrefType::Untyped => None,
        }
    }
}

impl From<ScalarType> for PrefType {
    fn from(kind: ScalarType) -> Self {
        match kind {
            ScalarType::String => PrefType::String,
            ScalarType::Boolean => PrefType::Boolean,
            ScalarType::Integer => PrefType::Integer,
            ScalarType::Float => PrefType::Float,
            ScalarType::Symbol => PrefType::Symbol,
        }
    }
}

/// Options accepted when declaring a preference.
///
/// Built with chained setters:
///
/// ```
/// use preferable::{PreferenceOptions, PrefValue};
///
/// let opts = PreferenceOptions::new()
///     .default(false)
///     .group("base")
///     .description("Enable the base behavior");
/// assert_eq!(opts.default, Some(PrefValue::Boolean(false)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceOptions {
    pub group: Option<String>,
    pub description: Option<String>,
    pub default: Option<PrefValue>,
    pub pref_type: Option<PrefType>,
    pub options: Option<Vec<PrefValue>>,
    pub queryable: bool,
    pub order: Option<usize>,
}

impl PreferenceOptions {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default(mut self, default: impl Into<PrefValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn pref_type(mut self, pref_type: PrefType) -> Self {
        self.pref_type = Some(pref_type);
        self
    }

    /// Restrict the preference to an ordered set of allowed values.
    pub fn options<I, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PrefValue>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Mark the preference as queryable: its default gets materialized into
    /// the store before a save.
    pub fn queryable(mut self) -> Self {
        self.queryable = true;
        self
    }

    pub fn order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }
}

/// Descriptor for a single declared preference.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceMetadata {
    name: String,
    pref_type: PrefType,
    default: Option<PrefValue>,
    group: Option<String>,
    description: Option<String>,
    options: Option<Vec<PrefValue>>,
    queryable: bool,
    order: Option<usize>,
}

impl PreferenceMetadata {
    /// Build metadata from declaration options.
    ///
    /// - A non-empty `options` list forces [`PrefType::Option`], with the base
    ///   kind taken from an explicit scalar type or else the first option.
    ///   The default falls back to the first option.
    /// - Otherwise an explicit type wins, then inference from the default.
    /// - The default is coerced to the resolved type.
    pub fn new(name: impl Into<String>, opts: PreferenceOptions) -> Self {
        let options = opts.options.filter(|o| !o.is_empty());

        let pref_type = match &options {
            Some(options) => {
                let base = opts
                    .pref_type
                    .and_then(PrefType::base)
                    .unwrap_or_else(|| options[0].kind());
                PrefType::Option(base)
            }
            None => opts
                .pref_type
                .unwrap_or_else(|| PrefType::infer(opts.default.as_ref())),
        };

        let options = options.map(|options| {
            options
                .iter()
                .map(|o| coerce_value(o, pref_type))
                .collect::<Vec<_>>()
        });

        let default = match opts.default {
            Some(default) => Some(coerce_value(&default, pref_type)),
            None => options.as_ref().and_then(|o| o.first().cloned()),
        };

        Self {
            name: name.into(),
            pref_type,
            default,
            group: opts.group,
            description: opts.description,
            options,
            queryable: opts.queryable,
            order: opts.order,
        }
    }

    /// Metadata carrying only a name: untyped, no default, no group.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, PreferenceOptions::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pref_type(&self) -> PrefType {
        self.pref_type
    }

    pub fn default(&self) -> Option<&PrefValue> {
        self.default.as_ref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn options(&self) -> Option<&[PrefValue]> {
        self.options.as_deref()
    }

    pub fn has_options(&self) -> bool {
        self.options.is_some()
    }

    /// Whether `value` may be stored. Always true without an options list.
    pub fn allows(&self, value: &PrefValue) -> bool {
        self.options
            .as_ref()
            .map_or(true, |options| options.contains(value))
    }

    pub fn queryable(&self) -> bool {
        self.queryable
    }

    pub fn order(&self) -> Option<usize> {
        self.order
    }

    /// Convert back into declaration options, such that
    /// `PreferenceMetadata::new(name, meta.to_options()) == meta`.
    pub fn to_options(&self) -> PreferenceOptions {
        PreferenceOptions {
            group: self.group.clone(),
            description: self.description.clone(),
            default: self.default.clone(),
            pref_type: Some(self.pref_type),
            options: self.options.clone(),
            queryable: self.queryable,
            order: self.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;

    #[test]
    fn infers_type_from_default() {
        let cases = [
            (PrefValue::from(false), PrefType::Boolean),
            (PrefValue::from("Kitchen"), PrefType::String),
            (PrefValue::from(52), PrefType::Integer),
            (PrefValue::from(30.28), PrefType::Float),
            (PrefValue::symbol("one"), PrefType::Symbol),
        ];
        for (default, expected) in cases {
            let meta = PreferenceMetadata::new("p", PreferenceOptions::new().default(default));
            assert_eq!(meta.pref_type(), expected);
        }
    }

    #[test]
    fn no_default_and_no_type_is_untyped() {
        let meta = PreferenceMetadata::bare("p");
        assert_eq!(meta.pref_type(), PrefType::Untyped);
        assert_eq!(meta.default(), None);
        assert_eq!(meta.group(), None);
        assert!(!meta.has_options());
    }

    #[test]
    fn explicit_type_wins_and_coerces_default() {
        let meta = PreferenceMetadata::new(
            "p",
            PreferenceOptions::new()
                .default("42")
                .pref_type(PrefType::Integer),
        );
        assert_eq!(meta.pref_type(), PrefType::Integer);
        assert_eq!(meta.default(), Some(&PrefValue::Integer(42)));
    }

    #[test]
    fn options_force_option_type_and_first_default() {
        let meta = PreferenceMetadata::new("p", PreferenceOptions::new().options([1, 2, 3]));
        assert_eq!(meta.pref_type(), PrefType::Option(ScalarType::Integer));
        assert_eq!(meta.default(), Some(&PrefValue::Integer(1)));
        assert!(meta.has_options());
    }

    #[test]
    fn options_keep_explicit_default() {
        let meta = PreferenceMetadata::new(
            "p",
            PreferenceOptions::new()
                .default("Two")
                .options(["One", "Two", "Three"]),
        );
        assert_eq!(meta.default(), Some(&PrefValue::from("Two")));
    }

    #[test]
    fn empty_options_are_ignored() {
        let meta = PreferenceMetadata::new(
            "p",
            PreferenceOptions::new()
                .default(true)
                .options(Vec::<PrefValue>::new()),
        );
        assert_eq!(meta.pref_type(), PrefType::Boolean);
        assert!(!meta.has_options());
    }

    #[test]
    fn allows_checks_membership() {
        let meta = PreferenceMetadata::new(
            "p",
            PreferenceOptions::new().options([Symbol::new("one"), Symbol::new("two")]),
        );
        assert!(meta.allows(&PrefValue::symbol("two")));
        assert!(!meta.allows(&PrefValue::symbol("seven")));
        assert!(PreferenceMetadata::bare("q").allows(&PrefValue::from(7)));
    }

    #[test]
    fn to_options_replays_identically() {
        let meta = PreferenceMetadata::new(
            "p",
            PreferenceOptions::new()
                .group("g")
                .description("desc")
                .options(["a", "b"])
                .queryable()
                .order(3),
        );
        assert_eq!(PreferenceMetadata::new("p", meta.to_options()), meta);
    }
}
