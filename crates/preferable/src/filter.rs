//! Group filtering.
//!
//! [`GroupFilter`] selects the preferences a bulk query applies to: either
//! every declared preference, or those whose group is exactly the given one.
//! The ungrouped set is a group of its own (`Group(None)`).

use crate::meta::PreferenceMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    /// Every declared preference.
    #[default]
    All,

    /// Preferences whose group equals this one exactly.
    Group(Option<String>),
}

impl GroupFilter {
    /// Convenience: preferences in the named group.
    pub fn group(name: impl Into<String>) -> Self {
        GroupFilter::Group(Some(name.into()))
    }

    /// Convenience: preferences declared without a group.
    pub fn ungrouped() -> Self {
        GroupFilter::Group(None)
    }

    pub fn matches(&self, meta: &PreferenceMetadata) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Group(group) => meta.group() == group.as_deref(),
        }
    }
}

impl From<Option<&str>> for GroupFilter {
    fn from(group: Option<&str>) -> Self {
        GroupFilter::Group(group.map(str::to_string))
    }
}
