//! Value types owned by the search provider's schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Columns the provider should fill in for each result.
///
/// Serialized under the provider's own member names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum RequestFlag {
    FileName,
    Path,
    FullPathAndFileName,
    Extension,
    Size,
    DateCreated,
    DateModified,
    DateAccessed,
    Attributes,
    FileListFileName,
    RunCount,
    DateRun,
    DateRecentlyChanged,
    HighlightedFileName,
    HighlightedPath,
    HighlightedFullPathAndFileName,
}

/// Sort order as the provider describes it.
///
/// The provider does not publish the shape of this value, so it is carried
/// through untouched and never inspected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortDescriptor(Value);

impl SortDescriptor {
    pub fn new<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Self)
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for SortDescriptor {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl FromStr for SortDescriptor {
    type Err = serde_json::Error;

    /// Parse JSON text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(Self)
    }
}
