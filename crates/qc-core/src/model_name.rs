//! Strongly-typed model name wrapper.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Strongly-typed wrapper for dbt model names.
///
/// Prevents accidental mixing of model names with dataset names, table
/// names, or other string types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    /// Create a new `ModelName`, panicking in debug builds if the name is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        debug_assert!(!s.is_empty(), "ModelName must not be empty");
        Self(s)
    }

    /// Try to create a new `ModelName`, returning `None` if the name is empty.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name the compiled model is written to.
    pub fn sql_file_name(&self) -> String {
        format!("{}.sql", self.0)
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ModelName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModelName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for ModelName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModelName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for ModelName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModelName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_creation() {
        let name = ModelName::new("stg_orders");
        assert_eq!(name.as_str(), "stg_orders");
        assert_eq!(format!("{}", name), "stg_orders");
    }

    #[test]
    fn test_try_new_rejects_empty() {
        assert!(ModelName::try_new("").is_none());
        assert_eq!(
            ModelName::try_new("stg_orders"),
            Some(ModelName::new("stg_orders"))
        );
    }

    #[test]
    fn test_sql_file_name() {
        let name = ModelName::new("stg_orders");
        assert_eq!(name.sql_file_name(), "stg_orders.sql");
    }

    #[test]
    fn test_model_name_equality() {
        let name = ModelName::new("stg_orders");
        assert_eq!(name, "stg_orders");
        assert!(name.starts_with("stg_"));
    }

    #[test]
    fn test_model_name_borrow() {
        use std::collections::HashMap;
        let mut map: HashMap<ModelName, i32> = HashMap::new();
        map.insert(ModelName::new("stg_orders"), 42);
        // Lookup by &str thanks to Borrow<str>
        assert_eq!(map.get("stg_orders"), Some(&42));
    }

    #[test]
    fn test_model_name_serde() {
        let name = ModelName::new("stg_orders");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#""stg_orders""#);
    }
}
