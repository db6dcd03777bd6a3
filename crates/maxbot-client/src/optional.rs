//! Tri-state fields for partial-update request bodies.
//!
//! A plain `Option<T>` already tells "absent" from "present", but request
//! structs use [`Optional`] so that every partial-update field carries the same
//! encoding rules:
//!
//! - unset: the key is omitted (with `skip_serializing_if = "Optional::is_unset"`)
//! - set to a zero value: the key is present (`""`, `false`, `0`)
//! - set to any other value: the key is present with that value
//!
//! Decoding treats JSON `null` as unset, so a server echoing `null` back never
//! turns into an explicit "clear this field" on the next round trip.
//!
//! ```
//! use maxbot_client::{OptBool, OptString, Optional};
//!
//! #[derive(serde::Serialize)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "Optional::is_unset")]
//!     title: OptString,
//!     #[serde(default, skip_serializing_if = "Optional::is_unset")]
//!     notify: OptBool,
//! }
//!
//! let patch = Patch { title: Optional::some(String::new()), notify: Optional::unset() };
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":""}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may or may not be set.
///
/// The default value is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(Option<T>);

/// Tri-state string.
pub type OptString = Optional<String>;
/// Tri-state boolean.
pub type OptBool = Optional<bool>;
/// Tri-state 64-bit integer.
pub type OptInt64 = Optional<i64>;

impl<T> Optional<T> {
    /// A set field holding `value`.
    pub const fn some(value: T) -> Self {
        Optional(Some(value))
    }

    /// An unset field.
    pub const fn unset() -> Self {
        Optional(None)
    }

    /// Whether a value has been set.
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Whether the field is unset. Used with `skip_serializing_if`.
    pub const fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// The value, if set.
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Replace the value, marking the field set.
    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    /// Take the value out, leaving the field unset.
    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    /// Convert into a plain `Option`.
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional(None)
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Optional::some(value)
    }
}

impl From<&str> for Optional<String> {
    fn from(value: &str) -> Self {
        Optional::some(value.to_string())
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional)
    }
}
