//! Tri-state optional field.
//!
//! The Galileo API distinguishes a key that was left out of a payload from a
//! key that was sent as `null`. `Option<T>` cannot express that, so optional
//! model fields use [`Field`] together with:
//!
//! ```ignore
//! #[serde(default, skip_serializing_if = "Field::is_unset")]
//! pub description: Field<String>,
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional model field: omitted, explicitly `null`, or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The key was absent from the payload.
    Unset,
    /// The key was present with a JSON `null`.
    Null,
    /// The key carried a value.
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    /// Borrow the value, collapsing `Unset` and `Null` to `None`.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Take the value, collapsing `Unset` and `Null` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }

    /// Value if present, `default` for both `Unset` and `Null`.
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }
}

impl<T: Clone> Field<&T> {
    pub fn cloned(self) -> Field<T> {
        self.map(Clone::clone)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` maps to an explicit `Null`, not `Unset`.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset only reaches here when a field forgot skip_serializing_if.
            Field::Unset | Field::Null => serializer.serialize_none(),
            Field::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        note: Field<String>,
    }

    #[test]
    fn test_absent_key_is_unset() {
        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(probe.note.is_unset());
        assert_eq!(serde_json::to_value(&probe).unwrap(), json!({}));
    }

    #[test]
    fn test_null_survives_round_trip() {
        let probe: Probe = serde_json::from_value(json!({"note": null})).unwrap();
        assert!(probe.note.is_null());
        assert_eq!(serde_json::to_value(&probe).unwrap(), json!({"note": null}));
    }

    #[test]
    fn test_value() {
        let probe: Probe = serde_json::from_value(json!({"note": "hi"})).unwrap();
        assert_eq!(probe.note, Field::Value("hi".to_string()));
        assert_eq!(probe.note.as_option().map(String::as_str), Some("hi"));
    }

    #[test]
    fn test_from_option_maps_none_to_null() {
        let f: Field<i32> = None.into();
        assert!(f.is_null());
        let f: Field<i32> = Some(3).into();
        assert_eq!(f.unwrap_or(0), 3);
        assert_eq!(Field::<i32>::Unset.unwrap_or(7), 7);
    }
}
