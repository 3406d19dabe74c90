//! Operators and value shapes shared by filter models.

use serde::{Deserialize, Serialize};

/// Operators for free-text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOperator {
    Eq,
    Ne,
    Contains,
    OneOf,
    NotIn,
}

/// Operators for enumerated or id columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityOperator {
    Eq,
    Ne,
    OneOf,
    NotIn,
}

/// Operators for ordered columns (dates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// Operators for numeric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Between,
}

/// A single value or a list of them. A scalar is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(v) => std::slice::from_ref(v),
            OneOrMany::Many(vs) => vs,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

/// Value of a numeric filter.
///
/// Integers are tried before floats, so `3` is `Int` and `3.0` is `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
    Ints(Vec<i64>),
    Floats(Vec<f64>),
}

literal_tag!(
    /// `sort_type` of a column sort clause.
    ColumnSort = "column"
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_or_many_order() {
        let one: OneOrMany<String> = serde_json::from_value(json!("a")).unwrap();
        assert_eq!(one, OneOrMany::One("a".into()));
        let many: OneOrMany<String> = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(many.as_slice().len(), 2);
    }

    #[test]
    fn test_number_value_int_before_float() {
        assert_eq!(serde_json::from_value::<NumberValue>(json!(3)).unwrap(), NumberValue::Int(3));
        assert_eq!(
            serde_json::from_value::<NumberValue>(json!(3.5)).unwrap(),
            NumberValue::Float(3.5)
        );
        assert_eq!(
            serde_json::from_value::<NumberValue>(json!([1, 2])).unwrap(),
            NumberValue::Ints(vec![1, 2])
        );
        assert_eq!(
            serde_json::from_value::<NumberValue>(json!([0.1, 2])).unwrap(),
            NumberValue::Floats(vec![0.1, 2.0])
        );
    }

    #[test]
    fn test_column_sort_literal() {
        assert_eq!(serde_json::to_value(ColumnSort::Value).unwrap(), json!("column"));
        assert!(serde_json::from_value::<ColumnSort>(json!("row")).is_err());
    }
}
