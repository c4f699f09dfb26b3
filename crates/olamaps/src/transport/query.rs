//! Query-string parameters
//!
//! Parameters keep insertion order. Absent values are stored but never
//! serialized, and list values expand to one `key=value` pair per element.

use std::fmt;

use url::form_urlencoded;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// One value
    Scalar(String),
    /// Repeated values sent under the same key
    List(Vec<String>),
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(&str, String, &String, bool, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<T: fmt::Display> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

/// Ordered query parameter mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value under the same key
    #[must_use]
    pub fn insert(self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert_opt(key, Some(value))
    }

    /// Set a parameter that may be absent; absent values are skipped on encode
    #[must_use]
    pub fn insert_opt<V: Into<QueryValue>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        let key = key.into();
        let value = value.map(Into::into);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Look up a present value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Returns true if the key exists and has a value
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys, including absent ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys were inserted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over present key/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    /// Serialize to `application/x-www-form-urlencoded` form without a
    /// leading `?`; empty when no value survives filtering
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            match value {
                QueryValue::Scalar(v) => {
                    serializer.append_pair(key, v);
                },
                QueryValue::List(values) => {
                    for v in values {
                        serializer.append_pair(key, v);
                    }
                },
            }
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_encode_to_empty_string() {
        assert_eq!(QueryParams::new().encode(), "");
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let params = QueryParams::new()
            .insert_opt("location", None::<String>)
            .insert("input", "coffee")
            .insert_opt("radius", None::<u32>);
        assert_eq!(params.encode(), "input=coffee");
        assert_eq!(params.len(), 3);
        assert!(!params.contains("location"));
    }

    #[test]
    fn test_fully_filtered_params_encode_to_empty_string() {
        let params = QueryParams::new()
            .insert_opt("a", None::<&str>)
            .insert_opt("b", None::<bool>);
        assert_eq!(params.encode(), "");
    }

    #[test]
    fn test_list_values_repeat_key() {
        let params = QueryParams::new().insert("k", vec!["a", "b"]);
        assert_eq!(params.encode(), "k=a&k=b");
    }

    #[test]
    fn test_empty_list_produces_nothing() {
        let params = QueryParams::new().insert("k", Vec::<String>::new());
        assert_eq!(params.encode(), "");
    }

    #[test]
    fn test_scalars_are_stringified() {
        let params = QueryParams::new()
            .insert("flag", false)
            .insert("radius", 500_u32)
            .insert("lat", 12.5_f64)
            .insert("whole", 1.0_f64);
        assert_eq!(params.encode(), "flag=false&radius=500&lat=12.5&whole=1");
    }

    #[test]
    fn test_form_encoding() {
        let params = QueryParams::new()
            .insert("address", "MG Road, Bengaluru")
            .insert("latlng", "12.9,77.6");
        assert_eq!(params.encode(), "address=MG+Road%2C+Bengaluru&latlng=12.9%2C77.6");
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let params = QueryParams::new()
            .insert("a", "1")
            .insert("b", "2")
            .insert("a", "3");
        assert_eq!(params.encode(), "a=3&b=2");
        assert_eq!(params.get("a"), Some(&QueryValue::Scalar("3".to_string())));
    }

    #[test]
    fn test_reinsert_absent_removes_from_output() {
        let params = QueryParams::new().insert("a", "1").insert_opt("a", None::<&str>);
        assert_eq!(params.encode(), "");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn absent_keys_never_serialized(
                present in proptest::collection::vec("[a-m]{1,6}", 0..6),
                absent in proptest::collection::vec("[n-z]{1,6}", 1..6),
            ) {
                let mut params = QueryParams::new();
                for key in &absent {
                    params = params.insert_opt(key.clone(), None::<String>);
                }
                for key in &present {
                    params = params.insert(key.clone(), "v");
                }
                let encoded = params.encode();
                for pair in encoded.split('&').filter(|p| !p.is_empty()) {
                    let key = pair.split('=').next().unwrap_or_default();
                    prop_assert!(!absent.iter().any(|a| a == key));
                }
            }

            #[test]
            fn list_values_expand_in_order(
                values in proptest::collection::vec("[a-z0-9]{1,8}", 1..8),
            ) {
                let params = QueryParams::new().insert("k", values.clone());
                let expected: Vec<String> = values.iter().map(|v| format!("k={v}")).collect();
                prop_assert_eq!(params.encode(), expected.join("&"));
            }
        }
    }
}
