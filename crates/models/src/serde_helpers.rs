use serde::{Deserialize, Deserializer};

/// Keeps an explicit `null` apart from a missing field.
///
/// Use with `#[serde(default, deserialize_with = "...")]`: a missing field
/// stays `None`, `null` becomes `Some(None)` and a value `Some(Some(v))`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
