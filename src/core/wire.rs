//! Wire-form helpers shared by the snapshot types.

use serde::{Deserialize, Deserializer};

/// Deserialize a field, reading an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so an absent field behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
