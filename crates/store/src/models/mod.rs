pub mod client;
pub mod debt;
pub mod status;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field as `Some(value)`, including an explicit `null`.
///
/// Paired with `#[serde(default)]` on an `Option<Option<T>>` field this
/// distinguishes "absent" (`None`) from "clear" (`Some(None)`).
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
