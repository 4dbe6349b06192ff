//! Serde helper for fields where "absent" and "explicit null" mean
//! different things.
//!
//! Use with `#[serde(default, deserialize_with = "nullable::deserialize")]`
//! on an `Option<Option<T>>` field:
//!
//! | JSON            | Value            |
//! |-----------------|------------------|
//! | key missing     | `None`           |
//! | `"key": null`   | `Some(None)`     |
//! | `"key": 5`      | `Some(Some(5))`  |

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    // Only called when the key is present; `default` covers the missing case.
    Option::<T>::deserialize(deserializer).map(Some)
}
