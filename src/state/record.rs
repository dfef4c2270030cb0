//! User record as exchanged with the users resource

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Treat an explicit JSON `null` like a missing member
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Postal address group of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suite: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zipcode: String,
    /// Members the form does not edit (e.g. `geo`), kept for round trips
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Employer group of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "catchPhrase", deserialize_with = "null_as_default")]
    pub catch_phrase: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bs: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A member of the users collection.
///
/// `id` is assigned by the remote resource. A user without one is an unsaved
/// draft, which is what puts the form into create mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: Company,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    /// Top-level members the form does not edit (e.g. `username`)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl User {
    /// An empty draft in create mode
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this record is an unsaved draft
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// One-line summary used in lists and log lines
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "(unnamed)"
        } else {
            &self.name
        }
    }
}
