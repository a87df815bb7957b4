//! Serde adapter that reads a map into a `Vec<(K, V)>`, keeping key order.
//!
//! Used with `#[serde(with = "ordered")]`. Duplicate keys are kept so
//! validation can report them.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

pub fn serialize<K, V, Ser>(entries: &[(K, V)], serializer: Ser) -> Result<Ser::Ok, Ser::Error>
where
    K: Serialize,
    V: Serialize,
    Ser: Serializer,
{
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(OrderedMapVisitor {
        _phantom: PhantomData,
    })
}

struct OrderedMapVisitor<K, V> {
    _phantom: PhantomData<fn() -> (K, V)>,
}

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = Vec<(K, V)>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}
