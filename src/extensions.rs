//! `x-` extension fields, the last field group of every node.

use crate::diagnostics;

use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Extension keys start with `x-`, in any case.
pub fn is_extension_key(key: &str) -> bool {
    key.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-"))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(BTreeMap<String, Value>);

impl Extensions {
    /// Store an extension value. `null` is ignored; keys without the `x-`
    /// prefix are reported and dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if value.is_null() {
            return;
        }
        if !is_extension_key(&key) {
            diagnostics::warn(format!("dropping extension {:?}: key must start with x-", key));
            return;
        }
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl Serialize for Extensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExtensionVisitor;

        impl<'de> Visitor<'de> for ExtensionVisitor {
            type Value = Extensions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Extensions, A::Error> {
                let mut out = BTreeMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    if is_extension_key(&key) {
                        out.insert(key, access.next_value::<Value>()?);
                    } else {
                        access.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(Extensions(out))
            }
        }

        deserializer.deserialize_map(ExtensionVisitor)
    }
}

/// Read a map of nodes keyed by name, skipping `x-` keys that belong to the
/// sibling extension group.
pub(crate) fn deserialize_non_extension_map<'de, D, V>(
    deserializer: D,
) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    struct NonExtensionVisitor<V>(PhantomData<V>);

    impl<'de, V: DeserializeOwned> Visitor<'de> for NonExtensionVisitor<V> {
        type Value = BTreeMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut out = BTreeMap::new();
            while let Some(key) = access.next_key::<String>()? {
                if is_extension_key(&key) {
                    access.next_value::<IgnoredAny>()?;
                } else {
                    let value = access.next_value::<V>()?;
                    out.insert(key, value);
                }
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(NonExtensionVisitor(PhantomData))
}
