//! Composer: a node's wire form is the merge of its field groups.
//!
//! A node declares an ordered list of fields, each of which is a
//! [`FieldGroup`]. Encoding serializes every group on its own and merges the
//! resulting object texts (see [`merge`]); decoding hands the whole payload to
//! every group (see [`split`]), each of which picks out the keys it knows.
//!
//! The `composed!` and `referable!` macros generate the [`Composed`] impl and
//! the serde bridge for a node type from its group list.

pub mod merge;
pub mod split;

pub use merge::merge;
pub use split::split;

use crate::Result;

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// One independently serializable slice of a node's fields.
pub trait FieldGroup {
    /// JSON text of this group, or `None` when it has nothing to say.
    fn fragment(&self) -> Result<Option<String>>;

    /// Replace this group's content with what it recognizes in `payload`.
    fn absorb(&mut self, payload: &str) -> Result<()>;
}

impl<T> FieldGroup for T
where
    T: Serialize + DeserializeOwned,
{
    fn fragment(&self) -> Result<Option<String>> {
        let text = serde_json::to_string(self)?;
        if text == "null" {
            return Ok(None);
        }
        Ok(Some(text))
    }

    fn absorb(&mut self, payload: &str) -> Result<()> {
        *self = serde_json::from_str(payload)?;
        Ok(())
    }
}

/// A node whose wire form is built from its field groups.
pub trait Composed {
    fn encode(&self) -> Result<String>;

    fn decode(&mut self, payload: &str) -> Result<()>;
}

/// Serialize every group and merge the results in order.
pub fn encode_groups(groups: &[&dyn FieldGroup]) -> Result<String> {
    let fragments = groups
        .iter()
        .map(|group| group.fragment())
        .collect::<Result<Vec<_>>>()?;
    merge(fragments)
}

/// Serialize a composed node as its merged text, embedded verbatim.
pub fn serialize_composed<T, S>(node: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Composed + ?Sized,
    S: Serializer,
{
    let text = node.encode().map_err(S::Error::custom)?;
    let raw = RawValue::from_string(text).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}

/// Capture the node's raw JSON text and decode it into a fresh node.
pub fn deserialize_composed<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: Composed + Default,
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    let mut node = T::default();
    node.decode(raw.get()).map_err(D::Error::custom)?;
    Ok(node)
}

macro_rules! serde_bridge {
    ($node:ty) => {
        impl serde::Serialize for $node {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                $crate::compose::serialize_composed(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $node {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::compose::deserialize_composed(deserializer)
            }
        }
    };
}

/// `composed!(Node { group_a, group_b, extensions })`
///
/// `decode` splits into a fresh node and only replaces `self` on success.
macro_rules! composed {
    ($node:ty { $($group:ident),+ $(,)? }) => {
        impl $crate::compose::Composed for $node {
            fn encode(&self) -> $crate::Result<String> {
                $crate::compose::encode_groups(&[
                    $(&self.$group as &dyn $crate::compose::FieldGroup),+
                ])
            }

            fn decode(&mut self, payload: &str) -> $crate::Result<()> {
                let mut fresh = Self::default();
                $crate::compose::split(payload, &mut [
                    $(&mut fresh.$group as &mut dyn $crate::compose::FieldGroup),+
                ])?;
                *self = fresh;
                Ok(())
            }
        }

        $crate::compose::serde_bridge!($node);
    };
}

/// `referable!(Node, pointer_field { group_a, extensions })`
macro_rules! referable {
    ($node:ty, $pointer:ident { $($group:ident),+ $(,)? }) => {
        impl $crate::compose::Composed for $node {
            fn encode(&self) -> $crate::Result<String> {
                $crate::reference::encode_ref_first(self.$pointer.as_ref(), &[
                    $(&self.$group as &dyn $crate::compose::FieldGroup),+
                ])
            }

            /// A `$ref` payload replaces only the pointer. Inline payloads
            /// replace the whole node. On error the node is left as it was.
            fn decode(&mut self, payload: &str) -> $crate::Result<()> {
                let mut fresh = Self::default();
                $crate::reference::decode_ref_first(payload, &mut fresh.$pointer, &mut [
                    $(&mut fresh.$group as &mut dyn $crate::compose::FieldGroup),+
                ])?;
                match fresh.$pointer.take() {
                    Some(reference) => self.$pointer = Some(reference),
                    None => *self = fresh,
                }
                Ok(())
            }
        }

        impl $crate::reference::Referable for $node {
            fn pointer(&self) -> Option<&$crate::reference::Reference> {
                self.$pointer.as_ref()
            }

            fn pointer_mut(&mut self) -> &mut Option<$crate::reference::Reference> {
                &mut self.$pointer
            }
        }

        $crate::compose::serde_bridge!($node);
    };
}

pub(crate) use composed;
pub(crate) use referable;
pub(crate) use serde_bridge;
