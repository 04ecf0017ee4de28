//! Reference-first encoding for nodes that may be a `$ref` instead of inline content.
//!
//! A node with a non-empty pointer is written as `{"$ref": "..."}` and nothing
//! else, whatever its inline groups hold. Decoding probes for `$ref` first and
//! only falls back to the composer when there is none.

pub mod pointer;

pub use pointer::{ComponentGroup, Reference};

use crate::Result;
use crate::compose::{Composed, FieldGroup, encode_groups, split};

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node that can stand in for a component through a `$ref`.
pub trait Referable: Composed + Default {
    fn pointer(&self) -> Option<&Reference>;

    fn pointer_mut(&mut self) -> &mut Option<Reference>;

    /// A node whose only content is `reference`.
    fn by_ref(reference: Reference) -> Self {
        let mut node = Self::default();
        *node.pointer_mut() = Some(reference);
        node
    }

    fn is_ref(&self) -> bool {
        self.pointer().is_some_and(|r| !r.is_empty())
    }
}

/// What a reference-capable node looks like on the wire.
pub enum Shape<'a> {
    Pointer(&'a Reference),
    Inline(&'a [&'a dyn FieldGroup]),
}

impl<'a> Shape<'a> {
    pub fn of(pointer: Option<&'a Reference>, groups: &'a [&'a dyn FieldGroup]) -> Self {
        match pointer {
            Some(reference) if !reference.is_empty() => Shape::Pointer(reference),
            _ => Shape::Inline(groups),
        }
    }
}

#[derive(Serialize)]
struct RefOut<'a> {
    #[serde(rename = "$ref")]
    pointer: &'a str,
}

#[derive(Deserialize)]
struct RefProbe {
    #[serde(rename = "$ref", default)]
    pointer: Option<String>,
    #[serde(flatten)]
    siblings: BTreeMap<String, IgnoredAny>,
}

/// Write the pointer form when a pointer is set, else the merged groups.
pub fn encode_ref_first(
    pointer: Option<&Reference>,
    groups: &[&dyn FieldGroup],
) -> Result<String> {
    match Shape::of(pointer, groups) {
        Shape::Pointer(reference) => {
            let pointer = reference.to_string();
            Ok(serde_json::to_string(&RefOut { pointer: &pointer })?)
        }
        Shape::Inline(groups) => encode_groups(groups),
    }
}

/// Read a `$ref` if the payload has a non-empty one, else split into the groups.
///
/// With a `$ref` present the groups are not touched and any inline keys next
/// to it are ignored. The pointer is only cleared once the split succeeds.
pub fn decode_ref_first(
    payload: &str,
    pointer: &mut Option<Reference>,
    groups: &mut [&mut dyn FieldGroup],
) -> Result<()> {
    let probe: RefProbe = serde_json::from_str(payload)?;

    match probe.pointer.filter(|p| !p.is_empty()) {
        Some(target) => {
            if !probe.siblings.is_empty() {
                tracing::debug!(
                    pointer = %target,
                    ignored = probe.siblings.len(),
                    "dropping inline keys next to $ref"
                );
            }
            *pointer = Some(Reference::parse(&target));
            Ok(())
        }
        None => {
            split(payload, groups)?;
            *pointer = None;
            Ok(())
        }
    }
}
