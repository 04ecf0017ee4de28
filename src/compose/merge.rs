//! Byte-level merge of independently serialized field groups.

use crate::Result;
use crate::error::{Delimiter, Error};

use serde::de::IgnoredAny;
use std::collections::{BTreeMap, BTreeSet};

/// Merge serialized fragments into one JSON object (or array) text.
///
/// Absent fragments (`None`, blank, or `null`) are skipped. Members keep the
/// input order; empty `{}`/`[]` fragments contribute nothing. A single
/// contributing fragment is returned unchanged.
///
/// All present fragments must share one delimiter kind, and object fragments
/// must not repeat a key already written by an earlier fragment.
pub fn merge<I, S>(fragments: I) -> Result<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let present: Vec<(usize, S)> = fragments
        .into_iter()
        .enumerate()
        .filter_map(|(index, fragment)| fragment.map(|f| (index, f)))
        .filter(|(_, fragment)| !is_absent(fragment.as_ref()))
        .collect();

    let mut kind: Option<Delimiter> = None;
    // (index, full trimmed text, body without delimiters)
    let mut members: Vec<(usize, &str, &str)> = Vec::new();

    for (index, fragment) in &present {
        let index = *index;
        let text = fragment.as_ref().trim();
        let found = Delimiter::of(text).ok_or_else(|| Error::NotComposable {
            index,
            found: text.chars().next().unwrap_or(' '),
        })?;

        match kind {
            None => kind = Some(found),
            Some(expected) if expected != found => {
                return Err(Error::DelimiterMismatch {
                    index,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        let body = body_of(text, found).ok_or(Error::NotComposable {
            index,
            found: found.open(),
        })?;
        if !body.is_empty() {
            members.push((index, text, body));
        }
    }

    let kind = kind.unwrap_or(Delimiter::Object);
    match members.as_slice() {
        [] => Ok(kind.empty().to_string()),
        [(_, text, _)] => Ok((*text).to_string()),
        _ => {
            if kind == Delimiter::Object {
                ensure_disjoint(&members)?;
            }

            let mut out = String::with_capacity(members.iter().map(|(_, t, _)| t.len()).sum());
            out.push(kind.open());
            for (n, (_, _, body)) in members.iter().enumerate() {
                if n > 0 {
                    out.push(',');
                }
                out.push_str(body);
            }
            out.push(kind.close());

            tracing::trace!(fragments = members.len(), kind = %kind, "merged fragments");
            Ok(out)
        }
    }
}

fn is_absent(fragment: &str) -> bool {
    let trimmed = fragment.trim();
    trimmed.is_empty() || trimmed == "null"
}

/// Text between the outer delimiters, or `None` if the closer is missing.
fn body_of(text: &str, kind: Delimiter) -> Option<&str> {
    let inner = text.strip_prefix(kind.open())?.strip_suffix(kind.close())?;
    Some(inner.trim())
}

fn ensure_disjoint(members: &[(usize, &str, &str)]) -> Result<()> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for (index, text, _) in members {
        let keys: BTreeMap<String, IgnoredAny> = serde_json::from_str(text)?;
        for key in keys.into_keys() {
            if seen.contains(&key) {
                return Err(Error::DuplicateKey { index: *index, key });
            }
            seen.insert(key);
        }
    }
    Ok(())
}
