//! Decoding half of the composer: one payload, many field groups.

use crate::Result;
use crate::compose::FieldGroup;

/// Broadcast one payload to every field group.
///
/// Each group parses the full payload and keeps only the keys it knows. The
/// first failing group aborts the split. Groups visited before it have already
/// absorbed the payload, so callers split into fresh groups and discard them
/// on error.
pub fn split(payload: &str, targets: &mut [&mut dyn FieldGroup]) -> Result<()> {
    tracing::trace!(groups = targets.len(), bytes = payload.len(), "splitting payload");
    for target in targets.iter_mut() {
        target.absorb(payload)?;
    }
    Ok(())
}
