//! Deterministic model selection over the preference list.

use crate::catalog::ModelCatalog;
use crate::{Error, Result};

/// Pick the first preferred model that is in the catalog and not excluded.
///
/// Side-effect-free. Fails with [`Error::NoModelAvailable`] when no entry
/// qualifies; the message carries what the catalog did contain, since that is
/// the first thing anyone debugging an outage wants to see.
pub fn resolve<'a>(
    catalog: &ModelCatalog,
    preferred: &'a [String],
    excluded: &[String],
) -> Result<&'a str> {
    preferred
        .iter()
        .map(String::as_str)
        .find(|m| catalog.contains(m) && !excluded.iter().any(|e| e == m))
        .ok_or_else(|| Error::NoModelAvailable {
            found: catalog.display_names(),
        })
}
