use crate::types::{Opportunity, RawOpportunity};

/// Turn backend rows into display rows.
///
/// Copies every field and derives `button_variant` from the closed flag.
/// Order is preserved: it defines display order within a page.
pub fn normalize(raw: &[RawOpportunity]) -> Vec<Opportunity> {
    raw.iter().cloned().map(Opportunity::from).collect()
}
