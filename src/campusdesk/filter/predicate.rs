use super::{FilterDescriptor, FilterState};
use crate::model::Record;
use crate::store::Entry;

/// AND of every descriptor against the current selections.
pub fn matches<R: Record>(
    record: &R,
    state: &FilterState,
    descriptors: &[FilterDescriptor],
) -> bool {
    descriptors
        .iter()
        .all(|d| d.matches(record, state.get(&d.key)))
}

/// The filtered sequence: matching entries in store order.
pub fn filter_entries<'a, R: Record>(
    entries: &'a [Entry<R>],
    state: &FilterState,
    descriptors: &[FilterDescriptor],
) -> Vec<&'a Entry<R>> {
    entries
        .iter()
        .filter(|e| matches(&e.record, state, descriptors))
        .collect()
}
