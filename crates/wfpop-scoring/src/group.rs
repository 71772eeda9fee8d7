//! Deduplication of records into canonical-key groups.

use indexmap::IndexMap;
use wfpop_core::WorkflowRecord;

use crate::normalize::normalize_title;

/// The surviving representative of one canonical key, plus how many input
/// records collapsed into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub representative: WorkflowRecord,
    pub size: usize,
}

/// Grouping key for a record: the normalized title, falling back to the
/// normalized source URL. Records with neither share the empty key.
#[must_use]
pub fn canonical_key(record: &WorkflowRecord) -> String {
    let key = normalize_title(record.title.as_deref());
    if key.is_empty() {
        normalize_title(record.source_url.as_deref())
    } else {
        key
    }
}

/// Partitions records by canonical key, preserving first-seen key order.
///
/// Within a group the first record is the initial representative; a later
/// record replaces it only if its `views` metric is strictly greater, so
/// ties keep the earlier record. `views` is compared regardless of platform.
#[must_use]
pub fn group_records(records: Vec<WorkflowRecord>) -> IndexMap<String, Group> {
    let mut groups: IndexMap<String, Group> = IndexMap::new();

    for record in records {
        let key = canonical_key(&record);
        match groups.get_mut(&key) {
            Some(group) => {
                group.size += 1;
                if record.metric("views") > group.representative.metric("views") {
                    group.representative = record;
                }
            }
            None => {
                groups.insert(
                    key,
                    Group {
                        representative: record,
                        size: 1,
                    },
                );
            }
        }
    }

    groups
}
