//! Tag aggregation.
//!
//! There is no tag table: the tag set is derived from the notes
//! themselves, flattened, deduplicated and sorted byte-lexicographically.

use std::collections::BTreeSet;

/// Flatten any number of tag lists into a sorted, duplicate-free list.
pub fn unique_sorted_tags<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    tags.into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Merge `incoming` into an already sorted tag list.
///
/// Returns `true` if at least one previously unknown tag was added.
pub fn merge_tags(known: &mut Vec<String>, incoming: &[String]) -> bool {
    let mut changed = false;
    for tag in incoming {
        if let Err(pos) = known.binary_search(tag) {
            known.insert(pos, tag.clone());
            changed = true;
        }
    }
    changed
}
