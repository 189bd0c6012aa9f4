use crate::models::Entry;

/// Orders entries deepest first so that renaming one never changes the path
/// prefix of an entry still waiting to be processed. Equal depths keep their
/// input order.
pub fn order_for_restore(mut entries: Vec<Entry>) -> Vec<Entry> {
    // `sort_by` is stable.
    entries.sort_by(|a, b| b.depth().cmp(&a.depth()));
    entries
}
