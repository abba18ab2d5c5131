use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

thread_local! {
    // Root locale at default (tertiary) strength, non-ignorable punctuation.
    static ROOT: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compare two names in human reading order.
///
/// Uses ICU root collation: punctuation and symbols before digits, digits
/// before letters (`"_app.scss" < "+page.svelte" < "1.txt" < "a.txt"`),
/// letters ignoring case and accents first, then unaccented before accented,
/// then lowercase before uppercase.
///
/// Byte order breaks any remaining tie so the ordering is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    ROOT.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    })
    .then_with(|| a.cmp(b))
}
