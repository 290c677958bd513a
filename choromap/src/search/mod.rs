//! Entity search and region highlighting.
//!
//! The highlighter takes a free-text query and restyles every region in
//! the collection: regions whose affiliate list contains the query as a
//! full entry get the highlight style plus a centroid-anchored label;
//! everything else reverts to its default classification style.
//!
//! Matching is case- and whitespace-insensitive but exact per entry; a
//! region listing `"Acme Corp, Beta Inc"` matches `"acme corp"` and
//! `" ACME CORP "` but not `"acme"`.

mod session;

pub use session::MapSession;

/// Normalize a raw search query: trim and lowercase.
///
/// An empty result means "no query" and is treated as a full reset by
/// [`MapSession::apply_search`].
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize a raw affiliate list into comparable entries.
///
/// Splits on commas, trims and lowercases each entry, and discards
/// entries that are empty after trimming.
pub fn normalize_affiliates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Full-entry membership test of a normalized query in an affiliate list.
///
/// `query` must already be normalized and non-empty. Regions without
/// affiliate data never match.
pub fn matches(affiliates: Option<&str>, query: &str) -> bool {
    match affiliates {
        Some(raw) => normalize_affiliates(raw).iter().any(|entry| entry == query),
        None => false,
    }
}
