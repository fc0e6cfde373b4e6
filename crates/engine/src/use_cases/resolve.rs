//! Reference following shared by the relationship resolvers.
//!
//! A reference that does not resolve means the relationship entry does not
//! exist: the row is omitted and a debug event records what was skipped.
//! The only hard failure is a craft recipe naming a shop that is missing.

use std::fmt;

use eordb_domain::ItemId;

use crate::infrastructure::ports::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Shop not found: {shop_name} (recipe for item {item_id})")]
    ShopNotFound { shop_name: String, item_id: ItemId },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Passes `found` through, logging the reference when it is dangling.
pub(crate) fn follow<T>(
    found: Option<T>,
    relation: &'static str,
    reference: impl fmt::Display,
) -> Option<T> {
    if found.is_none() {
        tracing::debug!(relation, reference = %reference, "Omitting dangling reference");
    }
    found
}

/// Keeps the first occurrence of every key, preserving order.
pub(crate) fn first_seen<T, K: PartialEq>(
    values: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Vec<T> {
    let mut kept: Vec<T> = Vec::new();
    for value in values {
        let k = key(&value);
        if !kept.iter().any(|seen| key(seen) == k) {
            kept.push(value);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_keeps_order() {
        let kept = first_seen(["b", "a", "b", "c", "a"], |s| *s);
        assert_eq!(kept, vec!["b", "a", "c"]);
    }

    #[test]
    fn follow_is_transparent() {
        assert_eq!(follow(Some(3), "test", 1), Some(3));
        assert_eq!(follow::<i32>(None, "test", 1), None);
    }
}
