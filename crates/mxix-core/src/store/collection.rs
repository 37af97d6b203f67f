// ── Keyed collection operations ──
//
// Ordered `Vec<T>` slots keyed by a string id. Order is insertion order
// and is preserved by every operation. Duplicate ids are possible under
// `KeyPolicy::Permissive`; lookups then resolve to the last match.

use crate::config::KeyPolicy;
use crate::error::CoreError;
use crate::model::Keyed;

fn duplicate<T: Keyed>(id: &str) -> CoreError {
    CoreError::DuplicateKey {
        collection: T::COLLECTION.into(),
        id: id.into(),
    }
}

/// Append `item`. Under `Unique`, fails if its id is already present.
pub(crate) fn add<T: Keyed>(
    items: &mut Vec<T>,
    item: T,
    policy: KeyPolicy,
) -> Result<(), CoreError> {
    if policy == KeyPolicy::Unique && items.iter().any(|i| i.key() == item.key()) {
        return Err(duplicate::<T>(item.key()));
    }
    items.push(item);
    Ok(())
}

/// Drop every entry whose id is `id`. Returns how many were removed.
pub(crate) fn remove<T: Keyed>(items: &mut Vec<T>, id: &str) -> usize {
    let before = items.len();
    items.retain(|i| i.key() != id);
    before - items.len()
}

/// Replace every entry whose id is `id` with `replacement`.
///
/// The replacement's own id need not equal `id`. Under `Unique`, fails if
/// the replacement's id belongs to some other entry. Returns how many
/// entries were replaced; zero is a no-op, not an error.
pub(crate) fn update<T: Keyed + Clone>(
    items: &mut [T],
    id: &str,
    replacement: &T,
    policy: KeyPolicy,
) -> Result<usize, CoreError> {
    let new_id = replacement.key();
    if policy == KeyPolicy::Unique && new_id != id && items.iter().any(|i| i.key() == new_id) {
        return Err(duplicate::<T>(new_id));
    }

    let mut replaced = 0;
    for item in items.iter_mut().filter(|i| i.key() == id) {
        *item = replacement.clone();
        replaced += 1;
    }
    Ok(replaced)
}

/// Last entry with id `id` (last-write-wins under duplicates).
pub(crate) fn find<'a, T: Keyed>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().rev().find(|i| i.key() == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, u32);

    impl Keyed for Item {
        const COLLECTION: &'static str = "item";

        fn key(&self) -> &str {
            self.0
        }
    }

    fn items() -> Vec<Item> {
        vec![Item("a", 1), Item("b", 2), Item("c", 3)]
    }

    #[test]
    fn add_appends_and_permits_duplicates() {
        let mut v = items();
        add(&mut v, Item("a", 9), KeyPolicy::Permissive).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v.last(), Some(&Item("a", 9)));
        assert_eq!(find(&v, "a"), Some(&Item("a", 9)));
    }

    #[test]
    fn add_rejects_duplicates_when_unique() {
        let mut v = items();
        let err = add(&mut v, Item("b", 9), KeyPolicy::Unique).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateKey { ref id, .. } if id == "b"));
        assert_eq!(v, items());
    }

    #[test]
    fn remove_filters_every_match_and_keeps_order() {
        let mut v = items();
        v.push(Item("b", 7));
        assert_eq!(remove(&mut v, "b"), 2);
        assert_eq!(v, vec![Item("a", 1), Item("c", 3)]);
        assert_eq!(remove(&mut v, "zzz"), 0);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut v = items();
        let replaced = update(&mut v, "b", &Item("b", 20), KeyPolicy::Unique).unwrap();
        assert_eq!(replaced, 1);
        assert_eq!(v[1], Item("b", 20));
    }

    #[test]
    fn update_miss_is_noop() {
        let mut v = items();
        let replaced = update(&mut v, "nope", &Item("x", 0), KeyPolicy::Permissive).unwrap();
        assert_eq!(replaced, 0);
        assert_eq!(v, items());
    }

    #[test]
    fn update_may_rename_unless_it_collides() {
        let mut v = items();
        update(&mut v, "a", &Item("z", 1), KeyPolicy::Unique).unwrap();
        assert_eq!(v[0], Item("z", 1));

        let err = update(&mut v, "z", &Item("c", 1), KeyPolicy::Unique).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateKey { .. }));

        // Permissive lets the collision through.
        update(&mut v, "z", &Item("c", 1), KeyPolicy::Permissive).unwrap();
        assert_eq!(v.iter().filter(|i| i.0 == "c").count(), 2);
    }
}
