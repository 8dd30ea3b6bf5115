//! Static-info cache.
//!
//! Entries live exactly as long as their unit does: they are dropped when a
//! broadcast no longer lists the unit, never on a timer.

use std::collections::{HashMap, HashSet};

use rampart_shared::{EntityId, UnitStaticInfo};

/// Descriptive attributes per unit, keyed by identity.
///
/// Only the [`UnitInfoPanel`](super::UnitInfoPanel) writes to it.
#[derive(Debug, Clone, Default)]
pub struct StaticInfoCache {
    entries: HashMap<EntityId, UnitStaticInfo>,
}

impl StaticInfoCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `info.entity_id`.
    pub(crate) fn put(&mut self, info: UnitStaticInfo) {
        self.entries.insert(info.entity_id, info);
    }

    /// Returns the cached entry, if any. Never fetches.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&UnitStaticInfo> {
        self.entries.get(&id)
    }

    /// Returns true if an entry exists for `id`.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Removes the entry for `id`.
    pub(crate) fn evict(&mut self, id: EntityId) -> Option<UnitStaticInfo> {
        self.entries.remove(&id)
    }

    /// Evicts every entry whose identity is not in `live`.
    ///
    /// Returns the evicted identities in ascending order.
    pub(crate) fn retain_present<I>(&mut self, live: I) -> Vec<EntityId>
    where
        I: IntoIterator<Item = EntityId>,
    {
        let live: HashSet<EntityId> = live.into_iter().collect();
        let mut evicted: Vec<EntityId> = self
            .entries
            .keys()
            .filter(|id| !live.contains(*id))
            .copied()
            .collect();
        evicted.sort_unstable();

        for id in &evicted {
            self.entries.remove(id);
        }
        evicted
    }

    /// Drops every entry.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: EntityId, sell_value: u32) -> UnitStaticInfo {
        UnitStaticInfo {
            sell_value: Some(sell_value),
            ..UnitStaticInfo::empty(id)
        }
    }

    #[test]
    fn test_put_is_an_upsert() {
        let mut cache = StaticInfoCache::new();
        cache.put(info(42, 50));
        cache.put(info(42, 75));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(42).and_then(|i| i.sell_value), Some(75));
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = StaticInfoCache::new();
        assert!(cache.get(7).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_evict_removes_entry() {
        let mut cache = StaticInfoCache::new();
        cache.put(info(1, 10));

        assert!(cache.evict(1).is_some());
        assert!(!cache.contains(1));
        assert!(cache.evict(1).is_none());
    }

    #[test]
    fn test_retain_present_evicts_absent_identities() {
        let mut cache = StaticInfoCache::new();
        for id in [3, 1, 2, 9] {
            cache.put(info(id, 1));
        }

        let evicted = cache.retain_present([2, 5]);
        assert_eq!(evicted, vec![1, 3, 9]);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(2));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cache = StaticInfoCache::new();
        cache.put(info(1, 10));
        cache.put(info(2, 20));

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get(1).is_none());
    }
}
