use ahash::AHashMap;
use glam::Vec3A;

use super::{CollectibleId, CollectibleKind, CollectibleRecord, CollectibleSeed, RingLayout};
use crate::math::planar_distance;

/// Every collectible in the world, in pickup priority order
#[derive(Clone, Debug, Default)]
pub struct CollectibleSet {
    records: Vec<CollectibleRecord>,
    index_by_id: AHashMap<CollectibleId, usize>,
}

impl CollectibleSet {
    /// Lays seeds out with `layout`, numbering ids in seed order
    #[must_use]
    pub fn from_seeds(seeds: &[CollectibleSeed], layout: &RingLayout) -> Self {
        let count_of = |kind: CollectibleKind| seeds.iter().filter(|s| s.kind == kind).count();
        let counts = CollectibleKind::ALL.map(count_of);
        let mut placed = [0usize; CollectibleKind::ALL.len()];

        let records = seeds
            .iter()
            .zip(0u32..)
            .map(|(seed, id)| {
                let kind_idx = seed.kind as usize;
                let pos = layout.position(seed.kind, placed[kind_idx], counts[kind_idx]);
                placed[kind_idx] += 1;

                CollectibleRecord::from_seed(CollectibleId(id), pos, seed)
            })
            .collect();

        Self::from_records(records)
    }

    /// Uses already-placed records as-is
    ///
    /// If two records share an id, lookups by that id find the first one.
    #[must_use]
    pub fn from_records(records: Vec<CollectibleRecord>) -> Self {
        let mut index_by_id = AHashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            index_by_id.entry(record.id).or_insert(idx);
        }

        Self {
            records,
            index_by_id,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[CollectibleRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [CollectibleRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectibleRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, id: CollectibleId) -> Option<&CollectibleRecord> {
        self.index_by_id.get(&id).map(|&idx| &self.records[idx])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Same as [`len`](Self::len), named for score displays
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn collected_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_collected()).count()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len() - self.collected_count()
    }

    /// True once every record is collected; an empty set is never complete
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.records.iter().all(CollectibleRecord::is_collected)
    }

    /// The nearest record still waiting to be picked up, and its planar distance
    #[must_use]
    pub fn closest_uncollected(&self, position: Vec3A) -> Option<(&CollectibleRecord, f32)> {
        self.records
            .iter()
            .filter(|r| !r.is_collected())
            .map(|r| (r, planar_distance(r.position, position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn reset(&mut self) {
        for record in &mut self.records {
            record.reset();
        }
    }
}
