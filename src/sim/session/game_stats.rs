use crate::{CollectibleKind, CollectibleRecord};

/// Running totals for the HUD
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    /// Sum of the points of everything picked up
    pub score: u32,
    /// Indexed by [`CollectibleKind`] discriminant
    pub collected_by_kind: [u32; CollectibleKind::ALL.len()],
    pub total_collectibles: usize,
    /// Floored drift score of the car
    pub drift_score: u32,
}

impl GameStats {
    #[must_use]
    pub const fn new(total_collectibles: usize) -> Self {
        Self {
            score: 0,
            collected_by_kind: [0; CollectibleKind::ALL.len()],
            total_collectibles,
            drift_score: 0,
        }
    }

    pub fn record_pickup(&mut self, record: &CollectibleRecord) {
        self.score = self.score.saturating_add(record.points);
        self.collected_by_kind[record.kind as usize] += 1;
    }

    #[must_use]
    pub const fn collected(&self, kind: CollectibleKind) -> u32 {
        self.collected_by_kind[kind as usize]
    }

    #[must_use]
    pub fn collected_total(&self) -> usize {
        self.collected_by_kind.iter().map(|&n| n as usize).sum()
    }

    /// False while there is nothing to collect
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_collectibles > 0 && self.collected_total() >= self.total_collectibles
    }

    pub const fn reset(&mut self) {
        *self = Self::new(self.total_collectibles);
    }
}
