use glam::Vec3A;

use crate::CollectibleRecord;

/// Something the presentation layer may want to react to, emitted by the tick it happened in
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    Pickup(CollectibleRecord),
    /// The car was pushed back inside the track; `position` is where it was placed
    BoundaryHit { position: Vec3A },
    DriftStarted,
    /// `score` is the displayed drift score once the drift ended
    DriftEnded { score: u32 },
    /// The last collectible was just picked up
    AllCollected,
}
