use glam::Vec3A;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectibleId(pub u32);

impl fmt::Display for CollectibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectibleKind {
    Project,
    Skill,
    Experience,
}

impl CollectibleKind {
    pub const ALL: [Self; 3] = [Self::Project, Self::Skill, Self::Experience];

    const NAMES: [&'static str; 3] = ["project", "skill", "experience"];

    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for CollectibleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of one portfolio entry, before it is placed in the world
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectibleSeed {
    pub label: String,
    pub subtitle: String,
    pub kind: CollectibleKind,
    pub points: u32,
    /// 0xRRGGBB, only meaningful to renderers
    pub color: u32,
}

impl CollectibleSeed {
    #[must_use]
    pub fn new(
        kind: CollectibleKind,
        label: impl Into<String>,
        subtitle: impl Into<String>,
        points: u32,
        color: u32,
    ) -> Self {
        Self {
            label: label.into(),
            subtitle: subtitle.into(),
            kind,
            points,
            color,
        }
    }
}

/// A placed collectible
///
/// `collected` can only be set by a pickup and only cleared by a reset of the owning set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectibleRecord {
    pub id: CollectibleId,
    /// On the track plane
    pub position: Vec3A,
    pub kind: CollectibleKind,
    pub label: String,
    pub subtitle: String,
    pub points: u32,
    collected: bool,
}

impl CollectibleRecord {
    #[must_use]
    pub fn new(
        id: CollectibleId,
        position: Vec3A,
        kind: CollectibleKind,
        label: impl Into<String>,
        subtitle: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            id,
            position: Vec3A::new(position.x, 0.0, position.z),
            kind,
            label: label.into(),
            subtitle: subtitle.into(),
            points,
            collected: false,
        }
    }

    #[must_use]
    pub fn from_seed(id: CollectibleId, position: Vec3A, seed: &CollectibleSeed) -> Self {
        Self::new(
            id,
            position,
            seed.kind,
            seed.label.clone(),
            seed.subtitle.clone(),
            seed.points,
        )
    }

    #[must_use]
    pub const fn is_collected(&self) -> bool {
        self.collected
    }

    /// Returns false if it was already collected
    pub(crate) const fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }

        self.collected = true;
        true
    }

    pub(crate) const fn reset(&mut self) {
        self.collected = false;
    }
}
