use glam::Vec3A;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticleKind {
    /// Tire smoke left behind while drifting
    Smoke,
    /// Thrown out of a collectible when it is picked up
    Burst,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub kind: ParticleKind,
    pub position: Vec3A,
    /// World units per tick
    pub velocity: Vec3A,
    pub scale: f32,
    pub opacity: f32,
    /// 1 when spawned; only bursts use it
    pub life: f32,
}
