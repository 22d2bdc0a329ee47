/// Logical driving actions a key-event collaborator can report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Accelerate,
    Brake,
    Left,
    Right,
    Handbrake,
}

impl Action {
    pub const COUNT: usize = 5;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Accelerate,
        Self::Brake,
        Self::Left,
        Self::Right,
        Self::Handbrake,
    ];

    const NAMES: [&'static str; Self::COUNT] =
        ["accelerate", "brake", "left", "right", "handbrake"];

    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Default keyboard binding, matched case-insensitively against DOM-style key names
    ///
    /// Returns `None` for keys that do not drive the car.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "w" | "arrowup" => Some(Self::Accelerate),
            "s" | "arrowdown" => Some(Self::Brake),
            "a" | "arrowleft" => Some(Self::Left),
            "d" | "arrowright" => Some(Self::Right),
            " " | "space" => Some(Self::Handbrake),
            _ => None,
        }
    }
}
