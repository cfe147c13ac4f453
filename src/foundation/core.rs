use crate::foundation::error::{StrokeError, StrokeResult};

pub use glam::{Quat, Vec2, Vec3};
pub use kurbo::{Line, Point};

/// Per-frame snapshot handed to every consumer of the frame.
///
/// Read once from the host and passed by value, so all stages of one frame
/// observe the same progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameInput {
    /// Scroll progress, nominally `[0, 1]`; may overshoot.
    pub progress: f32,
    /// Monotonic seconds since start.
    pub elapsed: f32,
}

impl FrameInput {
    pub fn new(progress: f32, elapsed: f32) -> Self {
        Self { progress, elapsed }
    }
}

/// Straight (non-premultiplied) RGB8 colour, serialized as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> StrokeResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(StrokeError::validation(format!(
                "colour '{s}' must be #RRGGBB"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| StrokeError::validation(format!("colour '{s}' is not valid hex")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Rgb8 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = StrokeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_hex()
    }
}
