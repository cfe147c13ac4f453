use crate::foundation::{
    core::Rgb8,
    error::{StrokeError, StrokeResult},
};

/// Colour applied from `start` progress onward.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorSection {
    pub start: f32,
    pub color: Rgb8,
}

/// Progress-keyed colour table; the last section whose start has been
/// reached wins. Deserializing sorts the sections, as [`ColorSections::new`]
/// does.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<ColorSection>", into = "Vec<ColorSection>")]
pub struct ColorSections {
    sections: Vec<ColorSection>,
}

impl ColorSections {
    /// Sections are sorted by start; starts must be finite.
    pub fn new(mut sections: Vec<ColorSection>) -> StrokeResult<Self> {
        if sections.iter().any(|s| !s.start.is_finite()) {
            return Err(StrokeError::validation(
                "colour section start must be finite",
            ));
        }
        sections.sort_by(|a, b| a.start.total_cmp(&b.start));
        Ok(Self { sections })
    }

    pub fn validate(&self) -> StrokeResult<()> {
        if self.sections.iter().any(|s| !s.start.is_finite()) {
            return Err(StrokeError::validation(
                "colour section start must be finite",
            ));
        }
        if self
            .sections
            .windows(2)
            .any(|w| w[0].start > w[1].start)
        {
            return Err(StrokeError::validation(
                "colour sections must be sorted by start",
            ));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[ColorSection] {
        &self.sections
    }

    /// Colour at `progress`; black when no section has started.
    pub fn color_at(&self, progress: f32) -> Rgb8 {
        self.sections
            .iter()
            .rev()
            .find(|s| progress >= s.start)
            .map_or(Rgb8::BLACK, |s| s.color)
    }
}

impl TryFrom<Vec<ColorSection>> for ColorSections {
    type Error = StrokeError;

    fn try_from(value: Vec<ColorSection>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorSections> for Vec<ColorSection> {
    fn from(value: ColorSections) -> Self {
        value.sections
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/sections.rs"]
mod tests;
