use crate::{
    curve::spline::SplinePath,
    foundation::core::Vec3,
    foundation::math::clamp01,
};

/// Revealed spans shorter than this (in path units) count as a single point.
pub const MIN_REVEAL_LENGTH: f32 = 1e-4;

/// How scroll progress maps onto the path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    /// Progress is a fraction of total arc length (constant-speed reveal).
    #[default]
    Continuous,
    /// Progress is spread evenly over control-point segments.
    Discrete,
}

/// Visible span of the path as arc-length fractions, `0 <= start <= end <= 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct RevealWindow {
    pub start: f32,
    pub end: f32,
}

impl RevealWindow {
    /// `end = clamp(progress)`, and with a tail, `start = max(0, end - tail)`.
    pub fn continuous(progress: f32, tail_fraction: Option<f32>) -> Self {
        let end = clamp01(progress);
        let start = match tail_fraction {
            Some(tail) if tail.is_finite() && tail > 0.0 => (end - tail).max(0.0),
            _ => 0.0,
        };
        Self { start, end }
    }

    pub fn span(self) -> f32 {
        self.end - self.start
    }
}

/// Position of progress within the control-point polyline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SegmentCursor {
    pub index: usize,
    pub local_t: f32,
}

impl SegmentCursor {
    /// `None` when fewer than two points exist.
    pub fn locate(progress: f32, point_count: usize) -> Option<Self> {
        if point_count < 2 {
            return None;
        }
        let segments = (point_count - 1) as f32;
        let page = clamp01(progress) * segments;
        let index = page.floor() as usize;
        Some(Self {
            index,
            local_t: page - index as f32,
        })
    }

    pub fn is_complete(self, point_count: usize) -> bool {
        self.index + 1 >= point_count
    }

    /// The interpolated point the reveal has reached; the last point once
    /// complete. `None` for an empty list.
    pub fn tip(self, points: &[Vec3]) -> Option<Vec3> {
        if self.is_complete(points.len()) {
            return points.last().copied();
        }
        Some(points[self.index].lerp(points[self.index + 1], self.local_t))
    }
}

/// Result of mapping one frame's progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealState {
    /// Clamped progress.
    pub progress: f32,
    pub window: RevealWindow,
    /// Only set in [`RevealMode::Discrete`].
    pub cursor: Option<SegmentCursor>,
}

/// Converts the external scroll scalar into the revealed portion of the path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProgressMapper {
    pub mode: RevealMode,
    /// Length of a sliding "wet tip" window; `None` reveals from the start.
    /// Continuous mode only.
    pub tail_fraction: Option<f32>,
    /// Points sampled along the revealed span in continuous mode.
    pub samples: usize,
}

impl Default for ProgressMapper {
    fn default() -> Self {
        Self {
            mode: RevealMode::Continuous,
            tail_fraction: None,
            samples: 160,
        }
    }
}

impl ProgressMapper {
    pub fn map(&self, raw_progress: f32, point_count: usize) -> RevealState {
        let progress = clamp01(raw_progress);
        match self.mode {
            RevealMode::Continuous => RevealState {
                progress,
                window: RevealWindow::continuous(progress, self.tail_fraction),
                cursor: None,
            },
            RevealMode::Discrete => RevealState {
                progress,
                window: RevealWindow {
                    start: 0.0,
                    end: progress,
                },
                cursor: SegmentCursor::locate(progress, point_count),
            },
        }
    }

    /// Progress at which the reveal tip reaches control point `index`.
    ///
    /// Continuous mode paces by arc length, discrete mode by index.
    pub fn control_point_progress(&self, path: &SplinePath, index: usize) -> f32 {
        match self.mode {
            RevealMode::Continuous => path.control_point_fraction(index),
            RevealMode::Discrete => {
                let last = path.control_points().len() - 1;
                index.min(last) as f32 / last as f32
            }
        }
    }

    /// Leading point of the revealed sub-curve.
    pub fn tip_point(&self, path: &SplinePath, state: &RevealState) -> Vec3 {
        match (self.mode, state.cursor) {
            (RevealMode::Discrete, Some(cursor)) => cursor
                .tip(path.control_points())
                .unwrap_or_else(|| path.point_at(0.0)),
            _ => path.point_at_length(state.window.end),
        }
    }

    /// Points of the revealed sub-curve. Fewer than two means nothing to draw.
    pub fn revealed_points(&self, path: &SplinePath, state: &RevealState) -> Vec<Vec3> {
        match (self.mode, state.cursor) {
            (RevealMode::Discrete, Some(cursor)) => discrete_points(path.control_points(), cursor),
            (RevealMode::Discrete, None) => Vec::new(),
            (RevealMode::Continuous, _) => {
                let window = state.window;
                if window.span() * path.length() < MIN_REVEAL_LENGTH {
                    return vec![path.point_at_length(window.end)];
                }
                path.spaced_points_between(window.start, window.end, self.samples.max(2))
            }
        }
    }
}

/// Control points up to the cursor plus one interpolated tip point.
///
/// A complete cursor returns the whole list unmodified; a tip that coincides
/// with the last kept point is dropped rather than duplicated.
pub fn discrete_points(points: &[Vec3], cursor: SegmentCursor) -> Vec<Vec3> {
    if cursor.is_complete(points.len()) {
        return points.to_vec();
    }
    let mut out = points[..=cursor.index].to_vec();
    let a = points[cursor.index];
    if let Some(tip) = cursor.tip(points)
        && tip.distance(a) >= MIN_REVEAL_LENGTH
    {
        out.push(tip);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/progress.rs"]
mod tests;
