use crate::{
    config::BrushConfig,
    curve::cache::SplineCache,
    foundation::core::{FrameInput, Rgb8, Vec3},
    foundation::error::StrokeResult,
    mesh::bristles::{BristleSet, Strand},
    mesh::geometry::TubeGeometry,
    mesh::tube::TubeBuilder,
    noise::simplex::Noise2D,
    particles::lifecycle::{ActivationWindow, ParticleInstance, ParticleManager, ParticleUpdate},
    reveal::progress::{RevealState, RevealWindow},
};

/// Geometry published for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrokeGeometry {
    /// Nothing to draw: no path, or the revealed span has no extent.
    #[default]
    Empty,
    Tube { tube: TubeGeometry },
    Bristles { strands: Vec<Strand> },
}

impl StrokeGeometry {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Tube { tube } => tube.is_empty(),
            Self::Bristles { strands } => strands.iter().all(|s| s.geometry.is_empty()),
        }
    }

    /// The single tube, if this frame drew one.
    pub fn tube(&self) -> Option<&TubeGeometry> {
        match self {
            Self::Tube { tube } => Some(tube),
            _ => None,
        }
    }

    pub fn strands(&self) -> &[Strand] {
        match self {
            Self::Bristles { strands } => strands,
            _ => &[],
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Tube { tube } => tube.vertex_count(),
            Self::Bristles { strands } => strands.iter().map(|s| s.geometry.vertex_count()).sum(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Tube { tube } => tube.triangle_count(),
            Self::Bristles { strands } => strands.iter().map(|s| s.geometry.triangle_count()).sum(),
        }
    }

    pub fn byte_size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Tube { tube } => tube.byte_size(),
            Self::Bristles { strands } => strands.iter().map(|s| s.geometry.byte_size()).sum(),
        }
    }
}

/// Exclusive owner of the current frame's geometry.
///
/// Installing a buffer always disposes the previous one first, so at most one
/// buffer is alive at any time: `installed() - disposed()` is 0 or 1.
#[derive(Debug, Default)]
pub struct GeometrySlot {
    current: StrokeGeometry,
    installed: u64,
    disposed: u64,
    disposed_bytes: u64,
}

impl GeometrySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &StrokeGeometry {
        &self.current
    }

    /// Replaces the current buffer, releasing the old one before the swap.
    pub fn install(&mut self, next: StrokeGeometry) {
        self.dispose();
        if !next.is_empty() {
            self.installed += 1;
            self.current = next;
        }
    }

    /// Releases the current buffer; `false` when there was none.
    pub fn dispose(&mut self) -> bool {
        let old = std::mem::take(&mut self.current);
        if old.is_empty() {
            return false;
        }
        let bytes = old.byte_size();
        drop(old);
        self.disposed += 1;
        self.disposed_bytes += bytes as u64;
        tracing::trace!(bytes, "geometry disposed");
        true
    }

    /// Non-empty buffers installed so far.
    pub fn installed(&self) -> u64 {
        self.installed
    }

    pub fn disposed(&self) -> u64 {
        self.disposed
    }

    pub fn disposed_bytes(&self) -> u64 {
        self.disposed_bytes
    }

    pub fn live_buffers(&self) -> u64 {
        self.installed - self.disposed
    }
}

/// Everything the host draws for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeFrame<'a> {
    pub input: FrameInput,
    pub reveal: RevealState,
    /// Arc length of the revealed sub-curve.
    pub revealed_length: f32,
    pub geometry: &'a StrokeGeometry,
    pub particles: Vec<ParticleInstance>,
    pub particle_update: ParticleUpdate,
    pub color: Rgb8,
}

impl StrokeFrame<'_> {
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            progress: self.reveal.progress,
            elapsed: self.input.elapsed,
            window: self.reveal.window,
            revealed_length: self.revealed_length,
            vertices: self.geometry.vertex_count(),
            triangles: self.geometry.triangle_count(),
            strands: self.geometry.strands().len(),
            particles: self.particles.len(),
            spawned: self.particle_update.spawned,
            retired: self.particle_update.retired,
            color: self.color,
        }
    }
}

/// Flat per-frame summary, one JSON line per frame in `inkstroke sweep`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameStats {
    pub progress: f32,
    pub elapsed: f32,
    pub window: RevealWindow,
    pub revealed_length: f32,
    pub vertices: usize,
    pub triangles: usize,
    pub strands: usize,
    pub particles: usize,
    pub spawned: usize,
    pub retired: usize,
    pub color: Rgb8,
}

/// Per-frame entry point: maps progress once, rebuilds the stroke geometry,
/// advances particles and publishes the result.
///
/// Calls take `&mut self`, so a frame can never start while another is still
/// running. After [`StrokeRenderer::teardown`] every frame is empty and no
/// released buffer is touched again.
#[derive(Debug)]
pub struct StrokeRenderer {
    config: BrushConfig,
    noise: Noise2D,
    bristles: BristleSet,
    cache: SplineCache,
    control_points: Vec<Vec3>,
    particles: Option<ParticleManager>,
    slot: GeometrySlot,
    torn_down: bool,
}

impl StrokeRenderer {
    pub fn new(config: BrushConfig) -> StrokeResult<Self> {
        config.validate()?;
        Ok(Self {
            noise: Noise2D::new(config.noise.seed),
            bristles: BristleSet::generate(&config.bristles),
            cache: SplineCache::new(),
            control_points: Vec::new(),
            particles: None,
            slot: GeometrySlot::new(),
            torn_down: false,
            config,
        })
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    pub fn bristles(&self) -> &BristleSet {
        &self.bristles
    }

    pub fn slot(&self) -> &GeometrySlot {
        &self.slot
    }

    /// Particle manager, present while the path has a valid activation window.
    pub fn particles(&self) -> Option<&ParticleManager> {
        self.particles.as_ref()
    }

    pub fn path(&self) -> Option<&crate::curve::spline::SplinePath> {
        self.cache.path()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[tracing::instrument(skip(self, points), fields(count = points.len()))]
    /// Supplies a new control-point list.
    ///
    /// Structurally equal input keeps the current path, geometry and
    /// particles. Anything else rebuilds the path, disposes the in-flight
    /// geometry and restarts the particle set. Returns whether a rebuild
    /// happened.
    pub fn set_control_points(&mut self, points: &[Vec3]) -> bool {
        if self.torn_down {
            return false;
        }
        let (path, rebuilt) = self.cache.get_or_build(points, self.config.spline);
        if !rebuilt {
            return false;
        }

        let length = path.map_or(0.0, |p| p.length());
        self.particles = path
            .filter(|_| self.config.particles.enabled)
            .and_then(|p| {
                ActivationWindow::from_control_points(
                    p,
                    &self.config.reveal,
                    self.config.particles.start_point,
                    self.config.particles.end_point,
                )
            })
            .map(|window| ParticleManager::new(window, self.config.particles));
        self.control_points = points.to_vec();
        let disposed = self.slot.dispose();
        tracing::debug!(
            length,
            has_path = self.cache.path().is_some(),
            particles = self.particles.is_some(),
            disposed,
            "spline rebuilt"
        );
        true
    }

    #[tracing::instrument(skip(self))]
    /// Runs one frame.
    ///
    /// Progress is clamped and mapped exactly once; geometry, particles and
    /// colour all observe that same snapshot.
    pub fn frame(&mut self, input: FrameInput) -> StrokeFrame<'_> {
        let point_count = self.control_points.len();
        let reveal = self.config.reveal.map(input.progress, point_count);
        let color = self.config.sections.color_at(reveal.progress);

        let Some(path) = self.cache.path().filter(|_| !self.torn_down) else {
            if !self.torn_down {
                self.slot.install(StrokeGeometry::Empty);
            }
            return StrokeFrame {
                input,
                reveal,
                revealed_length: 0.0,
                geometry: self.slot.current(),
                particles: Vec::new(),
                particle_update: ParticleUpdate::default(),
                color,
            };
        };

        let points = self.config.reveal.revealed_points(path, &reveal);
        let revealed_length: f32 = points.windows(2).map(|w| w[0].distance(w[1])).sum();

        let builder = TubeBuilder::new(self.config.tube, self.config.spline)
            .with_taper(self.config.taper)
            .with_displacement(&self.noise, self.config.noise.displacement);
        let geometry = if self.bristles.is_empty() {
            let tube = builder.build(&points, input.elapsed);
            if tube.is_empty() {
                StrokeGeometry::Empty
            } else {
                StrokeGeometry::Tube { tube }
            }
        } else {
            let strands = self.bristles.build(&points, &builder, input.elapsed);
            if strands.is_empty() {
                StrokeGeometry::Empty
            } else {
                StrokeGeometry::Bristles { strands }
            }
        };

        let (particles, particle_update) = match self.particles.as_mut() {
            Some(manager) => {
                let tip = self.config.reveal.tip_point(path, &reveal);
                let update = manager.update(reveal.progress, tip, input.elapsed);
                (manager.instances(), update)
            }
            None => (Vec::new(), ParticleUpdate::default()),
        };

        self.slot.install(geometry);
        StrokeFrame {
            input,
            reveal,
            revealed_length,
            geometry: self.slot.current(),
            particles,
            particle_update,
            color,
        }
    }

    /// Releases all geometry and particles. Later frames render nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        let disposed = self.slot.dispose();
        self.particles = None;
        self.cache.clear();
        self.control_points.clear();
        self.torn_down = true;
        tracing::debug!(disposed, "renderer torn down");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/frame.rs"]
mod tests;
