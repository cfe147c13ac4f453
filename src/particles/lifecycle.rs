use crate::{
    curve::spline::SplinePath,
    foundation::core::Vec3,
    foundation::math::clamp01,
    noise::rng::Rng64,
    reveal::progress::ProgressMapper,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub enabled: bool,
    /// Control point whose arc-length position opens the activation window.
    pub start_point: usize,
    /// Control point whose arc-length position closes it.
    pub end_point: usize,
    /// Minimum distance (path units) between consecutive spawns.
    pub min_spacing: f32,
    /// Maximum random offset per axis.
    pub jitter: f32,
    pub base_scale: f32,
    /// Relative scale oscillation, `0..=1`.
    pub pulse_amplitude: f32,
    /// Oscillation speed in radians per second.
    pub pulse_speed: f32,
    pub seed: u64,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            start_point: 1,
            end_point: 2,
            min_spacing: 0.2,
            jitter: 0.05,
            base_scale: 0.05,
            pulse_amplitude: 0.3,
            pulse_speed: 2.0,
            seed: 0xB1_05_50_44,
        }
    }
}

/// Progress range during which particles may spawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ActivationWindow {
    pub start: f32,
    pub end: f32,
}

impl ActivationWindow {
    /// `None` unless `start < end` after clamping to `[0, 1]`.
    pub fn new(start: f32, end: f32) -> Option<Self> {
        let (start, end) = (clamp01(start), clamp01(end));
        (start < end).then_some(Self { start, end })
    }

    /// Window spanning the progress values at which the reveal tip reaches
    /// two control points under `mapper`.
    pub fn from_control_points(
        path: &SplinePath,
        mapper: &ProgressMapper,
        start_point: usize,
        end_point: usize,
    ) -> Option<Self> {
        let count = path.control_points().len();
        if start_point >= end_point || end_point >= count {
            return None;
        }
        Self::new(
            mapper.control_point_progress(path, start_point),
            mapper.control_point_progress(path, end_point),
        )
    }

    /// Spawning is allowed strictly inside the window.
    pub fn admits_spawn(self, progress: f32) -> bool {
        self.start < progress && progress < self.end
    }

    pub fn contains(self, progress: f32) -> bool {
        self.start <= progress && progress <= self.end
    }

    pub fn span(self) -> f32 {
        self.end - self.start
    }
}

/// A live particle. Retired particles are dropped from the set, never reused.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub id: u64,
    /// Progress value at which the particle was created.
    pub spawn_progress: f32,
    /// Curve point the particle was spawned from, before jitter.
    pub anchor: Vec3,
    pub position: Vec3,
    pub scale: f32,
}

/// What the host draws for one particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleInstance {
    pub position: Vec3,
    pub scale: f32,
}

/// Counts from one [`ParticleManager::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParticleUpdate {
    pub spawned: usize,
    pub retired: usize,
}

/// Spawns and retires decorative particles along the path.
///
/// Particles are ordered by creation, so the newest live particle is always
/// the last one; spacing is measured from its anchor.
#[derive(Clone, Debug)]
pub struct ParticleManager {
    window: ActivationWindow,
    settings: ParticleSettings,
    rng: Rng64,
    particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleManager {
    pub fn new(window: ActivationWindow, settings: ParticleSettings) -> Self {
        Self {
            window,
            rng: Rng64::new(settings.seed),
            settings,
            particles: Vec::new(),
            next_id: 0,
        }
    }

    pub fn window(&self) -> ActivationWindow {
        self.window
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles
            .iter()
            .map(|p| ParticleInstance {
                position: p.position,
                scale: p.scale,
            })
            .collect()
    }

    /// One frame: retire, then at most one spawn at `tip`, then animate.
    ///
    /// `tip` is the curve point the reveal has reached at `progress`.
    pub fn update(&mut self, progress: f32, tip: Vec3, time: f32) -> ParticleUpdate {
        let progress = clamp01(progress);
        let retired = self.retire(progress);
        let spawned = usize::from(self.try_spawn(progress, tip).is_some());
        self.animate(time);
        ParticleUpdate { spawned, retired }
    }

    /// Drops particles spawned outside the window or ahead of `progress`.
    pub fn retire(&mut self, progress: f32) -> usize {
        let window = self.window;
        let before = self.particles.len();
        self.particles.retain(|p| {
            let keep = window.contains(p.spawn_progress) && p.spawn_progress <= progress;
            if !keep {
                tracing::trace!(id = p.id, spawn_progress = p.spawn_progress, "particle retired");
            }
            keep
        });
        before - self.particles.len()
    }

    /// Spawns a particle at `anchor` when `progress` is inside the window and
    /// the anchor is far enough from the newest live particle.
    pub fn try_spawn(&mut self, progress: f32, anchor: Vec3) -> Option<u64> {
        if !self.window.admits_spawn(progress) {
            return None;
        }
        if let Some(last) = self.particles.last()
            && last.anchor.distance(anchor) <= self.settings.min_spacing
        {
            return None;
        }

        let jitter = self.settings.jitter;
        let offset = Vec3::new(
            self.rng.signed_f32(),
            self.rng.signed_f32(),
            self.rng.signed_f32(),
        ) * jitter;

        let id = self.next_id;
        self.next_id += 1;
        self.particles.push(Particle {
            id,
            spawn_progress: progress,
            anchor,
            position: anchor + offset,
            scale: self.settings.base_scale,
        });
        tracing::trace!(id, spawn_progress = progress, "particle spawned");
        Some(id)
    }

    /// Time-based pulse, phase-shifted by each particle's position.
    pub fn animate(&mut self, time: f32) {
        let s = self.settings;
        for p in &mut self.particles {
            let phase = p.position.element_sum();
            let pulse = 1.0 + s.pulse_amplitude * (time * s.pulse_speed + phase).sin();
            p.scale = (s.base_scale * pulse).max(0.0);
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/lifecycle.rs"]
mod tests;
