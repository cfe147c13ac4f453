use crate::{
    curve::spline::SplinePath,
    foundation::core::{Quat, Vec3},
};

/// Orthonormal frame carried along the path for sweeping cross-sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub position: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// Rotation-minimizing frames at `segments + 1` arc-length-spaced stations.
///
/// The first normal is seeded perpendicular to the tangent along its
/// smallest axis; each following normal is the previous one rotated by the
/// turn between consecutive tangents, so the cross-section never twists.
pub fn sweep_frames(path: &SplinePath, segments: usize) -> Vec<Frame> {
    let segments = segments.max(1);
    let mut frames = Vec::with_capacity(segments + 1);

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let t = path.parameter_at_length(u);
        frames.push(Frame {
            position: path.point_at(t),
            tangent: path.tangent_at(t),
            normal: Vec3::ZERO,
            binormal: Vec3::ZERO,
        });
    }

    let t0 = frames[0].tangent;
    let seed_axis = smallest_axis(t0);
    let side = t0.cross(seed_axis).normalize_or_zero();
    frames[0].normal = t0.cross(side).normalize_or_zero();
    frames[0].binormal = t0.cross(frames[0].normal).normalize_or_zero();

    for i in 1..frames.len() {
        let prev_t = frames[i - 1].tangent;
        let cur_t = frames[i].tangent;
        let mut normal = frames[i - 1].normal;

        let axis = prev_t.cross(cur_t);
        if axis.length() > f32::EPSILON {
            let theta = prev_t.dot(cur_t).clamp(-1.0, 1.0).acos();
            normal = Quat::from_axis_angle(axis.normalize(), theta) * normal;
        }
        // Re-orthogonalise against float drift.
        let normal = (normal - cur_t * normal.dot(cur_t)).normalize_or_zero();
        frames[i].normal = if normal == Vec3::ZERO {
            frames[i - 1].normal
        } else {
            normal
        };
        frames[i].binormal = cur_t.cross(frames[i].normal).normalize_or_zero();
    }

    frames
}

fn smallest_axis(v: Vec3) -> Vec3 {
    let a = v.abs();
    if a.x <= a.y && a.x <= a.z {
        Vec3::X
    } else if a.y <= a.z {
        Vec3::Y
    } else {
        Vec3::Z
    }
}
