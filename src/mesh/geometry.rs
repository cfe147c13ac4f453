use crate::foundation::core::{Vec2, Vec3};

/// Vertex buffers for one swept tube.
///
/// Rings are stored consecutively, `radial_segments + 1` vertices each (the
/// seam vertex is duplicated so UVs wrap cleanly). A non-empty geometry always
/// holds exactly [`TubeGeometry::expected_vertex_count`] vertices.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TubeGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub tubular_segments: usize,
    pub radial_segments: usize,
}

impl TubeGeometry {
    /// The explicit "nothing revealed" geometry.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn expected_vertex_count(tubular_segments: usize, radial_segments: usize) -> usize {
        (tubular_segments + 1) * (radial_segments + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn ring_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.tubular_segments + 1
        }
    }

    /// Vertices of ring `i` (including the duplicated seam vertex).
    pub fn ring(&self, i: usize) -> &[Vec3] {
        let stride = self.radial_segments + 1;
        let start = (i * stride).min(self.positions.len());
        let end = (start + stride).min(self.positions.len());
        &self.positions[start..end]
    }

    /// Mean of the ring's distinct vertices.
    pub fn ring_center(&self, i: usize) -> Option<Vec3> {
        let ring = self.ring(i);
        let distinct = ring.len().checked_sub(1).filter(|&n| n > 0)?;
        let sum: Vec3 = ring[..distinct].iter().copied().sum();
        Some(sum / distinct as f32)
    }

    /// Bytes held by the buffers; what the host would upload.
    pub fn byte_size(&self) -> usize {
        self.positions.len() * std::mem::size_of::<Vec3>()
            + self.normals.len() * std::mem::size_of::<Vec3>()
            + self.uvs.len() * std::mem::size_of::<Vec2>()
            + self.indices.len() * std::mem::size_of::<u32>()
    }

    /// Sum of distances between consecutive ring centres.
    pub fn centerline_length(&self) -> f32 {
        let centers: Vec<Vec3> = (0..self.ring_count())
            .filter_map(|i| self.ring_center(i))
            .collect();
        centers.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Flat `[x, y, z, ...]` position buffer.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Flat `[u, v, ...]` texture coordinate buffer.
    pub fn uv_buffer(&self) -> Vec<f32> {
        self.uvs.iter().flat_map(|uv| uv.to_array()).collect()
    }
}
