//! CPU-side mesh representation shared by the primitive generators.

/// Vertex with position/normal, in object space. Shapes are flat-colored,
/// so there are no texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Indexed triangle mesh with tightly-packed vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Returns `true` if both buffers are non-empty and every index is in range.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty()
            && !self.indices.is_empty()
            && self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&i| (i as usize) < self.vertices.len())
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_data_validity() {
        let v = MeshVertex::default();
        let data = MeshData::new(vec![v, v, v], vec![0, 1, 2]);
        assert!(data.is_valid());
        assert_eq!(data.triangle_count(), 1);
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let data = MeshData::new(vec![MeshVertex::default()], vec![0, 0, 1]);
        assert!(!data.is_valid());
    }
}
