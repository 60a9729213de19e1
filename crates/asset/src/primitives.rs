//! Procedural unit shapes. Sizes are applied later by the draw transform.

use std::f32::consts::{PI, TAU};

use crate::mesh::{MeshData, MeshVertex};

/// Cube with side 1 centered at the origin, flat-shaded (24 vertices).
pub fn cube() -> MeshData {
    // (normal, tangent u, tangent v); corners are n +- u +- v, halved.
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let base = vertices.len() as u32;
        for (su, sv) in CORNERS {
            let p = [
                0.5 * (n[0] + su * u[0] + sv * v[0]),
                0.5 * (n[1] + su * u[1] + sv * v[1]),
                0.5 * (n[2] + su * u[2] + sv * v[2]),
            ];
            vertices.push(MeshVertex::new(p, n));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData::new(vertices, indices)
}

/// Quad-grid indices for a `(cols + 1) x (rows + 1)` vertex lattice.
fn grid_indices(cols: u32, rows: u32) -> Vec<u32> {
    let stride = cols + 1;
    let mut indices = Vec::with_capacity((cols * rows * 6) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let a = r * stride + c;
            let b = a + stride;
            indices.extend_from_slice(&[a, a + 1, b + 1, a, b + 1, b]);
        }
    }
    indices
}

/// Radius-1 latitude/longitude sphere.
pub fn sphere(slices: u32, stacks: u32) -> MeshData {
    let slices = slices.max(3);
    let stacks = stacks.max(2);
    let mut vertices = Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
    for st in 0..=stacks {
        let v = st as f32 / stacks as f32;
        let theta = v * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        for sl in 0..=slices {
            let u = sl as f32 / slices as f32;
            let (sin_p, cos_p) = (u * TAU).sin_cos();
            let n = [sin_t * cos_p, -cos_t, sin_t * sin_p];
            vertices.push(MeshVertex::new(n, n));
        }
    }
    MeshData::new(vertices, grid_indices(slices, stacks))
}

/// Open radius-1 tube along +Z from z=0 to z=1 (no caps).
pub fn cylinder(slices: u32) -> MeshData {
    let slices = slices.max(3);
    let mut vertices = Vec::with_capacity(((slices + 1) * 2) as usize);
    for ring in 0..=1u32 {
        let z = ring as f32;
        for sl in 0..=slices {
            let u = sl as f32 / slices as f32;
            let (s, c) = (u * TAU).sin_cos();
            vertices.push(MeshVertex::new([c, s, z], [c, s, 0.0]));
        }
    }
    MeshData::new(vertices, grid_indices(slices, 1))
}

/// Torus around the Z axis: ring radius 1, tube radius `tube_ratio`.
pub fn torus(tube_ratio: f32, sides: u32, rings: u32) -> MeshData {
    let sides = sides.max(3);
    let rings = rings.max(3);
    let r = tube_ratio.max(0.0);
    let mut vertices = Vec::with_capacity(((sides + 1) * (rings + 1)) as usize);
    for ri in 0..=rings {
        let u = ri as f32 / rings as f32;
        let (sin_u, cos_u) = (u * TAU).sin_cos();
        for si in 0..=sides {
            let v = si as f32 / sides as f32;
            let (sin_v, cos_v) = (v * TAU).sin_cos();
            let reach = 1.0 + r * cos_v;
            let p = [reach * cos_u, reach * sin_u, r * sin_v];
            let n = [cos_v * cos_u, cos_v * sin_u, sin_v];
            vertices.push(MeshVertex::new(p, n));
        }
    }
    MeshData::new(vertices, grid_indices(sides, rings))
}
