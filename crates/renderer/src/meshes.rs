//! GPU copies of the primitive meshes, created once per kind.

use std::collections::HashMap;

use asset::mesh::{MeshData, MeshVertex};
use asset::primitives;
use bytemuck::{Pod, Zeroable};
use corelib::scene::Primitive;
use wgpu::{Buffer, BufferUsages, Device, VertexBufferLayout, VertexStepMode, util::DeviceExt};

/// Vertex: position + normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };
}

impl From<&MeshVertex> for Vertex {
    fn from(v: &MeshVertex) -> Self {
        Self {
            pos: v.position,
            normal: v.normal,
        }
    }
}

pub struct GpuMesh {
    pub vertex_buf: Buffer,
    pub index_buf: Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &Device, label: &str, data: &MeshData) -> Self {
        let vertices: Vec<Vertex> = data.vertices.iter().map(Vertex::from).collect();
        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} VB")),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} IB")),
            contents: bytemuck::cast_slice(&data.indices),
            usage: BufferUsages::INDEX,
        });
        Self {
            vertex_buf,
            index_buf,
            index_count: data.indices.len() as u32,
        }
    }
}

const SPHERE_SLICES: u32 = 20;
const SPHERE_STACKS: u32 = 16;
const CYLINDER_SLICES: u32 = 20;
const TORUS_SIDES: u32 = 12;
const TORUS_RINGS: u32 = 32;

/// Cube/sphere/cylinder up front; tori lazily, one per tube ratio.
pub struct MeshCache {
    cube: GpuMesh,
    sphere: GpuMesh,
    cylinder: GpuMesh,
    tori: HashMap<u32, GpuMesh>,
}

impl MeshCache {
    pub fn new(device: &Device) -> Self {
        Self {
            cube: GpuMesh::upload(device, "Cube", &primitives::cube()),
            sphere: GpuMesh::upload(
                device,
                "Sphere",
                &primitives::sphere(SPHERE_SLICES, SPHERE_STACKS),
            ),
            cylinder: GpuMesh::upload(device, "Cylinder", &primitives::cylinder(CYLINDER_SLICES)),
            tori: HashMap::new(),
        }
    }

    /// Make sure every primitive in `prims` has a mesh.
    pub fn prepare<'p>(&mut self, device: &Device, prims: impl Iterator<Item = &'p Primitive>) {
        for prim in prims {
            if let Primitive::Torus { tube_ratio } = *prim {
                self.tori.entry(tube_ratio.to_bits()).or_insert_with(|| {
                    log::debug!("Uploading torus mesh, tube ratio {tube_ratio}");
                    GpuMesh::upload(
                        device,
                        "Torus",
                        &primitives::torus(tube_ratio, TORUS_SIDES, TORUS_RINGS),
                    )
                });
            }
        }
    }

    /// `None` only for a torus that was not prepared.
    pub fn get(&self, prim: Primitive) -> Option<&GpuMesh> {
        match prim {
            Primitive::Cube => Some(&self.cube),
            Primitive::Sphere => Some(&self.sphere),
            Primitive::Cylinder => Some(&self.cylinder),
            Primitive::Torus { tube_ratio } => self.tori.get(&tube_ratio.to_bits()),
        }
    }
}
