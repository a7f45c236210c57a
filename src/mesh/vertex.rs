/*!
Vertex records produced by the grid sampler.
*/

use crate::mesh::resolution::Resolution;
use crate::mesh::vertex_layout::{VertexFieldType, VertexLayout};

/**
Where a sample sits in the grid.

Surface functions receive one of these per vertex.  It carries the grid indices together with
the resolution they are relative to, so a surface can compute its own normalized parameters.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSample {
    /// Longitudinal index, `0..=longs`.
    pub i: usize,
    /// Latitudinal index, `0..=lats`.
    pub j: usize,
    pub longs: usize,
    pub lats: usize,
}

impl GridSample {
    pub(crate) fn new(i: usize, j: usize, resolution: Resolution) -> Self {
        Self {
            i,
            j,
            longs: resolution.longs(),
            lats: resolution.lats(),
        }
    }

    /// `i / longs`, in `[0, 1]`.
    pub fn u(&self) -> f32 {
        self.i as f32 / self.longs as f32
    }

    /// `j / lats`, in `[0, 1]`.
    pub fn v(&self) -> f32 {
        self.j as f32 / self.lats as f32
    }

    /// The texture coordinate assigned when a surface does not override it: `(i/longs, j/lats)`.
    pub fn default_tex_coords(&self) -> [f32; 2] {
        [self.u(), self.v()]
    }
}

/// Whether the sampler should produce texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TexCoords {
    #[default]
    Include,
    Omit,
}

/**
A single mesh vertex.

The position is homogeneous; generated vertices always have `w == 1`.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 4],
    pub tex_coords: Option<[f32; 2]>,
}

impl Vertex {
    /// Builds a vertex from a 3D point, with `w = 1`.
    pub fn from_point(point: [f32; 3], tex_coords: Option<[f32; 2]>) -> Self {
        Self {
            position: [point[0], point[1], point[2], 1.0],
            tex_coords,
        }
    }

    /// The `xyz` part of the position.
    pub fn point(&self) -> [f32; 3] {
        [self.position[0], self.position[1], self.position[2]]
    }

    /**
    Describes the interleaved record written by [Self::write_interleaved].

    ```
    use strip_mesh::mesh::vertex::{TexCoords, Vertex};
    assert_eq!(Vertex::layout(TexCoords::Include).element_stride(), 24);
    assert_eq!(Vertex::layout(TexCoords::Omit).element_stride(), 16);
    ```
    */
    pub fn layout(tex_coords: TexCoords) -> VertexLayout {
        let mut layout = VertexLayout::new();
        layout.add_field("position_x", VertexFieldType::F32);
        layout.add_field("position_y", VertexFieldType::F32);
        layout.add_field("position_z", VertexFieldType::F32);
        layout.add_field("position_w", VertexFieldType::F32);
        if tex_coords == TexCoords::Include {
            layout.add_field("texcoord_s", VertexFieldType::F32);
            layout.add_field("texcoord_t", VertexFieldType::F32);
        }
        layout
    }

    /**
    Appends this vertex to an interleaved float buffer: position, then texture coordinate if present.
    */
    pub fn write_interleaved(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.position);
        if let Some(tex) = self.tex_coords {
            out.extend_from_slice(&tex);
        }
    }
}
