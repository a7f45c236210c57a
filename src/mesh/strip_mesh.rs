/*!
A generated mesh: vertices, strip indices and their draw batch, kept together.
*/

use crate::Error;
use crate::mesh::draw_batch::{DrawBatch, IndexFormat};
use crate::mesh::index_algorithms::{StripIndexGenerator, StripIndices};
use crate::mesh::resolution::Resolution;
use crate::mesh::surface::SurfaceFunction;
use crate::mesh::vertex::{TexCoords, Vertex};
use crate::mesh::vertex_algorithms::GridSampler;
use crate::mesh::vertex_layout::VertexLayout;

/**
Everything a rendering layer needs to upload and draw one surface.

The mesh owns its buffers exclusively; consumers read them.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    resolution: Resolution,
    tex_coords: TexCoords,
    vertices: Vec<Vertex>,
    indices: StripIndices,
    batch: DrawBatch,
    index_format: IndexFormat,
}

impl Mesh {
    /**
    Samples `surface` and builds strips and descriptors for it.

    Fails if `index_format` cannot address every vertex of the grid.
    */
    pub fn generate(
        surface: &dyn SurfaceFunction,
        resolution: Resolution,
        index_format: IndexFormat,
        tex_coords: TexCoords,
    ) -> Result<Self, Error> {
        let vertex_count = resolution.vertex_count();
        if vertex_count > index_format.max_vertex_count() {
            return Err(Error::IndexOverflow {
                vertex_count,
                format: index_format,
            });
        }
        let vertices = GridSampler::new(surface, resolution)
            .with_tex_coords(tex_coords)
            .generate();
        let indices = StripIndexGenerator::new(resolution).generate();
        let batch = DrawBatch::for_indices(&indices, index_format.element_size());
        Ok(Self {
            resolution,
            tex_coords,
            vertices,
            indices,
            batch,
            index_format,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &StripIndices {
        &self.indices
    }

    pub fn batch(&self) -> &DrawBatch {
        &self.batch
    }

    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    pub fn tex_coords(&self) -> TexCoords {
        self.tex_coords
    }

    /// Layout of one record in [Self::vertex_bytes].
    pub fn vertex_layout(&self) -> VertexLayout {
        Vertex::layout(self.tex_coords)
    }

    /// Interleaved vertex data, little-endian.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let mut floats = Vec::with_capacity(
            self.vertices.len() * self.vertex_layout().field_count(),
        );
        for vertex in &self.vertices {
            vertex.write_interleaved(&mut floats);
        }
        floats.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    /// The flat index buffer in [Self::index_format], little-endian.
    pub fn index_bytes(&self) -> Vec<u8> {
        let flat = self.indices.as_flat();
        match self.index_format {
            //vertex count was checked against u16 range in generate
            IndexFormat::U16 => flat.iter().flat_map(|i| (*i as u16).to_le_bytes()).collect(),
            IndexFormat::U32 => flat.iter().flat_map(|i| i.to_le_bytes()).collect(),
        }
    }
}
