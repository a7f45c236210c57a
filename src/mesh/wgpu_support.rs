/*!
Uploading and drawing a [Mesh] with wgpu.

wgpu has no multi-draw over arbitrary byte offsets, so each strip becomes one
`draw_indexed` over the element range its [DrawDescriptor](crate::mesh::draw_batch::DrawDescriptor)
describes.  The pipeline must use `PrimitiveTopology::TriangleStrip` with no strip index format.
*/

use wgpu::util::DeviceExt;

use crate::mesh::draw_batch::{DrawBatch, IndexFormat};
use crate::mesh::strip_mesh::Mesh;
use crate::mesh::vertex::TexCoords;

impl From<IndexFormat> for wgpu::IndexFormat {
    fn from(format: IndexFormat) -> Self {
        match format {
            IndexFormat::U16 => wgpu::IndexFormat::Uint16,
            IndexFormat::U32 => wgpu::IndexFormat::Uint32,
        }
    }
}

const POSITION_ONLY: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];
const POSITION_TEX: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x2];

/**
Vertex buffer layout matching [Mesh::vertex_bytes].

Position is shader location 0; the texture coordinate, when present, is location 1.
*/
pub fn vertex_buffer_layout(tex_coords: TexCoords) -> wgpu::VertexBufferLayout<'static> {
    let attributes: &'static [wgpu::VertexAttribute] = match tex_coords {
        TexCoords::Include => &POSITION_TEX,
        TexCoords::Omit => &POSITION_ONLY,
    };
    wgpu::VertexBufferLayout {
        array_stride: crate::mesh::vertex::Vertex::layout(tex_coords).element_stride()
            as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

/// GPU copies of a mesh.
#[derive(Debug)]
pub struct MeshBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_format: IndexFormat,
    batch: DrawBatch,
}

impl MeshBuffers {
    /**
    Uploads `mesh` into a vertex buffer and an index buffer, both labeled `debug_name`.

    Contents are [Mesh::vertex_bytes] and [Mesh::index_bytes], so the vertex buffer matches
    [vertex_buffer_layout] for `mesh.tex_coords()` and the index buffer matches
    `mesh.index_format()`.  The draw batch is copied for [Self::draw].
    */
    pub fn new(device: &wgpu::Device, mesh: &Mesh, debug_name: &str) -> Self {
        logwise::info_sync!(
            "MeshBuffers::new {name}",
            name = logwise::privacy::LogIt(debug_name)
        );
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(debug_name),
            contents: &mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(debug_name),
            contents: &mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_format: mesh.index_format(),
            batch: mesh.batch().clone(),
        }
    }

    /**
    Binds the buffers and issues one `draw_indexed` per strip.

    The vertex buffer goes to slot 0.  The pass's pipeline must use
    [wgpu::PrimitiveTopology::TriangleStrip] and take [vertex_buffer_layout] for the mesh's
    [crate::mesh::TexCoords] as its slot 0 layout.  Each strip is a separate draw, so no strip
    index format is needed.
    */
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertices.slice(..));
        pass.set_index_buffer(self.indices.slice(..), self.index_format.into());
        draw_strips(pass, &self.batch);
    }
}

/// Issues one `draw_indexed` per descriptor.  Buffers must already be bound.
pub fn draw_strips(pass: &mut wgpu::RenderPass<'_>, batch: &DrawBatch) {
    for range in batch.element_ranges() {
        pass.draw_indexed(range, 0, 0..1);
    }
}
