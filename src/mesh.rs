/*! Mesh generation: sampling, strip indices and draw batching. */

pub mod resolution;
pub mod vertex;
pub mod vertex_layout;
pub mod surface;
pub mod vertex_algorithms;
pub mod index_algorithms;
pub mod draw_batch;
pub mod strip_mesh;
#[cfg(feature = "backend_wgpu")]
pub mod wgpu_support;

pub use draw_batch::{DrawBatch, DrawDescriptor, IndexFormat};
pub use index_algorithms::{StripIndices, Wrap};
pub use resolution::Resolution;
pub use strip_mesh::Mesh;
pub use surface::{Surface, SurfaceFunction, SurfaceKind, SurfaceRegistry};
pub use vertex::{GridSample, TexCoords, Vertex};
